pub mod rpc;

pub use rpc::{MintageClient, MintageClientConfig, Rpc, RpcError};
