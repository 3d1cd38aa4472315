pub mod errors;
mod rpc_trait;
mod solana_client;

pub use errors::RpcError;
pub use rpc_trait::Rpc;
pub use solana_client::{MintageClient, MintageClientConfig};
