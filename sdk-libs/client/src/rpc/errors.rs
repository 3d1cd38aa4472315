use solana_rpc_client_api::client_error::Error as ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("ClientError: {0}")]
    ClientError(#[from] Box<ClientError>),

    #[error("Error: `{0}`")]
    CustomError(String),
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        RpcError::ClientError(Box::new(err))
    }
}
