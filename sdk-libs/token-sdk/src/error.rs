use mintage_client::RpcError;
use solana_program_error::ProgramError;
use thiserror::Error;

/// Errors surfaced while composing mint initialization instructions.
#[derive(Error, Debug)]
pub enum TokenSdkError {
    /// Malformed or unsupported extension configuration. Not retryable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A chain read (rent quote or blockhash) failed. Retryable by the
    /// caller; never retried here.
    #[error("Quote unavailable: {0}")]
    QuoteUnavailable(#[from] RpcError),

    /// An instruction encoder rejected its inputs; propagated unchanged.
    #[error("Encoding error: {0}")]
    Encoding(#[from] ProgramError),
}
