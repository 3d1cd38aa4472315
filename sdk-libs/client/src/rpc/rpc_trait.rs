use async_trait::async_trait;
use solana_hash::Hash;

use crate::rpc::errors::RpcError;

/// Read capabilities the instruction composer needs from a chain endpoint.
///
/// Implementations perform one request per call and surface failures as
/// [`RpcError`] without retrying; callers that want resilience wrap calls
/// externally.
#[async_trait]
pub trait Rpc: Send + Sync {
    /// Minimum lamport balance that keeps an account of `data_len` bytes
    /// exempt from rent collection.
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError>;

    /// Latest blockhash, used to anchor a transaction's lifetime.
    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError>;
}
