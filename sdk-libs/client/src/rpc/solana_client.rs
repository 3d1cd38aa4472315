use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use solana_commitment_config::CommitmentConfig;
use solana_hash::Hash;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use tracing::debug;

use crate::rpc::{errors::RpcError, rpc_trait::Rpc};

#[derive(Debug, Clone, PartialEq)]
pub struct MintageClientConfig {
    pub url: String,
    pub commitment_config: CommitmentConfig,
}

impl MintageClientConfig {
    pub fn new<U: ToString>(url: U) -> Self {
        Self {
            url: url.to_string(),
            commitment_config: CommitmentConfig::confirmed(),
        }
    }
}

pub struct MintageClient {
    pub client: RpcClient,
}

impl Debug for MintageClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MintageClient {{ url: {:?} }}", self.client.url())
    }
}

impl MintageClient {
    pub fn new(config: MintageClientConfig) -> Self {
        let client = RpcClient::new_with_commitment(config.url, config.commitment_config);
        Self { client }
    }

    pub fn get_url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl Rpc for MintageClient {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        let lamports = self
            .client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?;
        debug!("rent quote: {} bytes -> {} lamports", data_len, lamports);
        Ok(lamports)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        let (blockhash, _) = self
            .client
            // Confirmed commitments land more reliably than finalized
            .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
            .await?;
        Ok(blockhash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_confirmed_commitment() {
        let config = MintageClientConfig::new("http://localhost:8899");
        assert_eq!(config.url, "http://localhost:8899");
        assert_eq!(config.commitment_config, CommitmentConfig::confirmed());
    }

    #[test]
    fn client_reports_configured_url() {
        let client = MintageClient::new(MintageClientConfig::new("http://localhost:8899"));
        assert_eq!(client.get_url(), "http://localhost:8899");
    }
}
