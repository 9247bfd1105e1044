use crate::config::WalletConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BASE_CHAIN_ID: u64 = 8453;
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
}

/// Wallet connector configuration mirrored to the frontend. The
/// WalletConnect project id itself is never echoed, only its presence.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfigResponse {
    pub default_chain: String,
    pub chains: Vec<ChainInfo>,
    pub walletconnect_project_id_set: bool,
    pub database_backend: String,
}

impl WalletConfigResponse {
    pub fn from_config(config: &WalletConfig, database_backend: &str) -> Self {
        Self {
            default_chain: config.default_chain.clone(),
            chains: vec![
                ChainInfo {
                    chain_id: BASE_CHAIN_ID,
                    name: "Base".to_string(),
                    rpc_url: config.base_rpc_url.clone(),
                },
                ChainInfo {
                    chain_id: BASE_SEPOLIA_CHAIN_ID,
                    name: "Base Sepolia".to_string(),
                    rpc_url: config.base_sepolia_rpc_url.clone(),
                },
            ],
            walletconnect_project_id_set: !config.walletconnect_project_id.is_empty(),
            database_backend: database_backend.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestRpcResponse {
    pub rpc_url: String,
    /// Hex chain id as returned by eth_chainId
    pub chain_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_config_response_hides_project_id() {
        let mut config = WalletConfig::default();
        config.walletconnect_project_id = "secret-project-id".to_string();
        let response = WalletConfigResponse::from_config(&config, "sqlite");

        assert!(response.walletconnect_project_id_set);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret-project-id"));
    }

    #[test]
    fn test_wallet_config_response_chains() {
        let response = WalletConfigResponse::from_config(&WalletConfig::default(), "postgres");
        assert_eq!(response.chains.len(), 2);
        assert_eq!(response.chains[0].chain_id, BASE_CHAIN_ID);
        assert_eq!(response.chains[1].chain_id, BASE_SEPOLIA_CHAIN_ID);
    }
}
