use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<String>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Minimal JSON-RPC client for the configured Base endpoint. Used by the
/// diagnostic surface to confirm the RPC URL actually answers.
#[derive(Clone)]
pub struct BaseRpcClient {
    client: Client,
    url: String,
}

impl BaseRpcClient {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// eth_chainId probe; returns the hex chain id (e.g. "0x2105" for Base).
    pub async fn chain_id(&self) -> AppResult<String> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_chainId",
            "params": []
        });

        let response: JsonRpcResponse = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(err) = response.error {
            return Err(AppError::ExternalApiError(format!(
                "RPC error {}: {}",
                err.code, err.message
            )));
        }

        response
            .result
            .ok_or_else(|| AppError::ExternalApiError("Empty RPC response".to_string()))
    }
}
