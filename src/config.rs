use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` points at Supabase, `sqlite://` at the local store.
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    pub walletconnect_project_id: String,
    pub base_rpc_url: String,
    pub base_sepolia_rpc_url: String,
    /// "base" or "base-sepolia"
    pub default_chain: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            walletconnect_project_id: String::new(),
            base_rpc_url: "https://mainnet.base.org".to_string(),
            base_sepolia_rpc_url: "https://sepolia.base.org".to_string(),
            default_chain: "base-sepolia".to_string(),
        }
    }
}

/// Reads the first environment variable in `names` that is set.
/// The frontend used NEXT_PUBLIC_* names for the wallet settings, so those
/// are accepted as aliases.
fn env_any(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env::var(name).ok())
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // Try the config file first; when it is missing run purely from
        // environment variables and defaults.
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => {
                toml::from_str(&config_str).map_err(|e| format!("Failed to parse {config_path}: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                Config {
                    server: ServerConfig {
                        host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    database: DatabaseConfig {
                        // local SQLite store unless a Supabase URL is given
                        url: env::var("DATABASE_URL")
                            .unwrap_or_else(|_| "sqlite://koquifi.db?mode=rwc".to_string()),
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    wallet: WalletConfig::default(),
                }
            }
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        // Environment variables win even when the file exists.
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            config.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            config.database.max_connections = mc;
        }
        if let Some(v) = env_any(&[
            "WALLETCONNECT_PROJECT_ID",
            "NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID",
        ]) {
            config.wallet.walletconnect_project_id = v;
        }
        if let Some(v) = env_any(&["BASE_RPC_URL", "NEXT_PUBLIC_BASE_RPC_URL"]) {
            config.wallet.base_rpc_url = v;
        }
        if let Some(v) = env_any(&["BASE_SEPOLIA_RPC_URL", "NEXT_PUBLIC_BASE_SEPOLIA_RPC_URL"]) {
            config.wallet.base_sepolia_rpc_url = v;
        }
        if let Ok(v) = env::var("DEFAULT_CHAIN") {
            config.wallet.default_chain = v;
        }

        Ok(config)
    }
}
