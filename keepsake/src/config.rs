use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_keys: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub local_path: Option<String>,
    /// Background replica sync interval. Only meaningful for remote databases.
    pub sync_interval_secs: Option<u64>,
}

/// Family-tree traversal defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeConfig {
    /// Depth used when a tree request does not specify `maxDepth`.
    pub default_depth: u32,
    /// Upper bound applied to any requested `maxDepth`.
    pub max_depth_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("KEEPSAKE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("KEEPSAKE_PORT", 3000),
                api_keys: env::var("KEEPSAKE_API_KEYS")
                    .map(|keys| keys.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:keepsake.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
                sync_interval_secs: parse_env_opt("DATABASE_SYNC_INTERVAL_SECS"),
            },
            tree: TreeConfig {
                default_depth: parse_env_or("TREE_DEFAULT_DEPTH", 3),
                max_depth_limit: parse_env_or("TREE_MAX_DEPTH", 6),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
