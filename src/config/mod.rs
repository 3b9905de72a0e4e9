//! Configuration module for the guide.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Where the guide reads its tables from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSourceConfig {
    /// PostgREST-compatible hosted backend
    Rest { url: String, api_key: Option<String> },
    /// Local SQLite database file
    Sqlite { path: PathBuf },
}

impl DataSourceConfig {
    /// Pick the backend from a data URL: http(s) URLs are hosted, anything else is a file path.
    pub fn from_url(url: &str, api_key: Option<String>) -> Self {
        if url.starts_with("http://") || url.starts_with("https://") {
            DataSourceConfig::Rest {
                url: url.trim_end_matches('/').to_string(),
                api_key,
            }
        } else {
            DataSourceConfig::Sqlite {
                path: url.trim_start_matches("sqlite:").into(),
            }
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Data source the pages query
    pub data_source: DataSourceConfig,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_url =
            env::var("NAIJA_DATA_URL").unwrap_or_else(|_| "./data/guide.sqlite".to_string());
        let api_key = env::var("NAIJA_DATA_KEY").ok().filter(|k| !k.is_empty());
        let data_source = DataSourceConfig::from_url(&data_url, api_key);

        let raw_addr =
            env::var("NAIJA_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = raw_addr.parse().map_err(|_| {
            AppError::Config(format!("Invalid NAIJA_BIND_ADDR format: {}", raw_addr))
        })?;

        let log_level = env::var("NAIJA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("NAIJA_LOG_JSON")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE"))
            .unwrap_or(false);

        Ok(Self {
            data_source,
            bind_addr,
            log_level,
            log_json,
        })
    }
}
