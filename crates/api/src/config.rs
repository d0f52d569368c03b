use std::path::PathBuf;

use stockwatch_clients::{
    RemoteConfig, DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_REPORTS_BASE_URL, DEFAULT_STATUS_BASE_URL,
    DEFAULT_VOTES_BASE_URL,
};
use stockwatch_store::report_store::DEFAULT_DATA_DIR;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding `reports.json` (default: `.data`).
    pub data_dir: PathBuf,
    /// Remote service base URLs and outbound timeout.
    pub remote: RemoteConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_DIR`             | `.data`                    |
    /// | `REPORTS_BASE_URL`     | `http://localhost:5003`    |
    /// | `VOTES_BASE_URL`       | `http://localhost:5002`    |
    /// | `STATUS_BASE_URL`      | `http://localhost:5005`    |
    /// | `CLIENT_TIMEOUT_SECS`  | `10`                       |
    ///
    /// Panics on unparseable numeric values; misconfiguration should fail
    /// at startup.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_dir = PathBuf::from(env_or("DATA_DIR", DEFAULT_DATA_DIR));

        let remote = RemoteConfig {
            reports_base_url: env_or("REPORTS_BASE_URL", DEFAULT_REPORTS_BASE_URL),
            votes_base_url: env_or("VOTES_BASE_URL", DEFAULT_VOTES_BASE_URL),
            status_base_url: env_or("STATUS_BASE_URL", DEFAULT_STATUS_BASE_URL),
            timeout_secs: std::env::var("CLIENT_TIMEOUT_SECS")
                .map(|v| v.parse().expect("CLIENT_TIMEOUT_SECS must be a valid u64"))
                .unwrap_or(DEFAULT_CLIENT_TIMEOUT_SECS),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            remote,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}
