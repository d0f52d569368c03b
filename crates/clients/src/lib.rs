//! REST clients for the external reports, votes, and status services.
//!
//! Each client wraps a shared [`reqwest::Client`] and a base URL. Calls
//! check the status code and decode JSON; there is no retry or caching.

pub mod error;
mod http;
pub mod reports;
pub mod status;
pub mod votes;

use std::time::Duration;

pub use error::ClientError;
pub use reports::ReportsClient;
pub use status::StatusClient;
pub use votes::VotesClient;

/// Default base URL of the reports service.
pub const DEFAULT_REPORTS_BASE_URL: &str = "http://localhost:5003";
/// Default base URL of the votes service.
pub const DEFAULT_VOTES_BASE_URL: &str = "http://localhost:5002";
/// Default base URL of the status service.
pub const DEFAULT_STATUS_BASE_URL: &str = "http://localhost:5005";
/// Default timeout for outbound requests, in seconds.
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 10;

/// Base URLs and timeout for the remote services.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub reports_base_url: String,
    pub votes_base_url: String,
    pub status_base_url: String,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            reports_base_url: DEFAULT_REPORTS_BASE_URL.into(),
            votes_base_url: DEFAULT_VOTES_BASE_URL.into(),
            status_base_url: DEFAULT_STATUS_BASE_URL.into(),
            timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

/// One client per remote service, sharing a connection pool.
#[derive(Clone)]
pub struct RemoteClients {
    pub reports: ReportsClient,
    pub votes: VotesClient,
    pub status: StatusClient,
}

impl RemoteClients {
    /// Build all three clients over a single [`reqwest::Client`].
    pub fn from_config(config: &RemoteConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            reports: ReportsClient::with_client(client.clone(), config.reports_base_url.clone()),
            votes: VotesClient::with_client(client.clone(), config.votes_base_url.clone()),
            status: StatusClient::with_client(client, config.status_base_url.clone()),
        })
    }
}
