//! Client for the remote machine status service.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::http::{endpoint, parse_response};

const SERVICE: &str = "status";

/// How much the status service trusts its likelihood estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Aggregated stock status of a machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineStatus {
    #[serde(rename = "machineId")]
    pub machine_id: String,
    /// Probability in `0.0..=1.0` that the machine is currently stocked.
    pub in_stock_likelihood: f64,
    pub confidence: Confidence,
    /// Number of reports the estimate is based on.
    pub sample_size: u64,
    pub last_seen_in_stock_at: Option<String>,
    pub last_report_at: Option<String>,
}

/// HTTP client for the status service.
#[derive(Clone)]
pub struct StatusClient {
    client: reqwest::Client,
    base_url: String,
}

impl StatusClient {
    /// * `base_url` - e.g. `http://localhost:5005`.
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// `GET /api/status/machine/{machine_id}`.
    pub async fn get_machine_status(&self, machine_id: &str) -> Result<MachineStatus, ClientError> {
        let url = endpoint(&self.base_url, &["api", "status", "machine", machine_id])?;

        let response = self.client.get(url).send().await?;

        parse_response(SERVICE, response).await
    }
}
