//! Client for the remote reports service.
//!
//! The remote service is the production home of reports; its rows carry a
//! moderation status alongside the fields the local store keeps.

use serde::{Deserialize, Serialize};
use stockwatch_core::limits::DEFAULT_REMOTE_REPORT_LIMIT;
use stockwatch_core::report::ReportStatus;

use crate::error::ClientError;
use crate::http::{endpoint, parse_response};

const SERVICE: &str = "reports";

/// A report as returned by the reports service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: String,
    pub machine_id: String,
    pub in_stock: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub status: ReportStatus,
}

/// Body of `POST /api/reports`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportInput {
    pub machine_id: String,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Result of a photo upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedMedia {
    pub media_id: String,
    pub public_url: String,
}

/// HTTP client for the reports service.
#[derive(Clone)]
pub struct ReportsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReportsClient {
    /// * `base_url` - e.g. `http://localhost:5003`.
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// `GET /api/reports/machine/{machine_id}?limit=`.
    ///
    /// `limit` defaults to [`DEFAULT_REMOTE_REPORT_LIMIT`].
    pub async fn get_reports_for_machine(
        &self,
        machine_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ReportRow>, ClientError> {
        let url = endpoint(&self.base_url, &["api", "reports", "machine", machine_id])?;
        let limit = limit.unwrap_or(DEFAULT_REMOTE_REPORT_LIMIT);

        let response = self
            .client
            .get(url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        parse_response(SERVICE, response).await
    }

    /// `POST /api/media/upload` with the file in a multipart part named
    /// `photo`.
    pub async fn upload_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<UploadedMedia, ClientError> {
        let url = endpoint(&self.base_url, &["api", "media", "upload"])?;

        let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(mime) = content_type {
            part = part.mime_str(mime)?;
        }
        let form = reqwest::multipart::Form::new().part("photo", part);

        let response = self.client.post(url).multipart(form).send().await?;

        parse_response(SERVICE, response).await
    }

    /// `POST /api/reports` with a JSON body.
    pub async fn create_report(&self, input: &CreateReportInput) -> Result<ReportRow, ClientError> {
        let url = endpoint(&self.base_url, &["api", "reports"])?;

        let response = self.client.post(url).json(input).send().await?;

        parse_response(SERVICE, response).await
    }
}
