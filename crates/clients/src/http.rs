//! Request helpers shared by the service clients.

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Join `segments` onto `base`, percent-encoding each one.
///
/// A trailing slash on the base URL is tolerated.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url, ClientError> {
    let invalid = || ClientError::InvalidBaseUrl(base.to_string());

    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Pass the response through on 2xx, otherwise capture status and body text.
async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::debug!(service, status = status.as_u16(), "Remote call failed");
        return Err(ClientError::Api {
            service,
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Decode a successful JSON response body.
pub(crate) async fn parse_response<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = ensure_success(service, response).await?;
    Ok(response.json::<T>().await?)
}
