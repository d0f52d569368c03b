/// Errors from the remote service clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("{service} API error ({status}): {body}")]
    Api {
        /// Which remote service answered.
        service: &'static str,
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The configured base URL cannot carry a path.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
