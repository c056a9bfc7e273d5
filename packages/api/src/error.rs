use thiserror::Error;

/// Failure of an API operation.
///
/// The UI treats everything except [`ApiError::Unauthorized`] the same way
/// (log it, show one static alert). `Unauthorized` is split out so a stale or
/// revoked token can be handled cross-cuttingly: clear the session and send
/// the user back to the login page.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the bearer token (HTTP 401).
    #[error("authorization rejected by the server")]
    Unauthorized,

    /// Any other non-2xx response. Server error detail is discarded.
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    /// Transport failure or an unreadable response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
