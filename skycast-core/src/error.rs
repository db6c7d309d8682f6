use thiserror::Error;

/// Failure modes of a single weather fetch.
///
/// The frontend treats every variant the same way (clear the snapshot, log,
/// show the empty state), but keeping the taxonomy explicit means a shape
/// mismatch surfaces as a parse failure instead of a panic deep in field
/// access.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, TLS, or reading the body.
    #[error("request to weather provider failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("weather provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        /// Response body, truncated for the error message.
        body: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

impl FetchError {
    /// True when the provider itself rejected the request (as opposed to a
    /// transport or parse problem). Useful for log levels.
    pub fn is_rejection(&self) -> bool {
        matches!(self, FetchError::Status { .. })
    }
}
