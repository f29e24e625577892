use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Failures of a single fetch-and-normalize pass.
///
/// All variants are non-fatal: the caller surfaces them as a warning
/// and serves no dataset for the failed pass. A dataset cached from an
/// earlier successful pass is unaffected.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (connection refused, DNS, timeout) or a
    /// non-2xx response status. Single attempt, no retry.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The JSON was valid but did not match the expected array of
    /// per-country records.
    #[error("unexpected response schema: {0}")]
    Schema(String),
}
