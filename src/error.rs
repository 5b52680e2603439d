use thiserror::Error;

/// A recipe lookup that did not produce a usable answer.
///
/// Every variant ends in the same error view; they only differ in what gets
/// written to the log.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never completed (DNS, TLS, connection, timeout)
    #[error("Failed to reach recipe service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Recipe service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the expected JSON shape
    #[error("Malformed recipe response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by the crate outside of a single lookup
#[derive(Error, Debug)]
pub enum FinderError {
    /// A recipe lookup failed
    #[error("Lookup failed: {0}")]
    LookupError(#[from] LookupError),

    /// The HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    ClientError(reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
