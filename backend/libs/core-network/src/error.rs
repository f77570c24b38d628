use thiserror::Error;

/// Result type alias for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors surfaced by the network collaborator
///
/// Callers propagate these unmodified; the feed pipeline performs no
/// retries, wrapping, or classification on top of them.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("unexpected status {code} for {path}")]
    UnexpectedStatus { path: String, code: u16 },

    #[error("empty response body for {path}")]
    EmptyBody { path: String },

    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}
