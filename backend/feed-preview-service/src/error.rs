use core_network::NetworkError;
use thiserror::Error;

/// Result type alias for feed-preview operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
///
/// Collaborator failures pass through transparently; the pipeline adds no
/// context, retries, or classification of its own.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("configuration error: {0}")]
    Config(String),
}
