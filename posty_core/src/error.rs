use serde_json;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Unknown response type: {0}")]
    UnknownResponseKind(String),

    #[error("Invalid responses: {0}")]
    InvalidResponses(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Generation task aborted: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
