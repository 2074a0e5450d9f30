use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error(transparent)]
    Core(#[from] posty_core::error::ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to server at {0}, is it running?")]
    ConnectionRefused(String),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response from server: {0}")]
    Json(#[from] serde_json::Error),
}
