use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub type ResultAPI = std::result::Result<Json<Value>, crate::error::ErrorBackend>;
pub type Result<T> = std::result::Result<T, crate::error::ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] posty_core::error::ErrorCore),

    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("request rejected with: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Field {0} is required")]
    MissingField(&'static str),

    #[error("Post {0} not found")]
    PostNotFound(String),
}

impl ErrorBackend {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::IO(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::JsonRejection(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::EmptyPrompt => StatusCode::BAD_REQUEST,
            ErrorBackend::MissingField(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::PostNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let body = Json(json!({
            "error": match status {
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => self.to_string(),
                _ => "An unexpected error occurred".to_string(),
            }
        }));

        error!("ErrorBackend occurred: {}", self);
        (status, body).into_response()
    }
}
