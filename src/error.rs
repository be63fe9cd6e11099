use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog load error: {0}")]
    Load(String),

    #[error("Term extraction error: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    pub fn log_safe(&self) -> String {
        match self {
            // Catalog rows can be long; keep the log line short
            Error::Load(msg) => format!("Catalog load error: {}", truncate_for_log(msg)),
            Error::Extraction(msg) => format!("Term extraction error: {}", truncate_for_log(msg)),
            Error::Io(_) => "I/O operation failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Validation(msg) => format!("Validation error: {msg}"),
            Error::Internal(msg) => format!("Internal error: {msg}"),
        }
    }
}

fn truncate_for_log(msg: &str) -> String {
    const MAX_LOG_LEN: usize = 200;

    if msg.chars().count() <= MAX_LOG_LEN {
        msg.to_string()
    } else {
        let head: String = msg.chars().take(MAX_LOG_LEN).collect();
        format!("{head}...")
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request error: {}", self.log_safe());

        let (status, error_message) = match &self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::Extraction(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Query analysis failed".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
