use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    /// Required input field absent or empty. Carries the field name.
    MissingInput(String),
    InvalidInput(String),
    Store(StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingInput(field) => write!(f, "Missing Input: {field} is required"),
            AppError::InvalidInput(msg) => write!(f, "Invalid Input: {msg}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingInput(field) => {
                (StatusCode::BAD_REQUEST, format!("{field} is required"))
            }
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(err) => {
                tracing::error!("Error storing record: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
        };

        let body = json!({ "status": "error", "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

/// Anything that stops the process before it starts serving.
#[derive(Debug)]
pub enum StartupError {
    Config(String),
    Connect(StoreError),
    Schema { table: String, source: StoreError },
    Io(std::io::Error),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(msg) => write!(f, "Configuration error: {msg}"),
            StartupError::Connect(err) => write!(f, "Database connection failed: {err}"),
            StartupError::Schema { table, source } => {
                write!(f, "Failed to initialize table {table}: {source}")
            }
            StartupError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<std::io::Error> for StartupError {
    fn from(err: std::io::Error) -> Self {
        StartupError::Io(err)
    }
}
