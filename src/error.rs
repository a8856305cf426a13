use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum AppError {
    /// Single-entity lookup matched zero rows. Carries the entity label.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failure half of the response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to a client. Storage errors never leak.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(_) | AppError::RouteNotFound => self.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            debug!("{self}");
        }
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
