//! Success half of the response envelope. Failures are rendered by
//! `AppError`'s `IntoResponse` impl.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> Envelope<T> {
    pub fn one(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// List payload; `count` always equals `data.len()`.
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
