use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use crate::db::Page;

/// `Query` that never rejects. A query string that does not deserialize
/// (e.g. a repeated key) is treated as absent, so every parameter takes its
/// default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(e) => {
                debug!("Ignoring query string: {}", e.body_text());
                Ok(Self(T::default()))
            }
        }
    }
}

/// `Path` that never rejects. Segments that fail to decode (invalid
/// percent-encoded UTF-8) come through as `None`, which handlers treat like
/// an id that matches no row.
#[derive(Debug, Clone, Default)]
pub struct ApiPath<T>(pub Option<T>);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(Some(value))),
            Err(e) => {
                debug!("Undecodable path: {}", e.body_text());
                Ok(Self(None))
            }
        }
    }
}

// Numbers arrive as strings so a bad value falls back to the default
// instead of rejecting the request.

#[derive(Debug, Default, Deserialize)]
pub struct FighterListQuery {
    pub search: Option<String>,
    pub stance: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FighterSearchQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

impl LimitQuery {
    pub fn limit_or(&self, default: i64) -> i64 {
        non_negative_or(self.limit.as_deref(), default)
    }
}

pub fn page(limit: Option<&str>, offset: Option<&str>, default_limit: i64) -> Page {
    Page::new(
        non_negative_or(limit, default_limit),
        non_negative_or(offset, 0),
    )
}

/// Parses a path id. Anything that is not an integer matches no row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// `parse_id` over a segment that may have failed to decode.
pub fn path_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(parse_id)
}

fn non_negative_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(default)
}
