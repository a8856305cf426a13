//! Service metadata for `/` and the `/api/health` probe.

use axum::extract::State;
use serde::Serialize;

use crate::api::envelope::Envelope;
use crate::api::routes::{ApiState, ENDPOINTS};
use crate::db::SchemaProfile;
use crate::error::Result;

pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub schema: SchemaProfile,
    pub endpoints: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub schema: SchemaProfile,
    pub database: &'static str,
}

/// GET /
pub async fn index(State(state): State<ApiState>) -> Envelope<ServiceInfo> {
    Envelope::one(ServiceInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        schema: state.store.profile(),
        endpoints: ENDPOINTS,
    })
}

/// GET /api/health. Fails with 500 when the database does not answer.
pub async fn health(State(state): State<ApiState>) -> Result<Envelope<HealthStatus>> {
    state.store.ping().await?;
    Ok(Envelope::one(HealthStatus {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        schema: state.store.profile(),
        database: "connected",
    }))
}
