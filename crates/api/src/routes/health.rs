//! Liveness and storage readiness at `GET /health` (outside `/api`).

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use marcas_db::repositories::MarcaRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health payload.
///
/// `records` is only present when the `marcas` table could be read, which
/// also proves the schema was created at startup.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<i64>,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let records = match MarcaRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Health probe could not read marcas table");
            None
        }
    };

    Json(HealthResponse {
        status: if records.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: records.is_some(),
        records,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
