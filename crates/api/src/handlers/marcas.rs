//! Handlers for trademark ("marca") records.
//!
//! Every record endpoint accepts the target id either as a path segment
//! (`/marcas/{id}`) or as a query parameter (`/marcas?id=`).

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marcas_core::error::CoreError;
use marcas_core::marca::ENTITY_NAME;
use marcas_core::types::DbId;
use marcas_db::models::marca::{CreateMarca, Marca, UpdateMarca};
use marcas_db::repositories::MarcaRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::IdParams;
use crate::state::AppState;

/// Confirmation payload returned by delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Record deleted successfully";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    })
}

/// A racing create that derived an already-taken number is a `Conflict`.
fn registration_conflict(err: sqlx::Error) -> AppError {
    if marcas_db::is_unique_violation(&err) {
        tracing::warn!(error = %err, "Registration number collision");
        return AppError::Core(CoreError::Conflict(
            "Registration number already assigned, retry the request".to_string(),
        ));
    }
    AppError::Database(err)
}

/// Resolve the required `?id=` query parameter.
fn require_id(params: Result<Query<IdParams>, QueryRejection>) -> AppResult<DbId> {
    let Query(params) = params?;
    params
        .id
        .ok_or_else(|| AppError::BadRequest("id query parameter is required".to_string()))
}

// ---------------------------------------------------------------------------
// Collection endpoints (`/marcas`, `/marcas?id=`)
// ---------------------------------------------------------------------------

/// GET /api/marcas
///
/// List all records, or a single record when `?id=` is supplied.
pub async fn list_or_get(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    if let Some(id) = params.id {
        return Ok(get_by_id(&state, id).await?.into_response());
    }

    let marcas = MarcaRepo::list(&state.pool).await?;
    Ok(Json(marcas).into_response())
}

/// POST /api/marcas
///
/// Create a record. The registration number is assigned server-side and
/// the status starts as `Pending`.
pub async fn create_marca(
    State(state): State<AppState>,
    payload: Result<Json<CreateMarca>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let fields = input.into_fields()?;

    let marca = MarcaRepo::create(&state.pool, &fields, None)
        .await
        .map_err(registration_conflict)?;

    tracing::info!(
        marca_id = marca.id,
        registration_number = %marca.registration_number,
        "Marca created",
    );

    Ok((StatusCode::CREATED, Json(marca)))
}

/// PUT /api/marcas?id=
pub async fn update_by_query(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
    payload: Result<Json<UpdateMarca>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = require_id(params)?;
    update(&state, id, payload).await
}

/// DELETE /api/marcas?id=
pub async fn delete_by_query(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let id = require_id(params)?;
    delete(&state, id).await
}

// ---------------------------------------------------------------------------
// Item endpoints (`/marcas/{id}`)
// ---------------------------------------------------------------------------

/// GET /api/marcas/{id}
pub async fn get_marca(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    get_by_id(&state, id).await
}

/// PUT /api/marcas/{id}
pub async fn update_marca(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateMarca>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    update(&state, id, payload).await
}

/// DELETE /api/marcas/{id}
pub async fn delete_marca(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    delete(&state, id).await
}

// ---------------------------------------------------------------------------
// Shared implementations
// ---------------------------------------------------------------------------

async fn get_by_id(state: &AppState, id: DbId) -> AppResult<Json<Marca>> {
    let marca = MarcaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(marca))
}

/// All four text fields are overwritten; status only when supplied.
async fn update(
    state: &AppState,
    id: DbId,
    payload: Result<Json<UpdateMarca>, JsonRejection>,
) -> AppResult<Json<Marca>> {
    let Json(input) = payload?;
    let (fields, status) = input.into_parts()?;

    let marca = MarcaRepo::update(&state.pool, id, &fields, status.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(marca_id = id, status = %marca.status, "Marca updated");

    Ok(Json(marca))
}

async fn delete(state: &AppState, id: DbId) -> AppResult<Json<MessageResponse>> {
    let deleted = MarcaRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(marca_id = id, "Marca deleted");

    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE,
    }))
}
