use super::error::ApiError;
use super::AppState;
use crate::receipts::Receipt;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub receipts: usize,
}

/// POST /receipts/process
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessResponse>), ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected receipt");
        ApiError::InvalidReceipt
    })?;

    let submitted = state.store.submit(receipt);
    Ok((StatusCode::ACCEPTED, Json(ProcessResponse { id: submitted.id })))
}

/// GET /receipts/{id}/points
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.store.get_points(&id).inspect_err(|_| {
        tracing::debug!(id = %id, "points requested for unknown receipt");
    })?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        receipts: state.store.len(),
    };

    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(body),
    )
}
