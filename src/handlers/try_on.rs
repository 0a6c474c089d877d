use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::models::TryOnSession;
use crate::services::try_on::{self, TryOnRequest};
use crate::state::AppState;

// GET /api/try-on/:client
pub async fn history(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Json<Vec<TryOnSession>> {
    Json(try_on::history(state.storage.as_ref(), &client_id))
}

// POST /api/try-on/:client
pub async fn record(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
    AppJson(body): AppJson<TryOnRequest>,
) -> Result<(StatusCode, Json<TryOnSession>), AppError> {
    let session = try_on::record(state.storage.as_ref(), state.clock.as_ref(), &client_id, body)?;
    Ok((StatusCode::CREATED, Json(session)))
}

// DELETE /api/try-on/:client
pub async fn clear(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Json<serde_json::Value> {
    let cleared = try_on::clear(state.storage.as_ref(), &client_id);
    Json(serde_json::json!({ "cleared": cleared }))
}
