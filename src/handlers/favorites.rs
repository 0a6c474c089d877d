use std::collections::BTreeSet;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::errors::AppError;
use crate::services::favorites;
use crate::state::AppState;

// GET /api/favorites/:client
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Json<BTreeSet<String>> {
    Json(favorites::list(state.storage.as_ref(), &client_id))
}

// POST /api/favorites/:client/:item/toggle
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    Path((client_id, item_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (favorite, all) = favorites::toggle(state.storage.as_ref(), &client_id, &item_id)?;
    Ok(Json(serde_json::json!({
        "item_id": item_id,
        "favorite": favorite,
        "favorites": all,
    })))
}
