use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::errors::AppError;
use crate::services::banners::{self, BannerKind, BannerState};
use crate::state::AppState;

// GET /api/banners/:client/:banner
pub async fn get_state(
    State(state): State<Arc<AppState>>,
    Path((client_id, banner)): Path<(String, String)>,
) -> Result<Json<BannerState>, AppError> {
    let kind = BannerKind::parse(&banner)?;
    Ok(Json(banners::state(
        state.storage.as_ref(),
        state.clock.as_ref(),
        kind,
        &client_id,
    )))
}

// POST /api/banners/:client/:banner/dismiss
pub async fn dismiss(
    State(state): State<Arc<AppState>>,
    Path((client_id, banner)): Path<(String, String)>,
) -> Result<Json<BannerState>, AppError> {
    let kind = BannerKind::parse(&banner)?;
    Ok(Json(banners::dismiss(
        state.storage.as_ref(),
        state.clock.as_ref(),
        kind,
        &client_id,
    )))
}
