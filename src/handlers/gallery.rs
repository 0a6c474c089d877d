use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::models::gallery;
use crate::services::ai::gallery_search::{search, SearchHit};
use crate::services::ai::style_fusion::{fuse, Fusion};
use crate::services::whatsapp::{design_message, wa_link};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

// GET /api/gallery?q=
pub async fn search_gallery(Query(query): Query<SearchQuery>) -> Json<Vec<SearchHit>> {
    Json(search(&query.q))
}

#[derive(Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

// GET /api/gallery/:id/inquiry
pub async fn inquiry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let item = gallery::find(&id).ok_or_else(|| AppError::NotFound(format!("gallery item {id}")))?;
    let lang = state.lang(query.lang.as_deref());
    let url = wa_link(
        &state.config.whatsapp_phone,
        &design_message(lang, item.title, Some(item.image)),
    )?;
    Ok(Json(serde_json::json!({ "item": item, "url": url.as_str() })))
}

#[derive(Deserialize)]
pub struct FusionRequest {
    pub base_id: String,
    pub accent_id: String,
}

// POST /api/gallery/fusion
pub async fn fusion(AppJson(body): AppJson<FusionRequest>) -> Result<Json<Fusion>, AppError> {
    Ok(Json(fuse(&body.base_id, &body.accent_id)?))
}
