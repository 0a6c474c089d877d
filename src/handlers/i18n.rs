use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::services::i18n::translate;
use crate::state::AppState;

// GET /api/i18n/:lang/:key
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Path((lang, key)): Path<(String, String)>,
) -> Json<serde_json::Value> {
    let lang = state.lang(Some(&lang));
    Json(serde_json::json!({
        "lang": lang.as_str(),
        "key": key,
        "value": translate(lang, &key),
    }))
}
