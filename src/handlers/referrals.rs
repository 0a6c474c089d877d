use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::services::referrals::{code_for, share_message};
use crate::services::whatsapp::encode_text;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReferralRequest {
    pub client_id: String,
    #[serde(default)]
    pub name: String,
    pub lang: Option<String>,
}

// POST /api/referrals
pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<ReferralRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let client_id = body.client_id.trim();
    if client_id.is_empty() {
        return Err(AppError::Validation("client_id is required".to_string()));
    }

    let code = code_for(state.storage.as_ref(), &state.rng, client_id, &body.name);
    let lang = state.lang(body.lang.as_deref());
    let message = share_message(lang, &state.config.business_name, &code);

    // A share goes to a friend, so there is no recipient number.
    let share_url = format!("https://wa.me/?text={}", encode_text(&message));

    Ok(Json(serde_json::json!({
        "code": code,
        "message": message,
        "share_url": share_url,
    })))
}
