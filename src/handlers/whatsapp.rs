use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::services::whatsapp::{inquiry_message, wa_link};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct InquiryRequest {
    pub name: String,
    pub message: String,
    pub lang: Option<String>,
}

// POST /api/whatsapp/inquiry
pub async fn inquiry(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<InquiryRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let name = body.name.trim();
    let message = body.message.trim();
    if name.is_empty() || message.is_empty() {
        return Err(AppError::Validation("name and message are required".to_string()));
    }

    let lang = state.lang(body.lang.as_deref());
    let url = wa_link(&state.config.whatsapp_phone, &inquiry_message(lang, name, message))?;
    Ok(Json(serde_json::json!({ "url": url.as_str() })))
}
