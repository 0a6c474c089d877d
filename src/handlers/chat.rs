use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::services::ai::chat::{respond, ChatReply};
use crate::services::whatsapp::{chat_handoff_message, wa_link};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    #[serde(flatten)]
    pub reply: ChatReply,
    pub whatsapp_url: Option<String>,
}

// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    let lang = state.lang(body.lang.as_deref());
    let reply = respond(lang, message);
    tracing::debug!(topic = ?reply.topic, hand_off = reply.hand_off, "chat reply");

    // typing indicator
    let delay = Duration::from_millis(state.config.chat_typing_delay_ms);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let whatsapp_url = if reply.hand_off {
        let text = chat_handoff_message(lang, message);
        Some(wa_link(&state.config.whatsapp_phone, &text)?.to_string())
    } else {
        None
    };

    Ok(Json(ChatResponse {
        reply,
        whatsapp_url,
    }))
}
