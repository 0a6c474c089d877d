use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::services::pricing::{format_cents, LineItem, LineItemRequest, PriceCalculator};
use crate::services::whatsapp::wa_link;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub items: Vec<LineItemRequest>,
    pub lang: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct Quote {
    pub lines: Vec<LineItem>,
    pub total_cents: u64,
    pub total_label: String,
    pub whatsapp_url: String,
}

// POST /api/pricing/quote
pub async fn quote(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<QuoteRequest>,
) -> Result<Json<Quote>, AppError> {
    if body.items.is_empty() {
        return Err(AppError::Validation("add at least one service".to_string()));
    }

    let mut calculator = PriceCalculator::new();
    for item in &body.items {
        calculator.add(&item.service_id, item.quantity)?;
    }

    let lang = state.lang(body.lang.as_deref());
    let message = calculator.quote_message(lang, body.name.as_deref());
    let url = wa_link(&state.config.whatsapp_phone, &message)?;
    let total_cents = calculator.total_cents();

    Ok(Json(Quote {
        lines: calculator.items().to_vec(),
        total_cents,
        total_label: format_cents(total_cents),
        whatsapp_url: url.to_string(),
    }))
}
