use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::handlers::extract::AppJson;
use crate::models::gift_card::TIERS;
use crate::models::GiftCardTier;
use crate::services::gift_cards::{amount_for, purchase_message, GiftCardOrder};
use crate::services::whatsapp::wa_link;
use crate::state::AppState;

// GET /api/gift-cards/tiers
pub async fn tiers() -> Json<&'static [GiftCardTier]> {
    Json(TIERS)
}

// POST /api/gift-cards/purchase
pub async fn purchase(
    State(state): State<Arc<AppState>>,
    AppJson(order): AppJson<GiftCardOrder>,
) -> Result<Json<serde_json::Value>, AppError> {
    let lang = state.lang(order.lang.as_deref());
    let message = purchase_message(&order, lang)?;
    let amount = amount_for(&order)?;
    let url = wa_link(&state.config.whatsapp_phone, &message)?;

    tracing::info!(amount, tier = ?order.tier_id, "gift card request handed off");

    Ok(Json(serde_json::json!({
        "amount": amount,
        "message": message,
        "whatsapp_url": url.as_str(),
    })))
}
