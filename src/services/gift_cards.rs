use serde::Deserialize;

use crate::errors::AppError;
use crate::models::gift_card;
use crate::services::i18n::Lang;
use crate::services::whatsapp::MessageBuilder;

pub const CUSTOM_MIN: u32 = 10;
pub const CUSTOM_MAX: u32 = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct GiftCardOrder {
    pub tier_id: Option<String>,
    pub custom_amount: Option<u32>,
    pub sender_name: String,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Resolves the order's amount: a tier wins over a custom amount.
pub fn amount_for(order: &GiftCardOrder) -> Result<u32, AppError> {
    if let Some(tier_id) = order.tier_id.as_deref() {
        return gift_card::find(tier_id)
            .map(|t| t.amount)
            .ok_or_else(|| AppError::NotFound(format!("gift card tier {tier_id}")));
    }
    match order.custom_amount {
        Some(amount) if (CUSTOM_MIN..=CUSTOM_MAX).contains(&amount) => Ok(amount),
        Some(amount) => Err(AppError::Validation(format!(
            "custom amount ${amount} must be between ${CUSTOM_MIN} and ${CUSTOM_MAX}"
        ))),
        None => Err(AppError::Validation(
            "choose a gift card tier or a custom amount".to_string(),
        )),
    }
}

pub fn purchase_message(order: &GiftCardOrder, lang: Lang) -> Result<String, AppError> {
    let sender = order.sender_name.trim();
    if sender.is_empty() {
        return Err(AppError::Validation("sender name is required".to_string()));
    }
    let amount = amount_for(order)?;

    Ok(MessageBuilder::new(lang, "wa.gift.header")
        .field("label.amount", format!("${amount}"))
        .field("label.from", sender)
        .field_opt("label.to", order.recipient_name.as_deref())
        .field_opt("label.message", order.note.as_deref())
        .build())
}
