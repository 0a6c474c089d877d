pub mod simulated;

use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub amount: u32,
    pub card_last4: String,
}

/// Deposit "payment". The only implementation is a simulation; the real deposit
/// is settled in person after the WhatsApp hand-off.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: u32, card_last4: &str) -> anyhow::Result<PaymentReceipt>;
}
