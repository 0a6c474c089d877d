use std::time::Duration;

use async_trait::async_trait;

use super::{PaymentGateway, PaymentReceipt};

pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, amount: u32, card_last4: &str) -> anyhow::Result<PaymentReceipt> {
        tracing::info!(amount, delay_ms = self.delay.as_millis() as u64, "simulating deposit payment");
        tokio::time::sleep(self.delay).await;

        let id = uuid::Uuid::new_v4().simple().to_string();
        Ok(PaymentReceipt {
            reference: format!("NB-{}", id[..8].to_uppercase()),
            amount,
            card_last4: card_last4.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_waits_for_the_configured_delay() {
        let gateway = SimulatedGateway::new(Duration::from_millis(20));
        let started = tokio::time::Instant::now();
        let receipt = gateway.charge(15, "4242").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(receipt.amount, 15);
        assert_eq!(receipt.card_last4, "4242");
        assert!(receipt.reference.starts_with("NB-"));
        assert_eq!(receipt.reference.len(), 11);
    }
}
