use async_trait::async_trait;

use crate::models::Notification;

/// System-level notification delivery (the browser Notification API on the site).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()>;
}

pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        tracing::info!(
            client_id = %notification.client_id,
            title = %notification.title,
            "notification delivered"
        );
        Ok(())
    }
}
