use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::modules::webhooks::models::StatusUpdate;

/// Downstream order-management backend receiving payment-status pushes
#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn push_status(&self, update: &StatusUpdate) -> Result<()>;
}

/// HTTP notifier posting status updates to the configured backend URL
///
/// The client timeout bounds the single outbound call; there is no retry.
pub struct HttpOrderBackend {
    client: Client,
    notify_url: String,
}

impl HttpOrderBackend {
    pub fn new(notify_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, notify_url })
    }
}

#[async_trait]
impl OrderBackend for HttpOrderBackend {
    async fn push_status(&self, update: &StatusUpdate) -> Result<()> {
        let response = self
            .client
            .post(&self.notify_url)
            .json(update)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(AppError::gateway(format!(
                "order backend returned {}: {}",
                status, body
            )));
        }

        info!(
            order_id = update.pedido_id,
            payment_id = update.payment_id,
            backend_status = %status,
            backend_body = %body,
            "Order backend acknowledged status push"
        );

        Ok(())
    }
}
