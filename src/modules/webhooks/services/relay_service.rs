use std::sync::Arc;

use tracing::{error, info, warn};

use crate::core::error::{AppError, Result};
use crate::modules::gateways::PaymentGateway;
use crate::modules::webhooks::models::StatusUpdate;
use crate::modules::webhooks::services::OrderBackend;

/// Outcome of relaying one payment notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Status pushed to the order backend
    Forwarded { order_id: i64, status: String },

    /// Payment carried no external_reference; nothing to notify
    MissingOrderReference,
}

/// Fetch-and-forward relay for provider payment notifications
///
/// Looks up the authoritative payment status, maps `external_reference` back
/// to the internal order id and pushes the result downstream. Failures are
/// the dispatcher's to log; the webhook response never depends on them.
pub struct RelayService {
    gateway: Arc<dyn PaymentGateway>,
    backend: Arc<dyn OrderBackend>,
}

impl RelayService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, backend: Arc<dyn OrderBackend>) -> Self {
        Self { gateway, backend }
    }

    /// Process a single payment notification
    ///
    /// Distinguishes the expected "no order id on this payment" case from
    /// genuine provider/backend failures: the former is an `Ok` outcome, the
    /// latter an error for the caller to log.
    pub async fn process_notification(&self, payment_id: &str) -> Result<RelayOutcome> {
        let payment = self.gateway.get_payment(payment_id).await?;

        let Some(reference) = payment.external_reference.filter(|r| !r.is_empty()) else {
            warn!(
                payment_id = %payment_id,
                status = %payment.status,
                "Payment has no external_reference; skipping backend notification"
            );
            return Ok(RelayOutcome::MissingOrderReference);
        };

        let order_id: i64 = reference.parse().map_err(|_| {
            AppError::validation(format!(
                "external_reference {:?} is not a numeric order id",
                reference
            ))
        })?;

        let update = StatusUpdate {
            pedido_id: order_id,
            status: payment.status.clone(),
            payment_id: payment.id,
        };

        info!(
            payment_id = payment.id,
            order_id,
            status = %payment.status,
            "Forwarding payment status to order backend"
        );

        self.backend.push_status(&update).await?;

        Ok(RelayOutcome::Forwarded {
            order_id,
            status: payment.status,
        })
    }

    /// Fire-and-forget dispatch of a notification
    ///
    /// The spawned task carries only the payment id and service handles; it
    /// outlives the webhook request and nobody joins it. Errors end at a log
    /// line so the provider never sees a failure and never redelivers.
    pub fn dispatch(self: &Arc<Self>, payment_id: String) {
        let relay = Arc::clone(self);

        tokio::spawn(async move {
            match relay.process_notification(&payment_id).await {
                Ok(RelayOutcome::Forwarded { order_id, status }) => {
                    info!(
                        payment_id = %payment_id,
                        order_id,
                        status = %status,
                        "Notification relayed"
                    );
                }
                Ok(RelayOutcome::MissingOrderReference) => {
                    // Already logged at warn level in process_notification.
                }
                Err(e) => {
                    error!(
                        payment_id = %payment_id,
                        error = %e,
                        "Failed to relay payment notification"
                    );
                }
            }
        });
    }
}
