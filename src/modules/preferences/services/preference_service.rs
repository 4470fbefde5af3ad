use std::sync::Arc;

use tracing::{error, info};

use crate::core::error::{AppError, Result};
use crate::modules::gateways::PaymentGateway;
use crate::modules::preferences::models::{CreatePreferenceRequest, PreferencePayload};

/// Checkout-preference creation service
///
/// Validates inbound requests, builds the provider payload and submits it.
/// Provider failures are logged with full detail but surfaced to the caller
/// as a generic gateway error.
pub struct PreferenceService {
    gateway: Arc<dyn PaymentGateway>,
    public_base_url: String,
}

impl PreferenceService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, public_base_url: String) -> Self {
        Self {
            gateway,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a checkout preference and return the provider response verbatim
    pub async fn create_preference(
        &self,
        request: CreatePreferenceRequest,
    ) -> Result<serde_json::Value> {
        let order_id = request
            .pedido_id
            .ok_or_else(|| AppError::validation("pedido_id is required"))?;

        if request.quantity == 0 {
            return Err(AppError::validation("quantity must be at least 1"));
        }

        let payload = PreferencePayload::build(&request, order_id, &self.public_base_url);

        info!(
            order_id,
            gateway = self.gateway.name(),
            "Creating checkout preference"
        );

        self.gateway.create_preference(&payload).await.map_err(|e| {
            error!(order_id, error = %e, "Preference creation failed");
            AppError::gateway("payment provider request failed")
        })
    }
}
