use crate::core::Result;
use crate::modules::preferences::models::PreferencePayload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Payment gateway trait for creating checkout preferences and looking up
/// payments. Handlers receive an injected `Arc<dyn PaymentGateway>` rather
/// than reaching for a process-global SDK handle.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout preference and return the provider's raw response
    async fn create_preference(&self, payload: &PreferencePayload)
        -> Result<serde_json::Value>;

    /// Look up full payment details by payment id
    async fn get_payment(&self, payment_id: &str) -> Result<PaymentDetails>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Authoritative payment details fetched from the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// Provider-side payment id
    pub id: i64,

    /// Provider-defined status string (approved/pending/rejected/...)
    pub status: String,

    /// The order id we supplied at preference-creation time, echoed back
    pub external_reference: Option<String>,
}
