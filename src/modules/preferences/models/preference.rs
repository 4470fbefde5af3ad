use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Only currency the checkout supports
pub const CURRENCY_ID: &str = "BRL";

/// Inbound request for creating a checkout preference
///
/// `pedido_id` is the internal order id and is required; everything else
/// falls back to a default.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePreferenceRequest {
    pub pedido_id: Option<i64>,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub unit_price: Decimal,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_title() -> String {
    "Produto".to_string()
}

fn default_quantity() -> u32 {
    1
}

/// Single line item inside a preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceItem {
    pub title: String,
    pub quantity: u32,
    pub currency_id: String,
    pub unit_price: Decimal,
}

/// Browser return URLs for the provider's hosted checkout page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackUrls {
    pub success: String,
    pub failure: String,
    pub pending: String,
}

/// Provider-shaped checkout preference payload
///
/// `external_reference` carries the internal order id so the provider echoes
/// it back in payment records and webhooks. `notification_url` points the
/// provider at this service's own webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencePayload {
    pub items: Vec<PreferenceItem>,
    pub external_reference: String,
    pub notification_url: String,
    pub back_urls: BackUrls,
    pub auto_return: String,
}

impl PreferencePayload {
    /// Build the provider payload from a validated request
    ///
    /// `base_url` is this service's externally reachable base URL, without a
    /// trailing slash.
    pub fn build(request: &CreatePreferenceRequest, order_id: i64, base_url: &str) -> Self {
        Self {
            items: vec![PreferenceItem {
                title: request.title.clone(),
                quantity: request.quantity,
                currency_id: CURRENCY_ID.to_string(),
                unit_price: request.unit_price,
            }],
            external_reference: order_id.to_string(),
            notification_url: format!("{}/webhook", base_url),
            back_urls: BackUrls {
                success: format!("{}/pagamento_sucesso?pedido_id={}", base_url, order_id),
                failure: format!("{}/pagamento_falha", base_url),
                pending: format!("{}/pagamento_pendente", base_url),
            },
            auto_return: "approved".to_string(),
        }
    }
}
