use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed envelope Mercado Pago posts as the webhook body
///
/// ```json
/// {"type": "payment", "data": {"id": "123"}}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEnvelope {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub data: Option<WebhookData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookData {
    pub id: Option<Value>,
}

impl WebhookEnvelope {
    /// Extract the payment id from a payment-typed envelope
    ///
    /// Returns `None` for non-payment notification types (e.g.
    /// `merchant_order`) and for envelopes without `data.id`. The id arrives
    /// as a string in some notification versions and a number in others.
    pub fn payment_id(&self) -> Option<String> {
        if self.kind.as_deref() != Some("payment") {
            return None;
        }

        match self.data.as_ref()?.id.as_ref()? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Query parameters accompanying a webhook delivery
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookQuery {
    #[serde(rename = "data.id")]
    pub data_id: Option<String>,
}

/// Status push sent to the downstream order backend
///
/// Field names and types are fixed by the downstream collaborator's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub pedido_id: i64,
    pub status: String,
    pub payment_id: i64,
}

/// Resolve the payment id for a delivery: typed body envelope first, then
/// the `data.id` query parameter.
pub fn extract_payment_id(body: Option<&WebhookEnvelope>, query: &WebhookQuery) -> Option<String> {
    body.and_then(WebhookEnvelope::payment_id)
        .or_else(|| query.data_id.clone())
}
