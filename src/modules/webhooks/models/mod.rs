pub mod notification;

pub use notification::{extract_payment_id, StatusUpdate, WebhookData, WebhookEnvelope, WebhookQuery};
