use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::{info, warn};

use crate::modules::webhooks::models::{extract_payment_id, WebhookEnvelope, WebhookQuery};
use crate::modules::webhooks::services::RelayService;

/// Receive a provider payment notification
/// POST /webhook
///
/// Answers 200 unconditionally: a non-success status would make the provider
/// redeliver, and this relay trades silent drops for redelivery storms.
/// Processing happens on a detached task after the response is sent.
pub async fn receive_webhook(
    relay: web::Data<Arc<RelayService>>,
    query: Option<web::Query<WebhookQuery>>,
    body: web::Bytes,
) -> HttpResponse {
    // Both carriers are parsed leniently: the body may be empty or non-JSON
    // depending on the notification version, and a malformed query string
    // must not turn into a non-200 the provider would redeliver on.
    let envelope: Option<WebhookEnvelope> = serde_json::from_slice(&body).ok();
    let query = query
        .map(web::Query::into_inner)
        .unwrap_or(WebhookQuery { data_id: None });

    match extract_payment_id(envelope.as_ref(), &query) {
        Some(payment_id) => {
            info!(payment_id = %payment_id, "Webhook received, dispatching background relay");
            relay.dispatch(payment_id);
        }
        None => {
            warn!("Webhook received without a payment id; skipping");
        }
    }

    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

/// Configure webhook routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhook", web::post().to(receive_webhook));
}
