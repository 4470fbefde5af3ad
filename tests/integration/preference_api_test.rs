#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{test, web, App};
use rust_decimal_macros::dec;
use serde_json::json;

use helpers::MockGateway;
use mp_relay::modules::gateways::PaymentGateway;
use mp_relay::modules::preferences::{self, PreferenceService};

const BASE_URL: &str = "https://relay.example.com";

fn service_with(gateway: Arc<MockGateway>) -> Arc<PreferenceService> {
    let gateway: Arc<dyn PaymentGateway> = gateway;
    Arc::new(PreferenceService::new(gateway, BASE_URL.to_string()))
}

#[actix_web::test]
async fn test_create_preference_returns_provider_response_verbatim() {
    let gateway = MockGateway::recording();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service_with(Arc::clone(&gateway))))
            .configure(preferences::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/criar_preferencia")
        .set_json(json!({"pedido_id": 7, "unit_price": 19.9}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "pref-test-1");
    assert_eq!(body["external_reference"], "7");

    // The outbound payload carried the caller's price, defaults and currency
    let payloads = gateway.preference_payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].items[0].unit_price, dec!(19.9));
    assert_eq!(payloads[0].items[0].quantity, 1);
    assert_eq!(payloads[0].items[0].currency_id, "BRL");
    assert_eq!(payloads[0].external_reference, "7");
    assert_eq!(
        payloads[0].notification_url,
        "https://relay.example.com/webhook"
    );
}

#[actix_web::test]
async fn test_missing_pedido_id_is_400_with_no_provider_call() {
    let gateway = MockGateway::recording();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service_with(Arc::clone(&gateway))))
            .configure(preferences::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/criar_preferencia")
        .set_json(json!({"title": "Produto", "unit_price": 10.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(gateway.preference_call_count(), 0);
}

#[actix_web::test]
async fn test_missing_body_is_400() {
    let gateway = MockGateway::recording();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service_with(Arc::clone(&gateway))))
            .configure(preferences::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/criar_preferencia")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(gateway.preference_call_count(), 0);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("request body"));
}

#[actix_web::test]
async fn test_zero_quantity_is_400() {
    let gateway = MockGateway::recording();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service_with(Arc::clone(&gateway))))
            .configure(preferences::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/criar_preferencia")
        .set_json(json!({"pedido_id": 7, "quantity": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(gateway.preference_call_count(), 0);
}

#[actix_web::test]
async fn test_provider_failure_is_generic_500() {
    let gateway = MockGateway::with_preference_failure();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service_with(Arc::clone(&gateway))))
            .configure(preferences::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/criar_preferencia")
        .set_json(json!({"pedido_id": 7, "unit_price": 19.9}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);

    // The provider's error detail stays in the logs, not in the response
    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("payment provider request failed"));
    assert!(!message.contains("503"));
}
