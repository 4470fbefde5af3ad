use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{web, App, HttpResponse};

use mp_relay::modules::webhooks::models::StatusUpdate;
use mp_relay::modules::webhooks::{HttpOrderBackend, OrderBackend};

type Received = Arc<Mutex<Vec<StatusUpdate>>>;

/// Spawn a stand-in order backend that records every status push
fn spawn_downstream(received: Received) -> actix_test::TestServer {
    actix_test::start(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&received)))
            .route(
                "/api/pedidos/notificar",
                web::post().to(
                    |received: web::Data<Received>, body: web::Json<StatusUpdate>| async move {
                        received.lock().unwrap().push(body.into_inner());
                        HttpResponse::Ok().body("recebido")
                    },
                ),
            )
    })
}

fn spawn_rejecting_downstream() -> actix_test::TestServer {
    actix_test::start(|| {
        App::new().route(
            "/api/pedidos/notificar",
            web::post().to(|| async { HttpResponse::BadGateway().body("indisponível") }),
        )
    })
}

#[actix_web::test]
async fn test_push_status_posts_contract_payload() {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let srv = spawn_downstream(Arc::clone(&received));

    let backend = HttpOrderBackend::new(
        srv.url("/api/pedidos/notificar"),
        Duration::from_secs(10),
    )
    .unwrap();

    let update = StatusUpdate {
        pedido_id: 42,
        status: "approved".to_string(),
        payment_id: 123,
    };

    backend.push_status(&update).await.unwrap();

    let pushes = received.lock().unwrap();
    assert_eq!(pushes.len(), 1);
    assert_eq!(pushes[0], update);
}

#[actix_web::test]
async fn test_non_success_response_is_an_error() {
    let srv = spawn_rejecting_downstream();

    let backend = HttpOrderBackend::new(
        srv.url("/api/pedidos/notificar"),
        Duration::from_secs(10),
    )
    .unwrap();

    let update = StatusUpdate {
        pedido_id: 42,
        status: "rejected".to_string(),
        payment_id: 123,
    };

    let result = backend.push_status(&update).await;
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("502"));
}

#[actix_web::test]
async fn test_unreachable_backend_is_an_error() {
    // Nothing listens on this port
    let backend = HttpOrderBackend::new(
        "http://127.0.0.1:1/api/pedidos/notificar".to_string(),
        Duration::from_secs(1),
    )
    .unwrap();

    let update = StatusUpdate {
        pedido_id: 1,
        status: "pending".to_string(),
        payment_id: 2,
    };

    assert!(backend.push_status(&update).await.is_err());
}
