use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Status response for the index route
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// GET / - Service status
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        status: "online".to_string(),
        message: "API de Pagamentos está operacional.".to_string(),
    })
}

/// GET /health - Liveness probe
///
/// Returns 200 if the application is alive; does not check dependencies.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "mp-relay"
    }))
}

/// Configure status routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check));
}
