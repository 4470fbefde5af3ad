use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::preferences::models::CreatePreferenceRequest;
use crate::modules::preferences::services::PreferenceService;

/// Create a checkout preference
/// POST /criar_preferencia
///
/// Returns the provider's preference object verbatim on success.
pub async fn create_preference(
    service: web::Data<Arc<PreferenceService>>,
    body: Option<web::Json<CreatePreferenceRequest>>,
) -> Result<HttpResponse, AppError> {
    // A missing or malformed body is a client error, not a deserializer 500.
    let request = body
        .ok_or_else(|| AppError::validation("a valid JSON request body is required"))?
        .into_inner();

    let preference = service.create_preference(request).await?;

    Ok(HttpResponse::Ok().json(preference))
}

/// Configure preference routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/criar_preferencia", web::post().to(create_preference));
}
