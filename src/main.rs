use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mp_relay::config::Config;
use mp_relay::modules::gateways::{MercadoPagoGateway, PaymentGateway};
use mp_relay::modules::pages::PageSettings;
use mp_relay::modules::preferences::PreferenceService;
use mp_relay::modules::webhooks::{HttpOrderBackend, OrderBackend, RelayService};
use mp_relay::modules::{health, pages, preferences, webhooks};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mp_relay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Mercado Pago relay service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Explicitly constructed, injected clients instead of global SDK state
    let gateway: Arc<dyn PaymentGateway> = Arc::new(MercadoPagoGateway::with_base_url(
        config.mercado_pago.access_token.clone(),
        config.mercado_pago.base_url.clone(),
    ));

    let backend: Arc<dyn OrderBackend> = Arc::new(
        HttpOrderBackend::new(
            config.backend.notify_url.clone(),
            Duration::from_secs(config.backend.timeout_secs),
        )
        .context("Failed to build order backend client")?,
    );

    let preference_service = Arc::new(PreferenceService::new(
        Arc::clone(&gateway),
        config.relay.public_base_url.clone(),
    ));
    let relay_service = Arc::new(RelayService::new(gateway, backend));
    let page_settings = PageSettings {
        return_url: config.relay.return_url.clone(),
    };

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(Arc::clone(&preference_service)))
            .app_data(web::Data::new(Arc::clone(&relay_service)))
            .app_data(web::Data::new(page_settings.clone()))
            .configure(health::configure)
            .configure(preferences::configure)
            .configure(webhooks::configure)
            .configure(pages::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server error")
}
