use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
///
/// Loaded once at startup from environment variables and never mutated
/// afterwards. Missing required values abort startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub mercado_pago: MercadoPagoConfig,
    pub backend: BackendConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Mercado Pago API credentials and endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MercadoPagoConfig {
    pub access_token: String,
    pub base_url: String,
}

/// Downstream order-management backend
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub notify_url: String,
    pub timeout_secs: u64,
}

/// Relay-specific settings: the URL the provider can reach us at, and
/// where the success landing page sends the payer afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    pub public_base_url: String,
    pub return_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            mercado_pago: MercadoPagoConfig {
                access_token: env::var("MERCADO_PAGO_TOKEN").map_err(|_| {
                    AppError::Configuration("MERCADO_PAGO_TOKEN not set".to_string())
                })?,
                base_url: env::var("MERCADO_PAGO_BASE_URL")
                    .unwrap_or_else(|_| "https://api.mercadopago.com".to_string()),
            },
            backend: BackendConfig {
                notify_url: env::var("BACKEND_NOTIFY_URL").map_err(|_| {
                    AppError::Configuration("BACKEND_NOTIFY_URL not set".to_string())
                })?,
                timeout_secs: env::var("BACKEND_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid BACKEND_TIMEOUT_SECS".to_string())
                    })?,
            },
            relay: RelayConfig {
                public_base_url: env::var("PUBLIC_BASE_URL")
                    .map_err(|_| AppError::Configuration("PUBLIC_BASE_URL not set".to_string()))?
                    .trim_end_matches('/')
                    .to_string(),
                return_url: env::var("CHECKOUT_RETURN_URL").unwrap_or_else(|_| "/".to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.backend.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Backend timeout must be greater than 0".to_string(),
            ));
        }

        if !self.relay.public_base_url.starts_with("http://")
            && !self.relay.public_base_url.starts_with("https://")
        {
            return Err(AppError::Configuration(
                "PUBLIC_BASE_URL must be an http(s) URL".to_string(),
            ));
        }

        Ok(())
    }
}
