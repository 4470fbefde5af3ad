use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::gateway_trait::{PaymentDetails, PaymentGateway};
use crate::core::error::{AppError, Result};
use crate::modules::preferences::models::PreferencePayload;

const MP_API_BASE: &str = "https://api.mercadopago.com";

/// Mercado Pago gateway client
pub struct MercadoPagoGateway {
    client: Client,
    access_token: String,
    base_url: String,
}

impl MercadoPagoGateway {
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, MP_API_BASE.to_string())
    }

    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    async fn create_preference(
        &self,
        payload: &PreferencePayload,
    ) -> Result<serde_json::Value> {
        // Checkout Pro preference API:
        // https://www.mercadopago.com/developers/en/reference/preferences/_checkout_preferences/post
        let url = format!("{}/checkout/preferences", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Mercado Pago API error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!(
                "Mercado Pago API error {}: {}",
                status, error_body
            )));
        }

        // The caller returns this body verbatim, so keep it untyped.
        let preference: serde_json::Value = response.json().await.map_err(|e| {
            AppError::Gateway(format!("Failed to parse Mercado Pago response: {}", e))
        })?;

        Ok(preference)
    }

    async fn get_payment(&self, payment_id: &str) -> Result<PaymentDetails> {
        let url = format!("{}/v1/payments/{}", self.base_url, payment_id);

        #[derive(Deserialize)]
        struct MpPayment {
            id: i64,
            status: String,
            external_reference: Option<String>,
        }

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Mercado Pago API error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!(
                "Mercado Pago payment lookup error {}: {}",
                status, error_body
            )));
        }

        let payment: MpPayment = response.json().await.map_err(|e| {
            AppError::Gateway(format!("Failed to parse Mercado Pago payment: {}", e))
        })?;

        Ok(PaymentDetails {
            id: payment.id,
            status: payment.status,
            external_reference: payment.external_reference,
        })
    }

    fn name(&self) -> &str {
        "mercado_pago"
    }
}
