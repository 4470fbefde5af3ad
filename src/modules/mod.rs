pub mod gateways;
pub mod health;
pub mod pages;
pub mod preferences;
pub mod webhooks;
