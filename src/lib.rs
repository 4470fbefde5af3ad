//! Mercado Pago checkout & webhook relay library
//!
//! This library provides the core functionality for the mp-relay service:
//! checkout-preference creation and payment-status webhook relaying.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::preferences;
pub use modules::webhooks;
