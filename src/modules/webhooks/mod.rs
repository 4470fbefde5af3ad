pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{StatusUpdate, WebhookEnvelope, WebhookQuery};
pub use services::{HttpOrderBackend, OrderBackend, RelayOutcome, RelayService};
