pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{BackUrls, CreatePreferenceRequest, PreferenceItem, PreferencePayload};
pub use services::PreferenceService;
