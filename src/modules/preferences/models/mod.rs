pub mod preference;

pub use preference::{BackUrls, CreatePreferenceRequest, PreferenceItem, PreferencePayload};
