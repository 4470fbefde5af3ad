pub mod backend_notifier;
pub mod relay_service;

pub use backend_notifier::{HttpOrderBackend, OrderBackend};
pub use relay_service::{RelayOutcome, RelayService};
