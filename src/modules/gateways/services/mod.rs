pub mod gateway_trait;
pub mod mercado_pago;

pub use gateway_trait::{PaymentDetails, PaymentGateway};
pub use mercado_pago::MercadoPagoGateway;
