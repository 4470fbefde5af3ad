pub mod services;

pub use services::{MercadoPagoGateway, PaymentDetails, PaymentGateway};
