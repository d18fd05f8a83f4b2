pub mod factory;
pub mod service;

pub use factory::{GatewayConfig, GatewayFactory, GatewayRegistry};
pub use service::{BookingError, BookingService};
