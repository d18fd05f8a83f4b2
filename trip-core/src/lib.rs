pub mod flows;
pub mod gateway;
pub mod media;
pub mod models;
pub mod pricing;
pub mod session;

pub use gateway::{BookingError, BookingService, GatewayConfig, GatewayFactory, GatewayRegistry};
pub use models::*;
pub use session::{SessionError, SubmitError, ValidationError, WizardSession};
