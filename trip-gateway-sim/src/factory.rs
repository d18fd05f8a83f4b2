use async_trait::async_trait;
use tracing::info;

use trip_core::{BookingError, BookingService, GatewayConfig, GatewayFactory};

use crate::SimulatedBookingService;

/// [`GatewayFactory`] for the in-process backend.
///
/// Register this with a [`trip_core::GatewayRegistry`] to make the
/// `"simulated"` backend available:
///
/// ```rust
/// use trip_core::GatewayRegistry;
/// use trip_gateway_sim::SimulatedGatewayFactory;
///
/// let mut registry = GatewayRegistry::new();
/// registry.register(Box::new(SimulatedGatewayFactory));
/// ```
pub struct SimulatedGatewayFactory;

#[async_trait]
impl GatewayFactory for SimulatedGatewayFactory {
    fn backend_name(&self) -> &'static str {
        "simulated"
    }

    /// Builds an accepting backend. The endpoint is recorded but otherwise
    /// ignored; the simulated gateway holds no connection.
    async fn create(
        &self,
        config: &GatewayConfig,
    ) -> Result<Box<dyn BookingService>, BookingError> {
        info!(endpoint = %config.endpoint, "simulated booking gateway ready");
        Ok(Box::new(SimulatedBookingService::new()))
    }
}
