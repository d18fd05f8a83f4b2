use async_trait::async_trait;
use thiserror::Error;

use crate::models::{BookingConfirmation, BookingRequest};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// The service understood the request and said no (no availability,
    /// incomplete details, payment declined).
    #[error("booking rejected: {0}")]
    Rejected(String),

    /// The service could not be reached or failed mid-call.
    #[error("booking service unavailable: {0}")]
    Unavailable(String),

    /// The gateway itself is misconfigured (unknown backend, bad endpoint).
    #[error("gateway configuration error: {0}")]
    Configuration(String),
}

/// The external booking boundary.
///
/// A wizard session makes exactly one `submit` call per submission attempt,
/// after validation has passed; implementations never see half-filled
/// requests. Backend crates implement this trait and expose a
/// [`GatewayFactory`](crate::gateway::GatewayFactory) so callers pick a
/// backend by name.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Place the booking (or publish the listing) described by `request`.
    ///
    /// On success the returned confirmation is final; the service has
    /// charged `total_paid` and the caller must not retry.
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError>;
}
