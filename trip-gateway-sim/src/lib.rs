//! In-process booking backend used by demos and tests. It behaves like the
//! real gateway at the trait boundary: it validates the contact, charges the
//! rounded quote total, and issues a confirmation with a reference code.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use trip_core::flows::{self, LoyaltyRule};
use trip_core::models::{BookingConfirmation, BookingRequest, FlowKind};
use trip_core::{BookingError, BookingService};

pub mod factory;

pub use factory::SimulatedGatewayFactory;

/// Booking service that confirms everything it is given, unless configured
/// to decline.
pub struct SimulatedBookingService {
    decline_reason: Option<String>,
}

impl SimulatedBookingService {
    /// A backend that accepts every well-formed request.
    pub fn new() -> Self {
        Self {
            decline_reason: None,
        }
    }

    /// A backend that rejects every request with `reason`, for exercising
    /// failure and retry paths.
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            decline_reason: Some(reason.into()),
        }
    }
}

impl Default for SimulatedBookingService {
    fn default() -> Self {
        Self::new()
    }
}

/// "BK-" plus the first eight hex digits of a fresh v4 UUID.
fn reference_code() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("BK-{}", id[..8].to_uppercase())
}

/// Loyalty coins for a paid booking: flows with a coin rule earn one coin
/// per whole currency unit paid, everything else earns nothing.
fn coins_for(flow: FlowKind, total_paid: Decimal) -> Option<u64> {
    match flows::config(flow).loyalty {
        Some(LoyaltyRule::CoinsPerUnitPaid) => total_paid.floor().to_u64(),
        None => None,
    }
}

#[async_trait]
impl BookingService for SimulatedBookingService {
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        if let Some(reason) = &self.decline_reason {
            warn!(flow = request.flow.as_str(), reason = %reason, "declining booking");
            return Err(BookingError::Rejected(reason.clone()));
        }
        if request.contact.name.trim().is_empty() || request.contact.email.trim().is_empty() {
            warn!(flow = request.flow.as_str(), "rejecting booking with blank contact");
            return Err(BookingError::Rejected(
                "contact details are incomplete".to_string(),
            ));
        }

        // Unpriced flows publish rather than charge, so they pay zero.
        let total_paid = request
            .quote
            .as_ref()
            .map(|q| q.display_total())
            .unwrap_or(Decimal::ZERO);
        let confirmation = BookingConfirmation {
            reference_code: reference_code(),
            item_reference: request.item_reference.clone(),
            contact: request.contact.clone(),
            total_paid,
            coins_earned: coins_for(request.flow, total_paid),
            confirmed_at: Utc::now(),
        };
        info!(
            flow = request.flow.as_str(),
            reference = %confirmation.reference_code,
            total = %confirmation.total_paid,
            "booking confirmed"
        );
        Ok(confirmation)
    }
}
