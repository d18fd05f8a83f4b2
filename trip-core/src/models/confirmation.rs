use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contact::ContactDetails;

/// What the booking service returns on success.
///
/// Once a session holds one of these it is confirmed and immutable; the
/// confirmation is the record the display layer shows on the final screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Service-assigned reference, e.g. `BK-3F9A2C1D`.
    pub reference_code: String,
    /// Echo of the booked item's catalog reference, when there was one.
    pub item_reference: Option<String>,
    /// Echo of the submitted contact details.
    pub contact: ContactDetails,
    /// Amount actually charged, already rounded to 2 decimal places.
    pub total_paid: Decimal,
    /// Loyalty coins awarded, for flows with a loyalty rule.
    pub coins_earned: Option<u64>,
    pub confirmed_at: DateTime<Utc>,
}
