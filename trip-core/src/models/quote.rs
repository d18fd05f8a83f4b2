use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::round_display;

/// A derived price breakdown.
///
/// All amounts are exact; nothing is rounded until one of the `display_*`
/// accessors is called. A quote is always recomputed from current form
/// values, never stored and patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingQuote {
    /// Unit price times quantity, before tax.
    pub base_amount: Decimal,
    /// Tax rate applied, as a fraction in [0, 1].
    pub tax_rate: Decimal,
    /// `base_amount * tax_rate`.
    pub tax_amount: Decimal,
    /// `base_amount + tax_amount`.
    pub total_amount: Decimal,
}

impl PricingQuote {
    /// Base amount rounded half-up to 2 decimal places.
    pub fn display_base(&self) -> Decimal {
        round_display(self.base_amount)
    }

    /// Tax amount rounded half-up to 2 decimal places.
    pub fn display_tax(&self) -> Decimal {
        round_display(self.tax_amount)
    }

    /// Total rounded half-up to 2 decimal places. This is the amount the
    /// booking service charges.
    pub fn display_total(&self) -> Decimal {
        round_display(self.total_amount)
    }
}
