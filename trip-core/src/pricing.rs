//! Derived pricing for booking and listing flows.
//!
//! Every priced flow reduces to the same arithmetic: a unit price (per
//! night, day, month, or kilometer) times a quantity, plus a flow-specific
//! tax. [`compute_quote`] is the single pure entry point; sessions call it
//! on demand so the quote always reflects current form values.
//!
//! Amounts stay exact through the computation. Rounding to 2 decimal places
//! happens only at the display/charge boundary, via [`round_display`] or the
//! `display_*` accessors on [`PricingQuote`].

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::PricingQuote;

/// Errors for quote computation, each carrying the offending value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("unit price must be non-negative, got {0}")]
    NegativeUnitPrice(Decimal),

    #[error("quantity must be non-negative, got {0}")]
    NegativeQuantity(Decimal),

    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),
}

/// Rounds a value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, matching how the charged
/// totals are presented on receipts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use trip_core::pricing::round_display;
///
/// assert_eq!(round_display(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_display(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_display(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Computes a price breakdown from a unit price, a quantity, and a tax rate.
///
/// The result is exact:
///
/// * `base_amount = unit_price * quantity`
/// * `tax_amount  = base_amount * tax_rate`
/// * `total_amount = base_amount + tax_amount`
///
/// For all accepted inputs, `total_amount >= base_amount >= 0`.
///
/// # Errors
///
/// Returns [`PricingError`] if `unit_price` or `quantity` is negative, or
/// `tax_rate` falls outside [0, 1].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use trip_core::pricing::compute_quote;
///
/// // Three nights at 100.00 with 15% tax.
/// let quote = compute_quote(dec!(100.00), dec!(3), dec!(0.15)).unwrap();
///
/// assert_eq!(quote.base_amount, dec!(300.00));
/// assert_eq!(quote.display_total(), dec!(345.00));
/// ```
pub fn compute_quote(
    unit_price: Decimal,
    quantity: Decimal,
    tax_rate: Decimal,
) -> Result<PricingQuote, PricingError> {
    if unit_price < Decimal::ZERO {
        return Err(PricingError::NegativeUnitPrice(unit_price));
    }
    if quantity < Decimal::ZERO {
        return Err(PricingError::NegativeQuantity(quantity));
    }
    if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
        return Err(PricingError::InvalidTaxRate(tax_rate));
    }

    let base_amount = unit_price * quantity;
    let tax_amount = base_amount * tax_rate;

    Ok(PricingQuote {
        base_amount,
        tax_rate,
        tax_amount,
        total_amount: base_amount + tax_amount,
    })
}
