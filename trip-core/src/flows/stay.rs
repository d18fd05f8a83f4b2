//! Stay booking: a guest books nights at a listed stay.
//!
//! The display layer seeds `nightly_rate` from the catalog listing when the
//! wizard opens; the guest never types it.

use rust_decimal::Decimal;

use crate::models::{FieldKind, FlowKind};

use super::{ContactRule, FieldSchema, FlowConfig, PricingRule, PricingUnit, StepSchema};

pub fn config() -> FlowConfig {
    FlowConfig {
        kind: FlowKind::StayBooking,
        steps: vec![
            StepSchema::new(
                "Dates & guests",
                vec![
                    FieldSchema::required("check_in", FieldKind::Text),
                    FieldSchema::required("nights", FieldKind::Count),
                    FieldSchema::required("guests", FieldKind::Count),
                    FieldSchema::required("nightly_rate", FieldKind::Amount),
                ],
            ),
            StepSchema::new(
                "Guest details",
                vec![
                    FieldSchema::required("guest_name", FieldKind::Text),
                    FieldSchema::required("guest_email", FieldKind::Text),
                    FieldSchema::optional("special_requests", FieldKind::Text),
                ],
            ),
            StepSchema::new("Review", vec![]),
            StepSchema::new(
                "Payment",
                vec![FieldSchema::required("payment_method", FieldKind::Text)],
            ),
        ],
        pricing: Some(PricingRule {
            unit_price_field: "nightly_rate".to_string(),
            quantity_field: "nights".to_string(),
            tax_rate: Decimal::new(15, 2),
            unit: PricingUnit::PerNight,
        }),
        loyalty: None,
        contact: ContactRule::new("guest_name", "guest_email"),
    }
}
