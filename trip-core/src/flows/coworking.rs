//! Coworking booking: a member books day passes at a listed space.
//!
//! The only flow with a loyalty rule: a confirmed booking earns one coin
//! per whole currency unit actually charged. `day_rate` is seeded from the
//! catalog listing when the wizard opens.

use rust_decimal::Decimal;

use crate::models::{FieldKind, FlowKind};

use super::{
    ContactRule, FieldSchema, FlowConfig, LoyaltyRule, PricingRule, PricingUnit, StepSchema,
};

pub fn config() -> FlowConfig {
    FlowConfig {
        kind: FlowKind::CoworkingBooking,
        steps: vec![
            StepSchema::new(
                "Plan",
                vec![
                    FieldSchema::required("start_date", FieldKind::Text),
                    FieldSchema::required("duration_days", FieldKind::Count),
                    FieldSchema::required("day_rate", FieldKind::Amount),
                ],
            ),
            StepSchema::new(
                "Member details",
                vec![
                    FieldSchema::required("member_name", FieldKind::Text),
                    FieldSchema::required("member_email", FieldKind::Text),
                    FieldSchema::optional("company", FieldKind::Text),
                ],
            ),
            StepSchema::new("Review", vec![]),
            StepSchema::new(
                "Payment",
                vec![FieldSchema::required("payment_method", FieldKind::Text)],
            ),
        ],
        pricing: Some(PricingRule {
            unit_price_field: "day_rate".to_string(),
            quantity_field: "duration_days".to_string(),
            tax_rate: Decimal::new(10, 2),
            unit: PricingUnit::PerDay,
        }),
        loyalty: Some(LoyaltyRule::CoinsPerUnitPaid),
        contact: ContactRule::new("member_name", "member_email"),
    }
}
