//! Experience listing creation: a host lists a guided experience priced
//! per day.
//!
//! Like the service listing, the pricing rule only drives a preview quote;
//! `duration_days` is optional until the host wants to see one.

use rust_decimal::Decimal;

use crate::models::{FieldKind, FlowKind};

use super::{ContactRule, FieldSchema, FlowConfig, PricingRule, PricingUnit, StepSchema};

pub fn config() -> FlowConfig {
    FlowConfig {
        kind: FlowKind::ExperienceListing,
        steps: vec![
            StepSchema::new(
                "Basics",
                vec![
                    FieldSchema::required("title", FieldKind::Text),
                    FieldSchema::required("city", FieldKind::Text),
                    FieldSchema::required("categories", FieldKind::Selections),
                ],
            ),
            StepSchema::new(
                "Pricing",
                vec![
                    FieldSchema::required("day_rate", FieldKind::Amount),
                    FieldSchema::optional("duration_days", FieldKind::Count),
                    FieldSchema::optional("group_size", FieldKind::Count),
                ],
            ),
            StepSchema::new(
                "Photos & highlights",
                vec![FieldSchema::optional("highlights", FieldKind::Selections)],
            ),
            StepSchema::new(
                "Contact & publish",
                vec![
                    FieldSchema::required("host_name", FieldKind::Text),
                    FieldSchema::required("contact_email", FieldKind::Text),
                    FieldSchema::optional("description", FieldKind::Text),
                ],
            ),
        ],
        pricing: Some(PricingRule {
            unit_price_field: "day_rate".to_string(),
            quantity_field: "duration_days".to_string(),
            tax_rate: Decimal::ZERO,
            unit: PricingUnit::PerDay,
        }),
        loyalty: None,
        contact: ContactRule::new("host_name", "contact_email"),
    }
}
