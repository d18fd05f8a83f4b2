//! Service listing creation: a provider lists a per-kilometer service such
//! as an airport transfer.
//!
//! The pricing rule powers a live preview quote while the provider types a
//! rate: `sample_distance_km` is an optional what-if distance, so the quote
//! only appears once it is filled in. Listing previews carry no tax.

use rust_decimal::Decimal;

use crate::models::{FieldKind, FlowKind};

use super::{ContactRule, FieldSchema, FlowConfig, PricingRule, PricingUnit, StepSchema};

pub fn config() -> FlowConfig {
    FlowConfig {
        kind: FlowKind::ServiceListing,
        steps: vec![
            StepSchema::new(
                "Basics",
                vec![
                    FieldSchema::required("title", FieldKind::Text),
                    FieldSchema::required("city", FieldKind::Text),
                ],
            ),
            StepSchema::new(
                "Pricing",
                vec![
                    FieldSchema::required("rate_per_km", FieldKind::Amount),
                    FieldSchema::optional("sample_distance_km", FieldKind::Amount),
                    FieldSchema::optional("max_passengers", FieldKind::Count),
                ],
            ),
            StepSchema::new("Photos", vec![]),
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
            unit_price_field: "rate_per_km".to_string(),
            quantity_field: "sample_distance_km".to_string(),
            tax_rate: Decimal::ZERO,
            unit: PricingUnit::PerKilometer,
        }),
        loyalty: None,
        contact: ContactRule::new("host_name", "contact_email"),
    }
}
