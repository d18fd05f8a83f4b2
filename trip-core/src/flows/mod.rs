//! Flow definitions for the five shipped wizards.
//!
//! Every wizard runs on the same engine; what differs per flow is declared
//! data: the step schemas, the pricing rule, the loyalty rule, and which
//! fields carry the contact details. One module per flow builds its
//! [`FlowConfig`]; [`config`] dispatches on [`FlowKind`].
//!
//! | flow                 | steps | pricing                         | tax  | loyalty |
//! |----------------------|-------|---------------------------------|------|---------|
//! | `stay`               | 4     | `nightly_rate` × `nights`       | 0.15 | no      |
//! | `coworking`          | 4     | `day_rate` × `duration_days`    | 0.10 | coins   |
//! | `host_profile`       | 4     | none                            |      | no      |
//! | `service_listing`    | 4     | `rate_per_km` × `sample_distance_km` | 0.00 | no |
//! | `experience_listing` | 4     | `day_rate` × `duration_days`    | 0.00 | no      |

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FieldKind, FlowKind};

pub mod coworking;
pub mod experience;
pub mod host_profile;
pub mod service_listing;
pub mod stay;

/// Errors raised when a flow definition is internally inconsistent.
///
/// The shipped definitions are covered by tests; these mostly guard
/// hand-built configs in integration code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowConfigError {
    #[error("flow '{}' defines no steps", .0.as_str())]
    NoSteps(FlowKind),

    #[error("field '{0}' appears in more than one step")]
    DuplicateField(String),

    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),

    #[error("pricing field '{0}' is not declared in any step")]
    UnknownPricingField(String),

    #[error("contact field '{0}' is not declared in any step")]
    UnknownContactField(String),
}

/// What a unit price is charged per. The code strings (`night`, `day`,
/// `month`, `km`) are the stable form used in catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingUnit {
    PerNight,
    PerDay,
    PerMonth,
    PerKilometer,
}

impl PricingUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerNight => "night",
            Self::PerDay => "day",
            Self::PerMonth => "month",
            Self::PerKilometer => "km",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "night" => Some(Self::PerNight),
            "day" => Some(Self::PerDay),
            "month" => Some(Self::PerMonth),
            "km" => Some(Self::PerKilometer),
            _ => None,
        }
    }
}

/// One form field as a step declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSchema {
    pub fn required(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: true,
        }
    }

    pub fn optional(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: false,
        }
    }
}

/// One wizard step: a title for the header and the fields it renders.
/// Review and photo steps legitimately declare no fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSchema {
    pub title: String,
    pub fields: Vec<FieldSchema>,
}

impl StepSchema {
    pub fn new(title: &str, fields: Vec<FieldSchema>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }
}

/// How a flow derives its quote: which fields feed the unit price and
/// quantity, and the tax rate applied on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    pub unit_price_field: String,
    pub quantity_field: String,
    /// Fraction in [0, 1]; listing previews use 0.
    pub tax_rate: Decimal,
    pub unit: PricingUnit,
}

/// How loyalty coins are awarded for a confirmed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoyaltyRule {
    /// One coin per whole currency unit of the charged total.
    CoinsPerUnitPaid,
}

/// Which form fields carry the contact name and email for the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRule {
    pub name_field: String,
    pub email_field: String,
}

impl ContactRule {
    pub fn new(name_field: &str, email_field: &str) -> Self {
        Self {
            name_field: name_field.to_string(),
            email_field: email_field.to_string(),
        }
    }
}

/// Complete definition of one wizard flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub kind: FlowKind,
    pub steps: Vec<StepSchema>,
    pub pricing: Option<PricingRule>,
    pub loyalty: Option<LoyaltyRule>,
    pub contact: ContactRule,
}

impl FlowConfig {
    pub fn total_steps(&self) -> u32 {
        self.steps.len() as u32
    }

    /// Schema of the 1-based step `number`, if it exists.
    pub fn step(&self, number: u32) -> Option<&StepSchema> {
        self.steps.get(number.checked_sub(1)? as usize)
    }

    /// Schema of `name`, searching every step.
    pub fn field_schema(&self, name: &str) -> Option<&FieldSchema> {
        self.steps
            .iter()
            .flat_map(|step| &step.fields)
            .find(|field| field.name == name)
    }

    /// Checks the definition for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`FlowConfigError`] if:
    /// - there are no steps
    /// - a field name appears in more than one step
    /// - the tax rate is outside [0, 1]
    /// - a pricing or contact rule names an undeclared field
    pub fn validate(&self) -> Result<(), FlowConfigError> {
        if self.steps.is_empty() {
            return Err(FlowConfigError::NoSteps(self.kind));
        }

        let mut declared: BTreeSet<&str> = BTreeSet::new();
        for step in &self.steps {
            for field in &step.fields {
                if !declared.insert(field.name.as_str()) {
                    return Err(FlowConfigError::DuplicateField(field.name.clone()));
                }
            }
        }

        if let Some(rule) = &self.pricing {
            if rule.tax_rate < Decimal::ZERO || rule.tax_rate > Decimal::ONE {
                return Err(FlowConfigError::InvalidTaxRate(rule.tax_rate));
            }
            for name in [&rule.unit_price_field, &rule.quantity_field] {
                if !declared.contains(name.as_str()) {
                    return Err(FlowConfigError::UnknownPricingField(name.clone()));
                }
            }
        }

        for name in [&self.contact.name_field, &self.contact.email_field] {
            if !declared.contains(name.as_str()) {
                return Err(FlowConfigError::UnknownContactField(name.clone()));
            }
        }

        Ok(())
    }
}

/// The shipped definition for `kind`.
pub fn config(kind: FlowKind) -> FlowConfig {
    match kind {
        FlowKind::StayBooking => stay::config(),
        FlowKind::CoworkingBooking => coworking::config(),
        FlowKind::HostProfile => host_profile::config(),
        FlowKind::ServiceListing => service_listing::config(),
        FlowKind::ExperienceListing => experience::config(),
    }
}
