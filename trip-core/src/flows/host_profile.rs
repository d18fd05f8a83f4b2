//! Host profile creation: a local host publishes a connect-with-me profile.
//!
//! Unpriced; photos are attached on step 3 through the session's image
//! operations rather than a form field.

use crate::models::{FieldKind, FlowKind};

use super::{ContactRule, FieldSchema, FlowConfig, StepSchema};

pub fn config() -> FlowConfig {
    FlowConfig {
        kind: FlowKind::HostProfile,
        steps: vec![
            StepSchema::new(
                "Basics",
                vec![
                    FieldSchema::required("display_name", FieldKind::Text),
                    FieldSchema::required("city", FieldKind::Text),
                    FieldSchema::optional("bio", FieldKind::Text),
                ],
            ),
            StepSchema::new(
                "Languages & interests",
                vec![
                    FieldSchema::required("languages", FieldKind::Selections),
                    FieldSchema::optional("interests", FieldKind::Selections),
                ],
            ),
            StepSchema::new("Photos", vec![]),
            StepSchema::new(
                "Contact & publish",
                vec![FieldSchema::required("contact_email", FieldKind::Text)],
            ),
        ],
        pricing: None,
        loyalty: None,
        contact: ContactRule::new("display_name", "contact_email"),
    }
}
