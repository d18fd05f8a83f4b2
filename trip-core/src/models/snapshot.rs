use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field_value::FieldValue;
use super::quote::PricingQuote;
use super::status::SessionStatus;

/// Point-in-time view of a session for the display layer.
///
/// Everything a step screen renders comes from here: the progress header,
/// the current field values, the live quote, and the status deciding which
/// controls are enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// 1-based step cursor.
    pub current_step: u32,
    pub total_steps: u32,
    /// Title of the step the cursor is on.
    pub step_title: String,
    pub fields: BTreeMap<String, FieldValue>,
    pub quote: Option<PricingQuote>,
    pub status: SessionStatus,
}

impl SessionSnapshot {
    /// Progress through the wizard in (0, 1], for the progress bar.
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.total_steps)
    }
}
