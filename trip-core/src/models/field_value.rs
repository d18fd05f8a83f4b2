use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The shape a form field is expected to hold, as declared by a step schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Amount,
    Count,
    Selections,
}

/// A single form field value.
///
/// The form store treats values as opaque: it merges and toggles them but
/// never validates them. Interpretation happens at quote time (numeric
/// coercion) and at submission time (required/numeric checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free text (dates, names, descriptions).
    Text(String),
    /// A monetary or fractional amount.
    Amount(Decimal),
    /// A whole-number quantity (nights, guests, days).
    Count(u32),
    /// An unordered set of selected options; never holds duplicates.
    Selections(BTreeSet<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn amount(value: Decimal) -> Self {
        FieldValue::Amount(value)
    }

    pub fn count(value: u32) -> Self {
        FieldValue::Count(value)
    }

    pub fn selections<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Selections(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Amount(_) => FieldKind::Amount,
            FieldValue::Count(_) => FieldKind::Count,
            FieldValue::Selections(_) => FieldKind::Selections,
        }
    }

    /// Whether the value counts as "not provided" for required-field checks.
    ///
    /// Numeric values are never empty; zero is a provided value.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Selections(items) => items.is_empty(),
            FieldValue::Amount(_) | FieldValue::Count(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            FieldValue::Amount(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<u32> {
        match self {
            FieldValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_selections(&self) -> Option<&BTreeSet<String>> {
        match self {
            FieldValue::Selections(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Amount(d) => write!(f, "{d}"),
            FieldValue::Count(n) => write!(f, "{n}"),
            FieldValue::Selections(items) => {
                let joined = items.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
                f.write_str(&joined)
            }
        }
    }
}
