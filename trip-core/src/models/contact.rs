use serde::{Deserialize, Serialize};

/// Who the booking or listing is for, extracted from the form at submission.
///
/// Which form fields feed these values is declared per flow by its
/// `ContactRule`; guest flows use guest fields, host flows use host fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
}
