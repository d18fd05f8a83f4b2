use std::fmt;

use serde::{Deserialize, Serialize};

/// Submission status of a wizard session.
///
/// `Editing` and `Failed` accept edits, navigation, and submission.
/// `Submitting` blocks everything until the in-flight call resolves.
/// `Confirmed` is terminal; no operation moves a session out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Editing,
    Submitting,
    Confirmed,
    /// The booking service rejected or failed the last attempt; the message
    /// is kept for display and the session is editable again.
    Failed(String),
}

impl SessionStatus {
    pub fn is_editable(&self) -> bool {
        matches!(self, SessionStatus::Editing | SessionStatus::Failed(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Confirmed => "confirmed",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
