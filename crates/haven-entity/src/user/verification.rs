//! Inspector/agent verification status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the multi-step verification wizard.
///
/// Only VERIFIED inspectors are eligible for new-job notifications and
/// job acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "verification_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Approved by a platform admin.
    Verified,
    /// Rejected by a platform admin.
    Rejected,
}

impl VerificationStatus {
    /// Whether the user passed verification.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
        };
        write!(f, "{s}")
    }
}
