//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// A client booked an inspection.
    InspectionScheduled,
    /// An inspector accepted the job.
    InspectionAccepted,
    /// The inspection finished.
    InspectionCompleted,
    /// A client sent an inquiry on a listing.
    InquiryReceived,
    /// A payment settled.
    PaymentReceived,
    /// A client saved a listing.
    ListingSaved,
    /// Verification wizard approved.
    VerificationApproved,
    /// Verification wizard rejected.
    VerificationRejected,
    /// An unassigned inspection is open for inspectors.
    NewJobAvailable,
}

impl NotificationKind {
    /// Return the kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InspectionScheduled => "INSPECTION_SCHEDULED",
            Self::InspectionAccepted => "INSPECTION_ACCEPTED",
            Self::InspectionCompleted => "INSPECTION_COMPLETED",
            Self::InquiryReceived => "INQUIRY_RECEIVED",
            Self::PaymentReceived => "PAYMENT_RECEIVED",
            Self::ListingSaved => "LISTING_SAVED",
            Self::VerificationApproved => "VERIFICATION_APPROVED",
            Self::VerificationRejected => "VERIFICATION_REJECTED",
            Self::NewJobAvailable => "NEW_JOB_AVAILABLE",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&NotificationKind::NewJobAvailable).unwrap();
        assert_eq!(json, "\"NEW_JOB_AVAILABLE\"");
        let back: NotificationKind = serde_json::from_str("\"INSPECTION_SCHEDULED\"").unwrap();
        assert_eq!(back, NotificationKind::InspectionScheduled);
    }
}
