//! Inspection status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an inspection.
///
/// Status advances SCHEDULED → IN_PROGRESS → COMPLETED, or moves to
/// CANCELLED at any point before COMPLETED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inspection_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectionStatus {
    /// Created and awaiting (or assigned to) an inspector.
    Scheduled,
    /// The inspector has started the visit.
    InProgress,
    /// The visit finished.
    Completed,
    /// Called off before completion.
    Cancelled,
}

impl InspectionStatus {
    /// Whether moving to `next` is a legal lifecycle step.
    pub fn can_transition_to(&self, next: InspectionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Scheduled, Self::InProgress)
                | (Self::InProgress, Self::Completed)
                | (Self::Scheduled, Self::Cancelled)
                | (Self::InProgress, Self::Cancelled)
        )
    }

    /// Whether the inspection is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        };
        write!(f, "{s}")
    }
}

impl FromStr for InspectionStatus {
    type Err = haven_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SCHEDULED" => Ok(Self::Scheduled),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(haven_core::AppError::validation(format!(
                "Invalid inspection status: '{s}'"
            ))),
        }
    }
}
