//! Inspection type and its fixed pricing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the inspection is conducted.
///
/// Fee and duration are fixed per type at creation time and never
/// recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inspection_type", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectionType {
    /// Remote walkthrough over video.
    Virtual,
    /// On-site visit.
    Physical,
}

impl InspectionType {
    /// Flat fee in integer currency units.
    pub fn fee(&self) -> i64 {
        match self {
            Self::Virtual => 15_000,
            Self::Physical => 30_000,
        }
    }

    /// Scheduled duration in minutes.
    pub fn duration_minutes(&self) -> i32 {
        match self {
            Self::Virtual => 30,
            Self::Physical => 60,
        }
    }

    /// Return the type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Virtual => "VIRTUAL",
            Self::Physical => "PHYSICAL",
        }
    }
}

impl fmt::Display for InspectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InspectionType {
    type Err = haven_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VIRTUAL" => Ok(Self::Virtual),
            "PHYSICAL" => Ok(Self::Physical),
            _ => Err(haven_core::AppError::validation(format!(
                "Invalid inspection type: '{s}'. Expected VIRTUAL or PHYSICAL"
            ))),
        }
    }
}
