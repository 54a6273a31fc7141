//! Listing status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a listing. Only ACTIVE listings accept inspection
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "listing_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    /// Published and open for inquiries and inspections.
    Active,
    /// Under offer.
    Pending,
    /// Transaction closed.
    Sold,
    /// Taken off the market by the agent.
    Withdrawn,
}

impl ListingStatus {
    /// Whether inspections may be requested against the listing.
    pub fn accepts_inspections(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Pending => "PENDING",
            Self::Sold => "SOLD",
            Self::Withdrawn => "WITHDRAWN",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ListingStatus {
    type Err = haven_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "PENDING" => Ok(Self::Pending),
            "SOLD" => Ok(Self::Sold),
            "WITHDRAWN" => Ok(Self::Withdrawn),
            _ => Err(haven_core::AppError::validation(format!(
                "Invalid listing status: '{s}'"
            ))),
        }
    }
}
