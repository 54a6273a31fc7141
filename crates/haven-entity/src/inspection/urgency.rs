//! Derived urgency classification for unassigned jobs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How soon an inspection is due.
///
/// Urgency is a pure function of the lead time (scheduled_at − now),
/// recomputed at query time and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    /// Due within 24 hours.
    High,
    /// Due within 72 hours.
    Medium,
    /// Due later than 72 hours out.
    Low,
}

impl Urgency {
    /// Classify a job by its lead time at `now`.
    pub fn from_lead_time(now: DateTime<Utc>, scheduled_at: DateTime<Utc>) -> Self {
        let lead = scheduled_at - now;
        if lead <= Duration::hours(24) {
            Self::High
        } else if lead <= Duration::hours(72) {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Return the urgency as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = haven_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(haven_core::AppError::validation(format!(
                "Invalid urgency: '{s}'. Expected HIGH, MEDIUM, or LOW"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(now: DateTime<Utc>, hours: i64) -> Urgency {
        Urgency::from_lead_time(now, now + Duration::hours(hours))
    }

    #[test]
    fn test_step_function_boundaries() {
        let now = Utc::now();
        assert_eq!(at(now, 1), Urgency::High);
        assert_eq!(at(now, 24), Urgency::High);
        assert_eq!(at(now, 25), Urgency::Medium);
        assert_eq!(at(now, 72), Urgency::Medium);
        assert_eq!(at(now, 73), Urgency::Low);
        assert_eq!(at(now, 24 * 14), Urgency::Low);
    }

    #[test]
    fn test_monotonically_non_increasing_in_lead_time() {
        let now = Utc::now();
        let rank = |u: Urgency| match u {
            Urgency::High => 2,
            Urgency::Medium => 1,
            Urgency::Low => 0,
        };
        let mut prev = rank(at(now, 1));
        for hours in 2..200 {
            let cur = rank(at(now, hours));
            assert!(cur <= prev, "urgency increased at {hours}h lead time");
            prev = cur;
        }
    }

    #[test]
    fn test_past_schedule_is_high() {
        // A row already due has the shortest possible lead time.
        let now = Utc::now();
        assert_eq!(at(now, -1), Urgency::High);
    }
}
