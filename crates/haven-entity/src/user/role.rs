//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Buyer/renter; requests inspections against active listings.
    Client,
    /// Lists properties; owns listings.
    Agent,
    /// Fulfils inspection jobs once verified.
    Inspector,
    /// Administers a company's agents and listings.
    CompanyAdmin,
    /// Platform-wide administrator.
    PlatformAdmin,
}

impl UserRole {
    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Agent => "AGENT",
            Self::Inspector => "INSPECTOR",
            Self::CompanyAdmin => "COMPANY_ADMIN",
            Self::PlatformAdmin => "PLATFORM_ADMIN",
        }
    }

    /// Whether this role is the platform administrator.
    pub fn is_platform_admin(&self) -> bool {
        matches!(self, Self::PlatformAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = haven_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CLIENT" => Ok(Self::Client),
            "AGENT" => Ok(Self::Agent),
            "INSPECTOR" => Ok(Self::Inspector),
            "COMPANY_ADMIN" => Ok(Self::CompanyAdmin),
            "PLATFORM_ADMIN" => Ok(Self::PlatformAdmin),
            _ => Err(haven_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: CLIENT, AGENT, INSPECTOR, COMPANY_ADMIN, PLATFORM_ADMIN"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("client".parse::<UserRole>().unwrap(), UserRole::Client);
        assert_eq!(
            "COMPANY_ADMIN".parse::<UserRole>().unwrap(),
            UserRole::CompanyAdmin
        );
        assert!("landlord".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_wire_format_is_screaming_snake() {
        let json = serde_json::to_string(&UserRole::PlatformAdmin).unwrap();
        assert_eq!(json, "\"PLATFORM_ADMIN\"");
    }
}
