//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;
use super::verification::VerificationStatus;

/// A marketplace account in any role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, unique.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Marketplace role.
    pub role: UserRole,
    /// Verification wizard outcome.
    pub verification_status: VerificationStatus,
    /// Owning company (agents, inspectors, company admins).
    pub company_id: Option<Uuid>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this user may receive new-job fan-out notifications.
    pub fn is_eligible_inspector(&self) -> bool {
        self.role == UserRole::Inspector && self.verification_status.is_verified()
    }
}
