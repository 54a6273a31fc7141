//! Request context carrying the authenticated user and resolved role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use haven_entity::user::{User, UserRole, VerificationStatus};

use crate::notification::Recipient;

/// Context for the current authenticated request.
///
/// Built by the auth extractor from the session's user row and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at session validation time.
    pub role: UserRole,
    /// Email address, used for transactional mail.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Verification state, gates inspector job acceptance.
    pub verification_status: VerificationStatus,
    /// Company the user belongs to, if any.
    pub company_id: Option<Uuid>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for a resolved user row.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            verification_status: user.verification_status,
            company_id: user.company_id,
            request_time: Utc::now(),
        }
    }

    /// Whether the current user is a platform admin.
    pub fn is_platform_admin(&self) -> bool {
        self.role.is_platform_admin()
    }

    /// Whether the current user is an inspector cleared to take jobs.
    pub fn is_verified_inspector(&self) -> bool {
        matches!(self.role, UserRole::Inspector) && self.verification_status.is_verified()
    }

    /// The caller as a notification recipient.
    pub fn recipient(&self) -> Recipient {
        Recipient {
            user_id: self.user_id,
            email: self.email.clone(),
        }
    }
}
