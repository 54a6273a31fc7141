//! Inspection entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::InspectionType;
use super::status::InspectionStatus;

/// A scheduled visit (virtual or physical) to a listed property, requested
/// by a client and fulfilled by an inspector.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// Unique inspection identifier.
    pub id: Uuid,
    /// How the inspection is conducted.
    pub inspection_type: InspectionType,
    /// Lifecycle status.
    pub status: InspectionStatus,
    /// When the visit is scheduled.
    pub scheduled_at: DateTime<Utc>,
    /// Visit duration in minutes, fixed per type at creation.
    pub duration_minutes: i32,
    /// Fee in integer currency units, fixed per type at creation.
    pub fee: i64,
    /// Whether the fee has been paid.
    pub paid: bool,
    /// The property under inspection.
    pub listing_id: Uuid,
    /// Company owning the listing at creation time.
    pub company_id: Option<Uuid>,
    /// Assigned inspector; NULL until a job is accepted.
    pub inspector_id: Option<Uuid>,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
    /// When the inspection was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Join row binding a client to an inspection.
///
/// Created together with the inspection and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InspectionClient {
    /// Unique row identifier.
    pub id: Uuid,
    /// The inspection.
    pub inspection_id: Uuid,
    /// The participating client.
    pub client_id: Uuid,
    /// Whether the client flagged interest in the property.
    pub interested: bool,
    /// Free-text notes from the client.
    pub notes: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
