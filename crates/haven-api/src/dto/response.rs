//! Response DTOs. Every success body carries `success: true`.

use serde::Serialize;

use haven_entity::listing::Listing;
use haven_entity::notification::Notification;
use haven_entity::upload::UploadedFile;
use haven_service::inspection::{AvailableJobView, InspectionDetails};

/// `POST /api/inspections` success body.
#[derive(Debug, Serialize)]
pub struct CreateInspectionResponse {
    /// Always true.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// The created inspection with relations resolved.
    pub inspection: InspectionDetails,
}

/// Single-inspection success body.
#[derive(Debug, Serialize)]
pub struct InspectionResponse {
    /// Always true.
    pub success: bool,
    /// The inspection with relations resolved.
    pub inspection: InspectionDetails,
}

/// `GET /api/inspections` success body. Never paginated.
#[derive(Debug, Serialize)]
pub struct InspectionsResponse {
    /// Always true.
    pub success: bool,
    /// Every visible inspection.
    pub inspections: Vec<InspectionDetails>,
}

/// `GET /api/inspections/available-jobs` success body.
#[derive(Debug, Serialize)]
pub struct AvailableJobsResponse {
    /// Always true.
    pub success: bool,
    /// Open jobs, soonest first.
    #[serde(rename = "availableJobs")]
    pub jobs: Vec<AvailableJobView>,
}

/// `GET /api/listings` success body.
#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    /// Always true.
    pub success: bool,
    /// Matching listings.
    pub listings: Vec<Listing>,
}

/// Single-listing success body.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    /// Always true.
    pub success: bool,
    /// The listing.
    pub listing: Listing,
}

/// `GET /api/notifications` success body.
#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    /// Always true.
    pub success: bool,
    /// The caller's notifications, newest first.
    pub notifications: Vec<Notification>,
}

/// `GET /api/notifications/unread-count` success body.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    /// Always true.
    pub success: bool,
    /// Unread notification count.
    pub count: i64,
}

/// Upload registration success body.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Always true.
    pub success: bool,
    /// The registered record.
    pub upload: UploadedFile,
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Always true.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Build an acknowledgement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `GET /api/health` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status, `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Whether the database responded.
    pub database: bool,
    /// Open live connections.
    pub connections: usize,
    /// Unique connected users.
    pub users_online: usize,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use haven_entity::inspection::{InspectionType, Urgency};
    use haven_service::inspection::{
        AvailableJobView, PartySummary, PaymentStatus, PaymentView, PropertySummary,
    };

    use super::AvailableJobsResponse;

    #[test]
    fn test_job_board_body_uses_available_jobs_key() {
        let job = AvailableJobView {
            id: Uuid::new_v4(),
            inspection_type: InspectionType::Physical,
            scheduled_at: Utc::now(),
            duration_minutes: 60,
            fee: 30_000,
            urgency: Urgency::High,
            created_at: Utc::now(),
            property: PropertySummary {
                id: Uuid::new_v4(),
                title: "3BR Duplex".into(),
                address: "12 Marina Rd".into(),
                city: "Lagos".into(),
                state: "Lagos".into(),
            },
            agent: PartySummary {
                id: Uuid::new_v4(),
                name: "agent".into(),
                email: "agent@test.com".into(),
            },
            client: None,
            payment: PaymentView {
                amount: 30_000,
                status: PaymentStatus::Pending,
            },
        };

        let body = serde_json::to_value(AvailableJobsResponse {
            success: true,
            jobs: vec![job],
        })
        .unwrap();

        assert!(body.get("availableJobs").is_some());
        assert!(body.get("jobs").is_none());
        assert_eq!(body["availableJobs"][0]["payment"]["status"], "PENDING");
    }
}
