//! Request DTOs. Bodies are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/inspections`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInspectionRequest {
    /// The property to inspect.
    pub property_id: Uuid,
    /// VIRTUAL or PHYSICAL, parsed in the handler for a 400 on bad values.
    #[validate(length(min = 1))]
    pub inspection_type: String,
    /// Requested visit time.
    pub scheduled_at: DateTime<Utc>,
    /// Free-text notes.
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Query parameters of `GET /api/inspections`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListInspectionsQuery {
    /// Exact status match.
    pub status: Option<String>,
    /// Exact type match.
    #[serde(rename = "type")]
    pub inspection_type: Option<String>,
    /// Restrict to future rows.
    pub upcoming: Option<bool>,
}

/// Query parameters of `GET /api/inspections/available-jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailableJobsQuery {
    /// Exact type match.
    #[serde(rename = "type")]
    pub inspection_type: Option<String>,
    /// Case-insensitive location substring.
    pub location: Option<String>,
    /// Post-filter on the derived urgency.
    pub urgency: Option<String>,
}

/// Body of `PUT /api/inspections/{id}/status`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInspectionStatusRequest {
    /// Target status, parsed in the handler.
    #[validate(length(min = 1))]
    pub status: String,
}

/// Query parameters of `GET /api/listings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListListingsQuery {
    /// Exact status match.
    pub status: Option<String>,
    /// Case-insensitive city substring.
    pub city: Option<String>,
}

/// Body of `POST /api/listings`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    /// Display title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Street address.
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    /// City.
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    /// State.
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    /// Property category.
    #[validate(length(min = 1, max = 100))]
    pub listing_type: String,
    /// Asking price in integer currency units.
    pub price: i64,
    /// Ordered image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Body of `POST /api/uploads`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUploadRequest {
    /// Stored filename.
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
    /// Public URL of the stored object.
    #[validate(url)]
    pub url: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// MIME type.
    #[validate(length(min = 1, max = 100))]
    pub mime_type: String,
    /// Listing the image belongs to.
    pub listing_id: Option<Uuid>,
}
