//! Listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ListingStatus;

/// A property listed on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Property category, free text (e.g. "apartment", "duplex").
    pub listing_type: String,
    /// Asking price in integer currency units.
    pub price: i64,
    /// Lifecycle status; ACTIVE gates inspection creation.
    pub status: ListingStatus,
    /// Owning agent.
    pub agent_id: Uuid,
    /// Owning company, transitively through the agent.
    pub company_id: Option<Uuid>,
    /// Ordered image URLs.
    pub images: Vec<String>,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}
