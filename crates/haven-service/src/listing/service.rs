//! Listing service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::AppError;
use haven_database::repositories::listing::{ListingRepository, NewListing};
use haven_entity::listing::{Listing, ListingStatus};
use haven_entity::user::UserRole;

use crate::context::RequestContext;

/// Input for listing creation.
#[derive(Debug, Clone)]
pub struct CreateListing {
    /// Display title.
    pub title: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Property category.
    pub listing_type: String,
    /// Asking price in integer currency units.
    pub price: i64,
    /// Ordered image URLs.
    pub images: Vec<String>,
}

/// Manages property listings.
pub struct ListingService {
    listings: Arc<ListingRepository>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(listings: Arc<ListingRepository>) -> Self {
        Self { listings }
    }

    /// List listings, optionally filtered by status and city.
    pub async fn list(
        &self,
        status: Option<ListingStatus>,
        city: Option<&str>,
    ) -> AppResult<Vec<Listing>> {
        self.listings.list(status, city).await
    }

    /// Fetch one listing.
    pub async fn get(&self, id: Uuid) -> AppResult<Listing> {
        self.listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found"))
    }

    /// Create a listing owned by the calling agent.
    ///
    /// Company admins create on behalf of their company; the caller is
    /// recorded as the owning agent either way.
    pub async fn create(&self, ctx: &RequestContext, input: CreateListing) -> AppResult<Listing> {
        if !matches!(ctx.role, UserRole::Agent | UserRole::CompanyAdmin) {
            return Err(AppError::forbidden(
                "Only agents and company admins can create listings",
            ));
        }
        if input.price <= 0 {
            return Err(AppError::validation("price must be positive"));
        }

        let listing = self
            .listings
            .create(&NewListing {
                title: input.title,
                address: input.address,
                city: input.city,
                state: input.state,
                listing_type: input.listing_type,
                price: input.price,
                agent_id: ctx.user_id,
                company_id: ctx.company_id,
                images: input.images,
            })
            .await?;

        info!(
            listing_id = %listing.id,
            agent_id = %ctx.user_id,
            "Listing created"
        );
        Ok(listing)
    }
}
