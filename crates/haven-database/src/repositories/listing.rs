//! Listing repository implementation.

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use haven_core::error::{AppError, ErrorKind};
use haven_core::result::AppResult;
use haven_entity::listing::{Listing, ListingStatus};

/// Fields for inserting a new listing.
#[derive(Debug, Clone)]
pub struct NewListing {
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
    /// Owning agent.
    pub agent_id: Uuid,
    /// Owning company.
    pub company_id: Option<Uuid>,
    /// Ordered image URLs.
    pub images: Vec<String>,
}

/// Repository for listing CRUD.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    pool: PgPool,
}

impl ListingRepository {
    /// Create a new listing repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a listing by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Listing>> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find listing", e))
    }

    /// Find several listings by id.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Listing>> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find listings", e))
    }

    /// List listings, optionally filtered by status and city, newest first.
    pub async fn list(
        &self,
        status: Option<ListingStatus>,
        city: Option<&str>,
    ) -> AppResult<Vec<Listing>> {
        let mut query = QueryBuilder::<sqlx::Postgres>::new("SELECT * FROM listings WHERE TRUE");

        if let Some(status) = status {
            query.push(" AND status = ");
            query.push_bind(status);
        }
        if let Some(city) = city {
            query.push(" AND city ILIKE ");
            query.push_bind(format!("%{city}%"));
        }
        query.push(" ORDER BY created_at DESC");

        query
            .build_query_as::<Listing>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list listings", e))
    }

    /// Insert a new listing with status ACTIVE.
    pub async fn create(&self, new: &NewListing) -> AppResult<Listing> {
        sqlx::query_as::<_, Listing>(
            "INSERT INTO listings \
             (title, address, city, state, listing_type, price, agent_id, company_id, images) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&new.title)
        .bind(&new.address)
        .bind(&new.city)
        .bind(&new.state)
        .bind(&new.listing_type)
        .bind(new.price)
        .bind(new.agent_id)
        .bind(new.company_id)
        .bind(&new.images)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create listing", e))
    }
}
