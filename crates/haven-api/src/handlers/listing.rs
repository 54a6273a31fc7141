//! Listing endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use haven_entity::listing::ListingStatus;
use haven_service::listing::CreateListing;

use crate::dto::request::{CreateListingRequest, ListListingsQuery};
use crate::dto::response::{ListingResponse, ListingsResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// `GET /api/listings`.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListListingsQuery>,
) -> Result<Json<ListingsResponse>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ListingStatus>)
        .transpose()?;

    let listings = state.listings.list(status, query.city.as_deref()).await?;
    Ok(Json(ListingsResponse {
        success: true,
        listings,
    }))
}

/// `GET /api/listings/{id}`.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingResponse>, ApiError> {
    let listing = state.listings.get(id).await?;
    Ok(Json(ListingResponse {
        success: true,
        listing,
    }))
}

/// `POST /api/listings` — create as an agent or company admin.
pub async fn create(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    ValidatedJson(body): ValidatedJson<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), ApiError> {
    let listing = state
        .listings
        .create(
            &ctx,
            CreateListing {
                title: body.title,
                address: body.address,
                city: body.city,
                state: body.state,
                listing_type: body.listing_type,
                price: body.price,
                images: body.images,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ListingResponse {
            success: true,
            listing,
        }),
    ))
}
