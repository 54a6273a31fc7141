//! Inspection endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use haven_entity::inspection::{InspectionStatus, InspectionType, Urgency};
use haven_service::inspection::{CreateInspection, InspectionQuery, JobQuery};

use crate::dto::request::{
    AvailableJobsQuery, CreateInspectionRequest, ListInspectionsQuery,
    UpdateInspectionStatusRequest,
};
use crate::dto::response::{
    AvailableJobsResponse, CreateInspectionResponse, InspectionResponse, InspectionsResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// `POST /api/inspections` — request an inspection as a client.
pub async fn create(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    ValidatedJson(body): ValidatedJson<CreateInspectionRequest>,
) -> Result<(StatusCode, Json<CreateInspectionResponse>), ApiError> {
    let inspection_type: InspectionType = body.inspection_type.parse()?;

    let inspection = state
        .inspections
        .create(
            &ctx,
            CreateInspection {
                listing_id: body.property_id,
                inspection_type,
                scheduled_at: body.scheduled_at,
                notes: body.notes,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateInspectionResponse {
            success: true,
            message: "Inspection scheduled successfully".to_string(),
            inspection,
        }),
    ))
}

/// `GET /api/inspections` — every inspection visible to the caller's role.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(query): Query<ListInspectionsQuery>,
) -> Result<Json<InspectionsResponse>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<InspectionStatus>)
        .transpose()?;
    let inspection_type = query
        .inspection_type
        .as_deref()
        .map(str::parse::<InspectionType>)
        .transpose()?;

    let inspections = state
        .inspections
        .list(
            &ctx,
            InspectionQuery {
                status,
                inspection_type,
                upcoming: query.upcoming.unwrap_or(false),
            },
        )
        .await?;

    Ok(Json(InspectionsResponse {
        success: true,
        inspections,
    }))
}

/// `GET /api/inspections/available-jobs` — the inspector job board.
pub async fn available_jobs(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(query): Query<AvailableJobsQuery>,
) -> Result<Json<AvailableJobsResponse>, ApiError> {
    let inspection_type = query
        .inspection_type
        .as_deref()
        .map(str::parse::<InspectionType>)
        .transpose()?;
    let urgency = query
        .urgency
        .as_deref()
        .map(str::parse::<Urgency>)
        .transpose()?;

    let jobs = state
        .inspections
        .available_jobs(
            &ctx,
            JobQuery {
                inspection_type,
                location: query.location,
                urgency,
            },
        )
        .await?;

    Ok(Json(AvailableJobsResponse {
        success: true,
        jobs,
    }))
}

/// `POST /api/inspections/{id}/accept` — take an unassigned job.
pub async fn accept(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<InspectionResponse>, ApiError> {
    let inspection = state.inspections.accept_job(&ctx, id).await?;
    Ok(Json(InspectionResponse {
        success: true,
        inspection,
    }))
}

/// `PUT /api/inspections/{id}/status` — advance or cancel.
pub async fn update_status(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateInspectionStatusRequest>,
) -> Result<Json<InspectionResponse>, ApiError> {
    let next: InspectionStatus = body.status.parse()?;
    let inspection = state.inspections.update_status(&ctx, id, next).await?;
    Ok(Json(InspectionResponse {
        success: true,
        inspection,
    }))
}
