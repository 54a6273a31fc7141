//! Inspection lifecycle orchestration.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::AppError;
use haven_database::repositories::inspection::{
    InspectionFilter, InspectionRepository, InspectionScope, JobFilter, NewInspection,
};
use haven_database::repositories::listing::ListingRepository;
use haven_database::repositories::user::UserRepository;
use haven_entity::inspection::{Inspection, InspectionStatus, InspectionType, Urgency};
use haven_entity::listing::Listing;
use haven_entity::notification::{NotificationDraft, NotificationKind};
use haven_entity::user::UserRole;

use crate::context::RequestContext;
use crate::inspection::views::{assemble_details, project_job, AvailableJobView, InspectionDetails};
use crate::notification::{NotificationService, Recipient};

/// Input for inspection creation.
#[derive(Debug, Clone)]
pub struct CreateInspection {
    /// The property to inspect.
    pub listing_id: Uuid,
    /// How the inspection is conducted.
    pub inspection_type: InspectionType,
    /// Requested visit time, must be in the future.
    pub scheduled_at: DateTime<Utc>,
    /// Free-text notes from the client.
    pub notes: Option<String>,
}

/// Filters for the role-scoped inspection listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectionQuery {
    /// Exact status match.
    pub status: Option<InspectionStatus>,
    /// Exact type match.
    pub inspection_type: Option<InspectionType>,
    /// Restrict to scheduled_at >= now.
    pub upcoming: bool,
}

/// Filters for the inspector job board.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    /// Exact type match.
    pub inspection_type: Option<InspectionType>,
    /// Case-insensitive location substring.
    pub location: Option<String>,
    /// Post-filter on the derived urgency.
    pub urgency: Option<Urgency>,
}

/// Orchestrates the inspection lifecycle and its notification side effects.
pub struct InspectionService {
    inspections: Arc<InspectionRepository>,
    listings: Arc<ListingRepository>,
    users: Arc<UserRepository>,
    notifications: Arc<NotificationService>,
}

impl InspectionService {
    /// Creates a new inspection service.
    pub fn new(
        inspections: Arc<InspectionRepository>,
        listings: Arc<ListingRepository>,
        users: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            inspections,
            listings,
            users,
            notifications,
        }
    }

    /// Create an inspection request for the calling client.
    ///
    /// Fee and duration are derived from the type; the inspection starts
    /// unassigned and unpaid, with the caller bound through the client join
    /// row in the same transaction. Notification and email side effects are
    /// best-effort.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateInspection,
    ) -> AppResult<InspectionDetails> {
        if ctx.role != UserRole::Client {
            return Err(AppError::forbidden("Only clients can request inspections"));
        }
        if input.scheduled_at <= ctx.request_time {
            return Err(AppError::validation("scheduledAt must be a future date"));
        }

        let listing = self
            .listings
            .find_by_id(input.listing_id)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found"))?;
        if !listing.status.accepts_inspections() {
            return Err(AppError::validation(
                "Listing is not active and cannot be inspected",
            ));
        }

        let inspection = self
            .inspections
            .create_with_client(&NewInspection {
                inspection_type: input.inspection_type,
                scheduled_at: input.scheduled_at,
                duration_minutes: input.inspection_type.duration_minutes(),
                fee: input.inspection_type.fee(),
                listing_id: listing.id,
                company_id: listing.company_id,
                client_id: ctx.user_id,
                notes: input.notes,
            })
            .await?;

        info!(
            inspection_id = %inspection.id,
            listing_id = %listing.id,
            client_id = %ctx.user_id,
            inspection_type = %inspection.inspection_type,
            "Inspection created"
        );

        self.announce_created(ctx, &inspection, &listing).await;

        self.details_for(inspection).await
    }

    /// Best-effort side effects of creation: client + agent notifications
    /// and the platform-wide verified-inspector fan-out.
    async fn announce_created(
        &self,
        ctx: &RequestContext,
        inspection: &Inspection,
        listing: &Listing,
    ) {
        let scheduled = NotificationDraft::new(
            NotificationKind::InspectionScheduled,
            "Inspection Scheduled",
            format!(
                "A {} inspection of {} is scheduled for {}",
                inspection.inspection_type,
                listing.title,
                inspection.scheduled_at.to_rfc3339()
            ),
        )
        .with_inspection(inspection.id)
        .with_listing(listing.id);

        if let Err(e) = self
            .notifications
            .notify(&ctx.recipient(), scheduled.clone())
            .await
        {
            warn!(inspection_id = %inspection.id, error = %e, "Failed to notify client");
        }

        match self.users.find_by_id(listing.agent_id).await {
            Ok(Some(agent)) => {
                if let Err(e) = self
                    .notifications
                    .notify(&Recipient::from(&agent), scheduled)
                    .await
                {
                    warn!(inspection_id = %inspection.id, error = %e, "Failed to notify agent");
                }
            }
            Ok(None) => {
                warn!(agent_id = %listing.agent_id, "Listing agent no longer exists");
            }
            Err(e) => {
                warn!(agent_id = %listing.agent_id, error = %e, "Failed to load listing agent");
            }
        }

        // Every verified inspector, platform-wide. Location is deliberately
        // not considered here.
        match self.users.find_verified_inspectors().await {
            Ok(inspectors) => {
                let job = NotificationDraft::new(
                    NotificationKind::NewJobAvailable,
                    "New Inspection Job Available",
                    format!(
                        "A {} inspection in {}, {} is open for acceptance",
                        inspection.inspection_type, listing.city, listing.state
                    ),
                )
                .with_inspection(inspection.id)
                .with_listing(listing.id);

                let ids: Vec<Uuid> = inspectors.iter().map(|u| u.id).collect();
                if let Err(e) = self.notifications.notify_many(&ids, job).await {
                    warn!(inspection_id = %inspection.id, error = %e, "Inspector fan-out failed");
                }
            }
            Err(e) => {
                warn!(inspection_id = %inspection.id, error = %e, "Failed to load inspectors");
            }
        }
    }

    /// List inspections visible to the caller's role, with optional filters.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: InspectionQuery,
    ) -> AppResult<Vec<InspectionDetails>> {
        let scope = scope_for(ctx);
        let rows = self
            .inspections
            .list_scoped(
                scope,
                InspectionFilter {
                    status: query.status,
                    inspection_type: query.inspection_type,
                    upcoming: query.upcoming,
                },
            )
            .await?;
        self.details_for_all(rows).await
    }

    /// Unassigned future jobs for the inspector pool.
    pub async fn available_jobs(
        &self,
        ctx: &RequestContext,
        query: JobQuery,
    ) -> AppResult<Vec<AvailableJobView>> {
        if ctx.role != UserRole::Inspector {
            return Err(AppError::forbidden(
                "Only inspectors can view available jobs",
            ));
        }

        let rows = self
            .inspections
            .find_available_jobs(&JobFilter {
                inspection_type: query.inspection_type,
                location: query.location.clone(),
            })
            .await?;

        let now = Utc::now();
        let jobs = rows
            .into_iter()
            .map(|row| project_job(row, now))
            .filter(|job| query.urgency.is_none_or(|u| job.urgency == u))
            .collect();
        Ok(jobs)
    }

    /// Accept an unassigned job as the calling inspector.
    ///
    /// The assignment is a single conditional update, so exactly one of any
    /// set of concurrent accepts wins; the rest observe a conflict.
    pub async fn accept_job(
        &self,
        ctx: &RequestContext,
        inspection_id: Uuid,
    ) -> AppResult<InspectionDetails> {
        if ctx.role != UserRole::Inspector {
            return Err(AppError::forbidden("Only inspectors can accept jobs"));
        }
        if !ctx.is_verified_inspector() {
            return Err(AppError::forbidden(
                "Only verified inspectors can accept jobs",
            ));
        }

        let updated = self
            .inspections
            .assign_inspector(inspection_id, ctx.user_id)
            .await?;

        let inspection = match updated {
            Some(inspection) => inspection,
            None => {
                return match self.inspections.find_by_id(inspection_id).await? {
                    None => Err(AppError::not_found("Inspection not found")),
                    Some(_) => Err(AppError::conflict("Inspection is no longer available")),
                };
            }
        };

        info!(
            inspection_id = %inspection.id,
            inspector_id = %ctx.user_id,
            "Inspection job accepted"
        );

        self.announce_to_participants(
            &inspection,
            NotificationKind::InspectionAccepted,
            "Inspection Accepted",
            format!("{} has accepted the inspection", ctx.full_name),
        )
        .await;

        self.details_for(inspection).await
    }

    /// Advance or cancel an inspection's status.
    ///
    /// The assigned inspector advances the lifecycle; cancellation is open
    /// to a joined client, the listing agent, or a platform admin.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        inspection_id: Uuid,
        next: InspectionStatus,
    ) -> AppResult<InspectionDetails> {
        let inspection = self
            .inspections
            .find_by_id(inspection_id)
            .await?
            .ok_or_else(|| AppError::not_found("Inspection not found"))?;

        if !inspection.status.can_transition_to(next) {
            return Err(AppError::conflict(format!(
                "Cannot move inspection from {} to {}",
                inspection.status, next
            )));
        }

        self.authorize_transition(ctx, &inspection, next).await?;

        let updated = self.inspections.update_status(inspection_id, next).await?;
        info!(
            inspection_id = %inspection_id,
            from = %inspection.status,
            to = %next,
            user_id = %ctx.user_id,
            "Inspection status updated"
        );

        if next == InspectionStatus::Completed {
            self.announce_to_participants(
                &updated,
                NotificationKind::InspectionCompleted,
                "Inspection Completed",
                "The inspection has been completed".to_string(),
            )
            .await;
        }

        self.details_for(updated).await
    }

    async fn authorize_transition(
        &self,
        ctx: &RequestContext,
        inspection: &Inspection,
        next: InspectionStatus,
    ) -> AppResult<()> {
        match next {
            InspectionStatus::InProgress | InspectionStatus::Completed => {
                if inspection.inspector_id != Some(ctx.user_id) {
                    return Err(AppError::forbidden(
                        "Only the assigned inspector can advance this inspection",
                    ));
                }
                Ok(())
            }
            InspectionStatus::Cancelled => {
                if ctx.is_platform_admin() {
                    return Ok(());
                }
                if let Some(listing) = self.listings.find_by_id(inspection.listing_id).await? {
                    if listing.agent_id == ctx.user_id {
                        return Ok(());
                    }
                }
                let clients = self.inspections.find_clients(inspection.id).await?;
                if clients.iter().any(|c| c.client_id == ctx.user_id) {
                    return Ok(());
                }
                Err(AppError::forbidden(
                    "Only a participant or an admin can cancel this inspection",
                ))
            }
            InspectionStatus::Scheduled => {
                // can_transition_to never allows moving back here.
                Err(AppError::conflict("Cannot reschedule through this endpoint"))
            }
        }
    }

    /// Notify every joined client and the listing agent, best-effort.
    async fn announce_to_participants(
        &self,
        inspection: &Inspection,
        kind: NotificationKind,
        title: &str,
        message: String,
    ) {
        let draft = NotificationDraft::new(kind, title, message)
            .with_inspection(inspection.id)
            .with_listing(inspection.listing_id);

        let mut recipient_ids: Vec<Uuid> = Vec::new();
        match self.inspections.find_clients(inspection.id).await {
            Ok(clients) => recipient_ids.extend(clients.iter().map(|c| c.client_id)),
            Err(e) => {
                warn!(inspection_id = %inspection.id, error = %e, "Failed to load clients");
            }
        }
        match self.listings.find_by_id(inspection.listing_id).await {
            Ok(Some(listing)) => recipient_ids.push(listing.agent_id),
            Ok(None) => {}
            Err(e) => {
                warn!(inspection_id = %inspection.id, error = %e, "Failed to load listing");
            }
        }

        match self.users.find_by_ids(&recipient_ids).await {
            Ok(users) => {
                for user in &users {
                    if let Err(e) = self
                        .notifications
                        .notify(&Recipient::from(user), draft.clone())
                        .await
                    {
                        warn!(
                            inspection_id = %inspection.id,
                            user_id = %user.id,
                            error = %e,
                            "Failed to notify participant"
                        );
                    }
                }
            }
            Err(e) => {
                warn!(inspection_id = %inspection.id, error = %e, "Failed to load participants");
            }
        }
    }

    async fn details_for(&self, inspection: Inspection) -> AppResult<InspectionDetails> {
        let mut details = self.details_for_all(vec![inspection]).await?;
        details
            .pop()
            .ok_or_else(|| AppError::internal("Detail assembly dropped the inspection"))
    }

    /// Resolve listings, parties, and clients for a page of inspections in
    /// three batch queries.
    async fn details_for_all(
        &self,
        inspections: Vec<Inspection>,
    ) -> AppResult<Vec<InspectionDetails>> {
        if inspections.is_empty() {
            return Ok(Vec::new());
        }

        let inspection_ids: Vec<Uuid> = inspections.iter().map(|i| i.id).collect();
        let listing_ids: Vec<Uuid> = inspections
            .iter()
            .map(|i| i.listing_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let listings = self.listings.find_by_ids(&listing_ids).await?;
        let client_rows = self.inspections.find_clients_for(&inspection_ids).await?;

        let mut user_ids: HashSet<Uuid> = HashSet::new();
        user_ids.extend(listings.iter().map(|l| l.agent_id));
        user_ids.extend(inspections.iter().filter_map(|i| i.inspector_id));
        user_ids.extend(client_rows.iter().map(|c| c.client_id));
        let user_ids: Vec<Uuid> = user_ids.into_iter().collect();
        let users = self.users.find_by_ids(&user_ids).await?;

        Ok(assemble_details(
            inspections,
            &listings,
            &users,
            &client_rows,
        ))
    }
}

/// Map the caller's role to their visibility scope.
fn scope_for(ctx: &RequestContext) -> InspectionScope {
    match ctx.role {
        UserRole::Client => InspectionScope::Client(ctx.user_id),
        UserRole::Inspector => InspectionScope::Inspector(ctx.user_id),
        // Company admins see the rows of listings they personally own as
        // agent, not their whole company's.
        UserRole::Agent | UserRole::CompanyAdmin => InspectionScope::Agent(ctx.user_id),
        UserRole::PlatformAdmin => InspectionScope::All,
    }
}
