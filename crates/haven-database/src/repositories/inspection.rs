//! Inspection repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use haven_core::error::{AppError, ErrorKind};
use haven_core::result::AppResult;
use haven_entity::inspection::{Inspection, InspectionClient, InspectionStatus, InspectionType};

/// Fields for inserting a new inspection together with its client row.
#[derive(Debug, Clone)]
pub struct NewInspection {
    /// How the inspection is conducted.
    pub inspection_type: InspectionType,
    /// When the visit is scheduled.
    pub scheduled_at: DateTime<Utc>,
    /// Duration in minutes, fixed per type.
    pub duration_minutes: i32,
    /// Fee in integer currency units, fixed per type.
    pub fee: i64,
    /// The property under inspection.
    pub listing_id: Uuid,
    /// Company owning the listing.
    pub company_id: Option<Uuid>,
    /// The requesting client.
    pub client_id: Uuid,
    /// Client notes for the join row.
    pub notes: Option<String>,
}

/// Role-derived visibility scope for inspection listings.
#[derive(Debug, Clone, Copy)]
pub enum InspectionScope {
    /// Rows where the user appears in the client join.
    Client(Uuid),
    /// Rows assigned to the inspector.
    Inspector(Uuid),
    /// Rows whose listing belongs to the agent.
    Agent(Uuid),
    /// Every row.
    All,
}

/// Optional filters for inspection listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectionFilter {
    /// Exact status match.
    pub status: Option<InspectionStatus>,
    /// Exact type match.
    pub inspection_type: Option<InspectionType>,
    /// When true, restrict to scheduled_at >= now.
    pub upcoming: bool,
}

/// Optional filters for the available-jobs query. The urgency post-filter
/// is applied in the service layer on the derived field.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Exact type match.
    pub inspection_type: Option<InspectionType>,
    /// Case-insensitive substring, OR-combined over city/state/address.
    pub location: Option<String>,
}

/// Flat row for the available-jobs query: inspection columns joined with
/// the listing, its agent, and the first registered client (if any).
#[derive(Debug, Clone, FromRow)]
pub struct AvailableJobRow {
    /// Inspection id.
    pub id: Uuid,
    /// Inspection type.
    pub inspection_type: InspectionType,
    /// Scheduled time.
    pub scheduled_at: DateTime<Utc>,
    /// Duration in minutes.
    pub duration_minutes: i32,
    /// Fee in integer currency units.
    pub fee: i64,
    /// Whether the fee has been paid.
    pub paid: bool,
    /// Request submission time.
    pub created_at: DateTime<Utc>,
    /// Listing id.
    pub listing_id: Uuid,
    /// Listing title.
    pub listing_title: String,
    /// Listing address.
    pub listing_address: String,
    /// Listing city.
    pub listing_city: String,
    /// Listing state.
    pub listing_state: String,
    /// Agent id.
    pub agent_id: Uuid,
    /// Agent display name.
    pub agent_name: String,
    /// Agent email.
    pub agent_email: String,
    /// First registered client id, if any.
    pub client_id: Option<Uuid>,
    /// First registered client name.
    pub client_name: Option<String>,
    /// First registered client email.
    pub client_email: Option<String>,
    /// Whether that client flagged interest.
    pub client_interested: Option<bool>,
    /// That client's notes.
    pub client_notes: Option<String>,
}

/// Repository for inspection lifecycle queries.
#[derive(Debug, Clone)]
pub struct InspectionRepository {
    pool: PgPool,
}

impl InspectionRepository {
    /// Create a new inspection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an inspection and its client join row in one transaction.
    pub async fn create_with_client(&self, new: &NewInspection) -> AppResult<Inspection> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let inspection = sqlx::query_as::<_, Inspection>(
            "INSERT INTO inspections \
             (inspection_type, scheduled_at, duration_minutes, fee, listing_id, company_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(new.inspection_type)
        .bind(new.scheduled_at)
        .bind(new.duration_minutes)
        .bind(new.fee)
        .bind(new.listing_id)
        .bind(new.company_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create inspection", e))?;

        sqlx::query(
            "INSERT INTO inspection_clients (inspection_id, client_id, notes) \
             VALUES ($1, $2, $3)",
        )
        .bind(inspection.id)
        .bind(new.client_id)
        .bind(&new.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create inspection client", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(inspection)
    }

    /// Find an inspection by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Inspection>> {
        sqlx::query_as::<_, Inspection>("SELECT * FROM inspections WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find inspection", e))
    }

    /// List inspections visible to a scope with optional filters, newest
    /// scheduled time first. Every matching row is returned.
    pub async fn list_scoped(
        &self,
        scope: InspectionScope,
        filter: InspectionFilter,
    ) -> AppResult<Vec<Inspection>> {
        let mut query = QueryBuilder::<sqlx::Postgres>::new("SELECT i.* FROM inspections i");

        match scope {
            InspectionScope::Client(client_id) => {
                query.push(
                    " JOIN inspection_clients ic ON ic.inspection_id = i.id AND ic.client_id = ",
                );
                query.push_bind(client_id);
                query.push(" WHERE TRUE");
            }
            InspectionScope::Inspector(inspector_id) => {
                query.push(" WHERE i.inspector_id = ");
                query.push_bind(inspector_id);
            }
            InspectionScope::Agent(agent_id) => {
                query.push(" JOIN listings l ON l.id = i.listing_id WHERE l.agent_id = ");
                query.push_bind(agent_id);
            }
            InspectionScope::All => {
                query.push(" WHERE TRUE");
            }
        }

        if let Some(status) = filter.status {
            query.push(" AND i.status = ");
            query.push_bind(status);
        }
        if let Some(inspection_type) = filter.inspection_type {
            query.push(" AND i.inspection_type = ");
            query.push_bind(inspection_type);
        }
        if filter.upcoming {
            query.push(" AND i.scheduled_at >= NOW()");
        }
        query.push(" ORDER BY i.scheduled_at DESC");

        query
            .build_query_as::<Inspection>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list inspections", e))
    }

    /// Unassigned future jobs for the inspector pool, earliest first with
    /// submission time as tie-break.
    pub async fn find_available_jobs(&self, filter: &JobFilter) -> AppResult<Vec<AvailableJobRow>> {
        let mut query = QueryBuilder::<sqlx::Postgres>::new(
            "SELECT i.id, i.inspection_type, i.scheduled_at, i.duration_minutes, i.fee, i.paid, \
             i.created_at, \
             l.id AS listing_id, l.title AS listing_title, l.address AS listing_address, \
             l.city AS listing_city, l.state AS listing_state, \
             a.id AS agent_id, a.full_name AS agent_name, a.email AS agent_email, \
             c.client_id, c.client_name, c.client_email, c.client_interested, c.client_notes \
             FROM inspections i \
             JOIN listings l ON l.id = i.listing_id \
             JOIN users a ON a.id = l.agent_id \
             LEFT JOIN LATERAL ( \
                 SELECT u.id AS client_id, u.full_name AS client_name, u.email AS client_email, \
                        ic.interested AS client_interested, ic.notes AS client_notes \
                 FROM inspection_clients ic \
                 JOIN users u ON u.id = ic.client_id \
                 WHERE ic.inspection_id = i.id \
                 ORDER BY ic.created_at ASC LIMIT 1 \
             ) c ON TRUE \
             WHERE i.status = 'scheduled' AND i.inspector_id IS NULL AND i.scheduled_at >= NOW()",
        );

        if let Some(inspection_type) = filter.inspection_type {
            query.push(" AND i.inspection_type = ");
            query.push_bind(inspection_type);
        }
        if let Some(ref location) = filter.location {
            let pattern = format!("%{location}%");
            query.push(" AND (l.city ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR l.state ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR l.address ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }
        query.push(" ORDER BY i.scheduled_at ASC, i.created_at ASC");

        query
            .build_query_as::<AvailableJobRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list available jobs", e)
            })
    }

    /// Assign an inspector, only if the job is still unassigned and
    /// scheduled. Returns the updated row, or `None` when the conditional
    /// update matched nothing (already taken or not in scheduled state).
    pub async fn assign_inspector(
        &self,
        inspection_id: Uuid,
        inspector_id: Uuid,
    ) -> AppResult<Option<Inspection>> {
        sqlx::query_as::<_, Inspection>(
            "UPDATE inspections SET inspector_id = $1, updated_at = NOW() \
             WHERE id = $2 AND inspector_id IS NULL AND status = 'scheduled' \
             RETURNING *",
        )
        .bind(inspector_id)
        .bind(inspection_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign inspector", e))
    }

    /// Update the status of an inspection.
    pub async fn update_status(
        &self,
        inspection_id: Uuid,
        status: InspectionStatus,
    ) -> AppResult<Inspection> {
        sqlx::query_as::<_, Inspection>(
            "UPDATE inspections SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(inspection_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update inspection status", e)
        })
    }

    /// Client join rows for one inspection, earliest first.
    pub async fn find_clients(&self, inspection_id: Uuid) -> AppResult<Vec<InspectionClient>> {
        sqlx::query_as::<_, InspectionClient>(
            "SELECT * FROM inspection_clients WHERE inspection_id = $1 ORDER BY created_at ASC",
        )
        .bind(inspection_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list inspection clients", e)
        })
    }

    /// Client join rows for a batch of inspections, earliest first.
    pub async fn find_clients_for(
        &self,
        inspection_ids: &[Uuid],
    ) -> AppResult<Vec<InspectionClient>> {
        sqlx::query_as::<_, InspectionClient>(
            "SELECT * FROM inspection_clients WHERE inspection_id = ANY($1) \
             ORDER BY created_at ASC",
        )
        .bind(inspection_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list inspection clients", e)
        })
    }
}
