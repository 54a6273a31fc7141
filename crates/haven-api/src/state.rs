//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use haven_core::config::AppConfig;
use haven_database::repositories::session::SessionRepository;
use haven_database::repositories::user::UserRepository;
use haven_realtime::LiveConnectionRegistry;
use haven_service::inspection::InspectionService;
use haven_service::listing::ListingService;
use haven_service::notification::NotificationService;
use haven_service::upload::UploadService;

/// Everything the handlers need, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Connection pool, used directly by the health endpoint.
    pub db: PgPool,
    /// User lookups for the auth extractor.
    pub users: Arc<UserRepository>,
    /// Session validation for the auth extractor.
    pub sessions: Arc<SessionRepository>,
    /// Inspection lifecycle.
    pub inspections: Arc<InspectionService>,
    /// Listing queries and creation.
    pub listings: Arc<ListingService>,
    /// Notification feed and dispatch.
    pub notifications: Arc<NotificationService>,
    /// Upload record management.
    pub uploads: Arc<UploadService>,
    /// Live connection registry, shared with the dispatch side.
    pub registry: Arc<LiveConnectionRegistry>,
}
