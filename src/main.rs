//! HavenMart server binary.
//!
//! Wires configuration, the database pool, repositories, services, and the
//! live connection registry into the axum router, then serves until a
//! shutdown signal arrives.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use haven_api::{build_router, AppState};
use haven_core::config::AppConfig;
use haven_core::error::{AppError, ErrorKind};
use haven_core::result::AppResult;
use haven_database::repositories::inspection::InspectionRepository;
use haven_database::repositories::listing::ListingRepository;
use haven_database::repositories::notification::NotificationRepository;
use haven_database::repositories::session::SessionRepository;
use haven_database::repositories::upload::UploadRepository;
use haven_database::repositories::user::UserRepository;
use haven_realtime::LiveConnectionRegistry;
use haven_service::email::mailer_from_config;
use haven_service::inspection::InspectionService;
use haven_service::listing::ListingService;
use haven_service::notification::NotificationService;
use haven_service::upload::{NoopFileStore, UploadService};

#[tokio::main]
async fn main() -> AppResult<()> {
    let env = std::env::var("HAVEN_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;
    init_logging(&config);
    info!(environment = %env, "Starting HavenMart server");

    let pool = haven_database::connection::create_pool(&config.database).await?;
    haven_database::migration::run_migrations(&pool).await?;

    let users = Arc::new(UserRepository::new(pool.clone()));
    let sessions = Arc::new(SessionRepository::new(pool.clone()));
    let expired = sessions.delete_expired().await?;
    if expired > 0 {
        info!(count = expired, "Purged expired sessions");
    }
    let listing_repo = Arc::new(ListingRepository::new(pool.clone()));
    let inspection_repo = Arc::new(InspectionRepository::new(pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(pool.clone()));
    let upload_repo = Arc::new(UploadRepository::new(pool.clone()));

    let registry = Arc::new(LiveConnectionRegistry::new(config.realtime.clone()));
    let mailer = mailer_from_config(&config.email)?;

    let notifications = Arc::new(NotificationService::new(
        notification_repo,
        registry.clone(),
        mailer,
    ));
    let inspections = Arc::new(InspectionService::new(
        inspection_repo,
        Arc::clone(&listing_repo),
        Arc::clone(&users),
        Arc::clone(&notifications),
    ));
    let listings = Arc::new(ListingService::new(listing_repo));
    let uploads = Arc::new(UploadService::new(upload_repo, Arc::new(NoopFileStore)));

    let state = AppState {
        config: Arc::new(config.clone()),
        db: pool,
        users,
        sessions,
        inspections,
        listings,
        notifications,
        uploads,
        registry,
    };
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(addr = %addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Server shut down cleanly");
    Ok(())
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
