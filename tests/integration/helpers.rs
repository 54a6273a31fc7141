//! Shared test helpers for integration tests.
//!
//! Seeded users get unique emails so tests never collide with each other
//! or with leftovers from earlier runs.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use chrono::{DateTime, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use haven_core::config::AppConfig;
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

/// Test application context.
pub struct TestApp {
    /// The axum router for making test requests.
    pub router: Router,
    /// Database pool for direct seeding and assertions.
    pub db_pool: PgPool,
    /// Application config.
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application against the test database.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = haven_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        haven_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let users = Arc::new(UserRepository::new(db_pool.clone()));
        let sessions = Arc::new(SessionRepository::new(db_pool.clone()));
        let listing_repo = Arc::new(ListingRepository::new(db_pool.clone()));
        let inspection_repo = Arc::new(InspectionRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let upload_repo = Arc::new(UploadRepository::new(db_pool.clone()));

        let registry = Arc::new(LiveConnectionRegistry::new(config.realtime.clone()));
        let mailer = mailer_from_config(&config.email).expect("Failed to build mailer");

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

        let state = haven_api::AppState {
            config: Arc::new(config.clone()),
            db: db_pool.clone(),
            users,
            sessions,
            inspections,
            listings,
            notifications,
            uploads,
            registry,
        };

        Self {
            router: haven_api::build_router(state),
            db_pool,
            config,
        }
    }

    /// Seed a user and return their id. The email is unique per call.
    pub async fn create_test_user(&self, name: &str, role: &str, verification: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO users (id, email, full_name, role, verification_status)
               VALUES ($1, $2, $3, $4::user_role, $5::verification_status)"#,
        )
        .bind(id)
        .bind(format!("{name}-{id}@test.com"))
        .bind(name)
        .bind(role)
        .bind(verification)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");
        id
    }

    /// Seed an active session for a user and return its opaque token.
    pub async fn create_session(&self, user_id: Uuid) -> String {
        let token = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO sessions (token, user_id, expires_at) \
             VALUES ($1, $2, NOW() + INTERVAL '1 hour')",
        )
        .bind(&token)
        .bind(user_id)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test session");
        token
    }

    /// Seed a session expiring `hours` from now (negative for already
    /// expired) and return its opaque token.
    pub async fn create_session_expiring(&self, user_id: Uuid, hours: i64) -> String {
        let token = Uuid::new_v4().to_string();
        let expires_at: DateTime<Utc> = Utc::now() + chrono::Duration::hours(hours);
        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&token)
            .bind(user_id)
            .bind(expires_at)
            .execute(&self.db_pool)
            .await
            .expect("Failed to create test session");
        token
    }

    /// Seed a listing and return its id.
    pub async fn create_listing(&self, agent_id: Uuid, status: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO listings (id, title, address, city, state, listing_type, price, status, agent_id)
               VALUES ($1, '3BR Duplex', '12 Marina Rd', 'Lagos', 'Lagos', 'duplex', 120000000, $2::listing_status, $3)"#,
        )
        .bind(id)
        .bind(status)
        .bind(agent_id)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test listing");
        id
    }

    /// A scheduled_at value safely in the future, RFC 3339.
    pub fn future_time(hours: i64) -> String {
        let at: DateTime<Utc> = Utc::now() + chrono::Duration::hours(hours);
        at.to_rfc3339()
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
