//! # haven-api
//!
//! The HTTP and WebSocket surface of HavenMart: axum router, shared
//! application state, session-auth extractor, request/response DTOs, and
//! the `AppError` to HTTP status mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
