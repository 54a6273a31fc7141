//! `AuthUser` extractor — validates the session token and injects context.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;

use haven_core::AppError;
use haven_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Accepts the opaque session token as `Authorization: Bearer <token>` or
/// as the configured session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts, &state.config.auth.session_cookie))
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let session = state
            .sessions
            .find_active_by_token(&token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid or expired session"))?;

        let user = state
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session user no longer exists"))?;

        Ok(AuthUser(RequestContext::for_user(&user)))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn cookie_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name).then(|| value.to_string())
    })
}
