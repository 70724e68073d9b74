use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use tracing::warn;

use super::session::verify_session_token;
use crate::{error::AppError, state::AppState};

/// Extracts and validates the session token, returning the owner id.
/// Fails closed: any missing or invalid credential is `Unauthenticated`.
pub struct AuthUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthenticated)?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(AppError::Unauthenticated)?;

        let claims = verify_session_token(&state.config.session, token).map_err(|_| {
            warn!("invalid or expired session token");
            AppError::Unauthenticated
        })?;

        Ok(AuthUser(claims.sub))
    }
}
