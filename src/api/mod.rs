//! API handlers for Librarium REST endpoints

pub mod admin;
pub mod books;
pub mod health;
pub mod openapi;
pub mod search;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::user::AuthClaims, AppState};

/// Extractor for authenticated user from a bearer access token.
///
/// A missing or malformed header is a 401; a header that is present but
/// carries an invalid or expired token is a 403.
pub struct AuthenticatedUser(pub AuthClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                AppError::Authentication("Invalid authorization header format".to_string())
            })?;

        let claims = state
            .services
            .auth
            .verify_access_token(token)
            .ok_or_else(|| AppError::Authorization("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Extractor for administrator endpoints: an authenticated user whose token
/// carries the admin claim.
pub struct AdminUser(pub AuthClaims);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(claims) =
            AuthenticatedUser::from_request_parts(parts, state).await?;

        if !claims.is_admin {
            return Err(AppError::Authorization("Admin privilege required".to_string()));
        }

        Ok(AdminUser(claims))
    }
}

/// Parse an ISBN path segment. Path ISBNs arrive as decimal strings.
pub(crate) fn parse_isbn(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid ISBN: {}", raw)))
}
