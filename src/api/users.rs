//! User account endpoints: registration, login, token refresh, profile and
//! rental history

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        rental::RentalHistoryEntry,
        user::{PublicUser, RegisterUser, UpdateProfile},
    },
};

use super::AuthenticatedUser;

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response carrying both tokens and the authenticated user
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Token refresh request
#[derive(Deserialize, ToSchema)]
pub struct RefreshRequest {
    #[serde(alias = "refreshToken")]
    pub refresh_token: String,
}

/// Token refresh response
#[derive(Serialize, ToSchema)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Rental history response
#[derive(Serialize, ToSchema)]
pub struct RentalHistoryResponse {
    pub history: Vec<RentalHistoryEntry>,
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/user/register",
    tag = "users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = PublicUser),
        (status = 400, description = "Invalid email, name or password"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<PublicUser>)> {
    let user = state.services.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticate and obtain access and refresh tokens
#[utoipa::path(
    post,
    path = "/user/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let outcome = state
        .services
        .auth
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        access_token: outcome.access_token,
        refresh_token: outcome.refresh_token,
        user: outcome.user,
    }))
}

/// Exchange a refresh token for a fresh access token
#[utoipa::path(
    post,
    path = "/user/refresh",
    tag = "users",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token", body = RefreshResponse),
        (status = 401, description = "Invalid or expired refresh token"),
        (status = 404, description = "User no longer exists")
    )
)]
pub async fn refresh(
    State(state): State<crate::AppState>,
    Json(request): Json<RefreshRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let access_token = state.services.auth.refresh(&request.refresh_token).await?;
    Ok(Json(RefreshResponse { access_token }))
}

/// Rental history of the authenticated user
#[utoipa::path(
    get,
    path = "/user/rental-history",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Rental history, newest first", body = RentalHistoryResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn rental_history(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<RentalHistoryResponse>> {
    let history = state.services.rentals.history(claims.user_id).await?;
    Ok(Json(RentalHistoryResponse { history }))
}

/// Update the authenticated user's display name
#[utoipa::path(
    put,
    path = "/user/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Updated user", body = PublicUser),
        (status = 400, description = "Name missing or blank")
    )
)]
pub async fn update_profile(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<UpdateProfile>,
) -> AppResult<Json<PublicUser>> {
    let user = state
        .services
        .auth
        .update_profile(claims.user_id, request)
        .await?;
    Ok(Json(user))
}
