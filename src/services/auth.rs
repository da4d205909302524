//! Authentication and user account service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Duration;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{AuthClaims, PublicUser, RegisterUser, UpdateProfile, User},
    repository::Repository,
};

/// Uniform login failure message. The same string is used whether the user
/// is missing, soft-deleted or the password is wrong, so responses do not
/// reveal which emails are registered.
const LOGIN_FAILED: &str = "Invalid email or password";

/// Successful login result
pub struct LoginOutcome {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash. Returns false on mismatch
    /// and on malformed hashes; it does not error.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Register a new user account
    pub async fn register(&self, request: RegisterUser) -> AppResult<PublicUser> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = self.hash_password(&request.password)?;
        let user = self
            .repository
            .users
            .create(&request.email, &request.name, &password_hash)
            .await?;

        Ok(user.into())
    }

    /// Authenticate by email and password, issuing both tokens
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication(LOGIN_FAILED.to_string()))?;

        if !self.verify_password(password, &user.password) {
            return Err(AppError::Authentication(LOGIN_FAILED.to_string()));
        }

        let access_token = self.issue_access_token(&user)?;
        let refresh_token = self.issue_refresh_token(&user)?;

        Ok(LoginOutcome {
            access_token,
            refresh_token,
            user: user.into(),
        })
    }

    /// Issue a short-lived access token
    pub fn issue_access_token(&self, user: &User) -> AppResult<String> {
        let claims = AuthClaims::for_user(user, Duration::hours(self.config.access_token_ttl_hours));
        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Issue a long-lived refresh token
    pub fn issue_refresh_token(&self, user: &User) -> AppResult<String> {
        let claims = AuthClaims::for_user(user, Duration::days(self.config.refresh_token_ttl_days));
        claims
            .create_token(&self.config.jwt_refresh_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Stateless access-token check: None on any failure (expired, tampered,
    /// wrong secret), never an error.
    pub fn verify_access_token(&self, token: &str) -> Option<AuthClaims> {
        AuthClaims::from_token(token, &self.config.jwt_secret).ok()
    }

    /// Stateless refresh-token check, same contract as access verification
    pub fn verify_refresh_token(&self, token: &str) -> Option<AuthClaims> {
        AuthClaims::from_token(token, &self.config.jwt_refresh_secret).ok()
    }

    /// Exchange a refresh token for a fresh access token. The refresh token
    /// itself is not rotated. The user is re-loaded so revoked (deleted)
    /// accounts stop refreshing even while their token is still valid.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<String> {
        let claims = self
            .verify_refresh_token(refresh_token)
            .ok_or_else(|| AppError::Authentication("Invalid or expired refresh token".to_string()))?;

        let user = self.repository.users.get_active(claims.user_id).await?;
        self.issue_access_token(&user)
    }

    /// Get an active user by ID
    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_active(id).await
    }

    /// Overwrite the caller's display name
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        profile: UpdateProfile,
    ) -> AppResult<PublicUser> {
        let name = profile.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        let user = self.repository.users.update_name(user_id, name).await?;
        Ok(user.into())
    }
}
