//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Full user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub is_admin: bool,
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

/// Public user view returned by the API (no credentials)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            email: user.email,
            name: user.name,
            is_admin: user.is_admin,
        }
    }
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(contains(pattern = "@", message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Update own profile request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfile {
    pub name: String,
}

/// JWT Claims for authenticated users.
///
/// The same claim set is used for access and refresh tokens; the two are
/// distinguished by the secret they are signed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// User email
    pub sub: String,
    pub user_id: Uuid,
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}

impl AuthClaims {
    /// Build claims for a user with the given lifetime
    pub fn for_user(user: &User, ttl: chrono::Duration) -> Self {
        let now = Utc::now().timestamp();
        AuthClaims {
            sub: user.email.clone(),
            user_id: user.id,
            is_admin: user.is_admin,
            exp: now + ttl.num_seconds(),
            iat: now,
        }
    }

    /// Sign the claims into a JWT
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT (signature + expiry)
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}
