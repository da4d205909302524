//! Publisher model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Full publisher model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: Uuid,
    pub name: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

/// Publisher representation for admin and search responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublisherView {
    pub id: Uuid,
    pub name: String,
}

impl From<Publisher> for PublisherView {
    fn from(publisher: Publisher) -> Self {
        PublisherView {
            id: publisher.id,
            name: publisher.name,
        }
    }
}

/// Create/update publisher request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePublisher {
    #[validate(length(min = 1, message = "Publisher name is required"))]
    pub name: String,
}
