//! Rental log model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::book::isbn_serde;

/// Rental log from database. Created on checkout, mutated exactly once (on
/// return), never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RentalLog {
    pub id: Uuid,
    #[serde(with = "isbn_serde")]
    #[schema(value_type = String)]
    pub book_isbn: i64,
    pub user_id: Uuid,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
}

impl RentalLog {
    /// An open rental has not been returned yet
    pub fn is_open(&self) -> bool {
        self.returned_date.is_none()
    }
}

/// Internal row for rental history queries (log joined with book title)
#[derive(Debug, Clone, FromRow)]
pub struct RentalHistoryRow {
    pub id: Uuid,
    pub book_isbn: i64,
    pub book_title: String,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
}

/// Book reference embedded in history entries
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RentalBookRef {
    #[serde(with = "isbn_serde")]
    #[schema(value_type = String)]
    pub isbn: i64,
    pub title: String,
}

/// One entry of a user's rental history
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RentalHistoryEntry {
    pub id: Uuid,
    pub book: RentalBookRef,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
}

impl From<RentalHistoryRow> for RentalHistoryEntry {
    fn from(row: RentalHistoryRow) -> Self {
        RentalHistoryEntry {
            id: row.id,
            book: RentalBookRef {
                isbn: row.book_isbn,
                title: row.book_title,
            },
            checkout_date: row.checkout_date,
            due_date: row.due_date,
            returned_date: row.returned_date,
        }
    }
}
