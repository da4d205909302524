//! Rental logs repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::rental::{RentalHistoryRow, RentalLog},
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get rental log by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<RentalLog> {
        sqlx::query_as::<_, RentalLog>("SELECT * FROM rental_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", id)))
    }

    /// Open a rental for a book, atomically.
    ///
    /// The insert targets the partial unique index on `(book_isbn) WHERE
    /// returned_date IS NULL`, so when an open rental already exists the
    /// statement inserts nothing and returns no row. Two concurrent
    /// checkouts of the same ISBN cannot both succeed.
    pub async fn checkout(
        &self,
        book_isbn: i64,
        user_id: Uuid,
        checkout_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<RentalLog> {
        let rental = sqlx::query_as::<_, RentalLog>(
            r#"
            INSERT INTO rental_logs (book_isbn, user_id, checkout_date, due_date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (book_isbn) WHERE returned_date IS NULL DO NOTHING
            RETURNING *
            "#,
        )
        .bind(book_isbn)
        .bind(user_id)
        .bind(checkout_date)
        .bind(due_date)
        .fetch_optional(&self.pool)
        .await?;

        rental.ok_or_else(|| AppError::Conflict("Book is already on loan".to_string()))
    }

    /// Close a rental. The `returned_date IS NULL` guard makes the update
    /// conditional, so a concurrent double return closes the log only once.
    pub async fn mark_returned(
        &self,
        id: Uuid,
        returned_date: DateTime<Utc>,
    ) -> AppResult<RentalLog> {
        let rental = sqlx::query_as::<_, RentalLog>(
            r#"
            UPDATE rental_logs
            SET returned_date = $1
            WHERE id = $2 AND returned_date IS NULL
            RETURNING *
            "#,
        )
        .bind(returned_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        rental.ok_or_else(|| AppError::Conflict("Rental has already been returned".to_string()))
    }

    /// All rental logs of a user, newest checkout first, with book titles
    pub async fn history_for_user(&self, user_id: Uuid) -> AppResult<Vec<RentalHistoryRow>> {
        let rows = sqlx::query_as::<_, RentalHistoryRow>(
            r#"
            SELECT r.id, r.book_isbn, b.title AS book_title,
                   r.checkout_date, r.due_date, r.returned_date
            FROM rental_logs r
            JOIN books b ON b.isbn = r.book_isbn
            WHERE r.user_id = $1
            ORDER BY r.checkout_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
