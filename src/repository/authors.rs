//! Authors repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{author::Author, enums::RecordStatus},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an active (non-deleted) author by ID
    pub async fn get_active(&self, id: Uuid) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(RecordStatus::Active.as_i16())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    /// Create a new author
    pub async fn create(&self, name: &str) -> AppResult<Author> {
        let author = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(author)
    }

    /// Overwrite an author's name
    pub async fn update_name(&self, id: Uuid, name: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "UPDATE authors SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    /// Soft-delete an author
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("UPDATE authors SET status = $1 WHERE id = $2")
            .bind(RecordStatus::Deleted.as_i16())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Author with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Substring search over active authors. Case-sensitivity follows the
    /// store's default collation.
    pub async fn search(&self, keyword: &str) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT * FROM authors
            WHERE status = $1 AND name LIKE $2
            ORDER BY name
            "#,
        )
        .bind(RecordStatus::Active.as_i16())
        .bind(format!("%{}%", keyword))
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }
}
