//! Publishers repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{enums::RecordStatus, publisher::Publisher},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an active (non-deleted) publisher by ID
    pub async fn get_active(&self, id: Uuid) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(RecordStatus::Active.as_i16())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publisher with id {} not found", id)))
    }

    /// Create a new publisher
    pub async fn create(&self, name: &str) -> AppResult<Publisher> {
        let publisher = sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(publisher)
    }

    /// Overwrite a publisher's name
    pub async fn update_name(&self, id: Uuid, name: &str) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Publisher with id {} not found", id)))
    }

    /// Soft-delete a publisher
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("UPDATE publishers SET status = $1 WHERE id = $2")
            .bind(RecordStatus::Deleted.as_i16())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Publisher with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Substring search over active publishers. Case-sensitivity follows the
    /// store's default collation.
    pub async fn search(&self, keyword: &str) -> AppResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            r#"
            SELECT * FROM publishers
            WHERE status = $1 AND name LIKE $2
            ORDER BY name
            "#,
        )
        .bind(RecordStatus::Active.as_i16())
        .bind(format!("%{}%", keyword))
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }
}
