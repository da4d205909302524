//! Books repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookDetailRow, BookListRow, CreateBook},
        enums::RecordStatus,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an active (non-deleted) book by ISBN
    pub async fn get_active(&self, isbn: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE isbn = $1 AND status = $2")
            .bind(isbn)
            .bind(RecordStatus::Active.as_i16())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Check if an ISBN is taken, regardless of status. Soft-deleted books
    /// still occupy their ISBN.
    pub async fn isbn_exists(&self, isbn: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Count active books
    pub async fn count_active(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE status = $1")
            .bind(RecordStatus::Active.as_i16())
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// One page of active books joined with their author, newest publication
    /// first. The trailing `isbn DESC` makes the order total so pages are
    /// disjoint even when many books share a publication month.
    pub async fn list_page(&self, offset: i64, limit: i64) -> AppResult<Vec<BookListRow>> {
        let rows = sqlx::query_as::<_, BookListRow>(
            r#"
            SELECT b.isbn, b.title, a.name AS author_name,
                   b.publication_year, b.publication_month
            FROM books b
            JOIN authors a ON a.id = b.author_id
            WHERE b.status = $1
            ORDER BY b.publication_year DESC, b.publication_month DESC, b.isbn DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(RecordStatus::Active.as_i16())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Denormalized detail for an active book
    pub async fn get_detail(&self, isbn: i64) -> AppResult<BookDetailRow> {
        sqlx::query_as::<_, BookDetailRow>(
            r#"
            SELECT b.isbn, b.title, a.name AS author_name, p.name AS publisher_name,
                   b.publication_year, b.publication_month
            FROM books b
            JOIN authors a ON a.id = b.author_id
            JOIN publishers p ON p.id = b.publisher_id
            WHERE b.isbn = $1 AND b.status = $2
            "#,
        )
        .bind(isbn)
        .bind(RecordStatus::Active.as_i16())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title, author_id, publisher_id, publication_year, publication_month)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(book.isbn)
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(book.publication_year)
        .bind(book.publication_month)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // The primary key settles concurrent creates of the same ISBN
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("ISBN is already registered".to_string())
            }
            other => AppError::Database(other),
        })?;

        Ok(created)
    }

    /// Overwrite a book's fields
    pub async fn update(
        &self,
        isbn: i64,
        title: &str,
        author_id: Uuid,
        publisher_id: Uuid,
        publication_year: i32,
        publication_month: i32,
    ) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author_id = $2, publisher_id = $3,
                publication_year = $4, publication_month = $5
            WHERE isbn = $6
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(publisher_id)
        .bind(publication_year)
        .bind(publication_month)
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Soft-delete a book
    pub async fn soft_delete(&self, isbn: i64) -> AppResult<()> {
        let result = sqlx::query("UPDATE books SET status = $1 WHERE isbn = $2")
            .bind(RecordStatus::Deleted.as_i16())
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book with ISBN {} not found",
                isbn
            )));
        }
        Ok(())
    }
}
