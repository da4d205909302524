//! Administration service for authors, publishers and the catalog

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor},
        book::{Book, CreateBook, UpdateBook},
        publisher::{CreatePublisher, Publisher},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AdminService {
    repository: Repository,
}

impl AdminService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -- Authors ------------------------------------------------------------

    pub async fn create_author(&self, request: CreateAuthor) -> AppResult<Author> {
        let name = validated_name(&request.name, "Author name is required")?;
        self.repository.authors.create(&name).await
    }

    pub async fn update_author(&self, id: Uuid, request: CreateAuthor) -> AppResult<Author> {
        let name = validated_name(&request.name, "Author name is required")?;
        self.repository.authors.update_name(id, &name).await
    }

    pub async fn delete_author(&self, id: Uuid) -> AppResult<()> {
        self.repository.authors.soft_delete(id).await
    }

    pub async fn search_authors(&self, keyword: &str) -> AppResult<Vec<Author>> {
        self.repository.authors.search(keyword).await
    }

    // -- Publishers ---------------------------------------------------------

    pub async fn create_publisher(&self, request: CreatePublisher) -> AppResult<Publisher> {
        let name = validated_name(&request.name, "Publisher name is required")?;
        self.repository.publishers.create(&name).await
    }

    pub async fn update_publisher(
        &self,
        id: Uuid,
        request: CreatePublisher,
    ) -> AppResult<Publisher> {
        let name = validated_name(&request.name, "Publisher name is required")?;
        self.repository.publishers.update_name(id, &name).await
    }

    pub async fn delete_publisher(&self, id: Uuid) -> AppResult<()> {
        self.repository.publishers.soft_delete(id).await
    }

    pub async fn search_publishers(&self, keyword: &str) -> AppResult<Vec<Publisher>> {
        self.repository.publishers.search(keyword).await
    }

    // -- Books --------------------------------------------------------------

    /// Register a new book. The ISBN must be free (soft-deleted books still
    /// hold theirs) and both referenced parties must exist and be active.
    pub async fn create_book(&self, request: CreateBook) -> AppResult<Book> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.books.isbn_exists(request.isbn).await? {
            return Err(AppError::Conflict("ISBN is already registered".to_string()));
        }

        self.repository.authors.get_active(request.author_id).await?;
        self.repository
            .publishers
            .get_active(request.publisher_id)
            .await?;

        self.repository.books.create(&request).await
    }

    /// Overwrite a book's fields. Referenced author and publisher are
    /// validated the same way as on create.
    pub async fn update_book(&self, isbn: i64, request: UpdateBook) -> AppResult<Book> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.authors.get_active(request.author_id).await?;
        self.repository
            .publishers
            .get_active(request.publisher_id)
            .await?;

        self.repository
            .books
            .update(
                isbn,
                &request.title,
                request.author_id,
                request.publisher_id,
                request.publication_year,
                request.publication_month,
            )
            .await
    }

    pub async fn delete_book(&self, isbn: i64) -> AppResult<()> {
        self.repository.books.soft_delete(isbn).await
    }
}

/// Names are required non-empty after trimming
fn validated_name(raw: &str, message: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::validated_name;

    #[test]
    fn validated_name_trims_and_rejects_blank() {
        assert_eq!(validated_name("  Natsume Soseki ", "required").unwrap(), "Natsume Soseki");
        assert!(validated_name("", "required").is_err());
        assert!(validated_name("   ", "required").is_err());
    }
}
