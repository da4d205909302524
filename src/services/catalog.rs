//! Catalog browsing service

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::book::{BookDetail, BookListPage, BookListQuery},
    repository::Repository,
};

/// Number of pages needed to show `total` rows at `page_size` per page
fn last_page(total: i64, page_size: i64) -> i64 {
    (total + page_size - 1) / page_size
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// One page of active books, newest publication first
    pub async fn list_books(&self, query: &BookListQuery) -> AppResult<BookListPage> {
        let page = query.page.unwrap_or(1);
        if page < 1 {
            return Err(AppError::Validation("Page must be 1 or greater".to_string()));
        }

        let page_size = query
            .page_size
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size);

        let offset = (page - 1) * page_size;

        let total = self.repository.books.count_active().await?;
        let rows = self.repository.books.list_page(offset, page_size).await?;

        Ok(BookListPage {
            current: page,
            last_page: last_page(total, page_size),
            total,
            books: rows.into_iter().map(Into::into).collect(),
        })
    }

    /// Denormalized detail for an active book
    pub async fn book_detail(&self, isbn: i64) -> AppResult<BookDetail> {
        let row = self.repository.books.get_detail(isbn).await?;
        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::last_page;

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(last_page(0, 5), 0);
        assert_eq!(last_page(1, 5), 1);
        assert_eq!(last_page(5, 5), 1);
        assert_eq!(last_page(6, 5), 2);
        assert_eq!(last_page(101, 20), 6);
    }
}
