//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// ISBN wire format.
///
/// ISBNs are integers too wide for the 53-bit mantissa of a JSON double, so
/// they are emitted as strings. On input both `"9784123456789"` and the bare
/// integer literal are accepted; parsing goes through `i64`, never `f64`.
pub mod isbn_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(isbn: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(isbn)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(n),
            Raw::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| de::Error::custom(format!("invalid ISBN: {}", s))),
        }
    }
}

/// Formats `(year, month)` as the `YYYY-MM` publication label used in
/// catalog responses.
pub fn year_month(year: i32, month: i32) -> String {
    format!("{}-{:02}", year, month)
}

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(with = "isbn_serde")]
    #[schema(value_type = String)]
    pub isbn: i64,
    pub title: String,
    pub author_id: Uuid,
    pub publisher_id: Uuid,
    pub publication_year: i32,
    pub publication_month: i32,
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

/// Reference to a named entity (author or publisher) in denormalized views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NameRef {
    pub name: String,
}

/// Internal row for catalog list queries (book joined with author name)
#[derive(Debug, Clone, FromRow)]
pub struct BookListRow {
    pub isbn: i64,
    pub title: String,
    pub author_name: String,
    pub publication_year: i32,
    pub publication_month: i32,
}

/// Book summary for paginated catalog listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookSummary {
    #[serde(with = "isbn_serde")]
    #[schema(value_type = String)]
    pub isbn: i64,
    pub title: String,
    pub author: NameRef,
    pub publication_year_month: String,
}

impl From<BookListRow> for BookSummary {
    fn from(row: BookListRow) -> Self {
        BookSummary {
            isbn: row.isbn,
            title: row.title,
            author: NameRef {
                name: row.author_name,
            },
            publication_year_month: year_month(row.publication_year, row.publication_month),
        }
    }
}

/// Internal row for detail queries (book joined with author and publisher)
#[derive(Debug, Clone, FromRow)]
pub struct BookDetailRow {
    pub isbn: i64,
    pub title: String,
    pub author_name: String,
    pub publisher_name: String,
    pub publication_year: i32,
    pub publication_month: i32,
}

/// Denormalized book detail view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetail {
    #[serde(with = "isbn_serde")]
    #[schema(value_type = String)]
    pub isbn: i64,
    pub title: String,
    pub author: NameRef,
    pub publisher: NameRef,
    pub publication_year_month: String,
}

impl From<BookDetailRow> for BookDetail {
    fn from(row: BookDetailRow) -> Self {
        BookDetail {
            isbn: row.isbn,
            title: row.title,
            author: NameRef {
                name: row.author_name,
            },
            publisher: NameRef {
                name: row.publisher_name,
            },
            publication_year_month: year_month(row.publication_year, row.publication_month),
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(with = "isbn_serde")]
    #[schema(value_type = String)]
    pub isbn: i64,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub author_id: Uuid,
    pub publisher_id: Uuid,
    pub publication_year: i32,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub publication_month: i32,
}

/// Update book request (full overwrite)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub author_id: Uuid,
    pub publisher_id: Uuid,
    pub publication_year: i32,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub publication_month: i32,
}

/// Catalog list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookListQuery {
    pub page: Option<i64>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<i64>,
}

/// One page of the catalog
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListPage {
    pub current: i64,
    pub last_page: i64,
    pub total: i64,
    pub books: Vec<BookSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct IsbnHolder {
        #[serde(with = "isbn_serde")]
        isbn: i64,
    }

    #[test]
    fn isbn_serializes_as_string() {
        let v = serde_json::to_value(&IsbnHolder {
            isbn: 9784123456789,
        })
        .unwrap();
        assert_eq!(v, json!({ "isbn": "9784123456789" }));
    }

    #[test]
    fn isbn_accepts_string_and_integer_input() {
        let from_str: IsbnHolder = serde_json::from_value(json!({ "isbn": "9780000000001" })).unwrap();
        let from_int: IsbnHolder = serde_json::from_value(json!({ "isbn": 9780000000001i64 })).unwrap();
        assert_eq!(from_str.isbn, 9780000000001);
        assert_eq!(from_int.isbn, 9780000000001);
    }

    #[test]
    fn isbn_rejects_garbage() {
        let result: Result<IsbnHolder, _> = serde_json::from_value(json!({ "isbn": "97x" }));
        assert!(result.is_err());
    }

    #[test]
    fn year_month_pads_single_digit_months() {
        assert_eq!(year_month(2023, 7), "2023-07");
        assert_eq!(year_month(1999, 12), "1999-12");
    }
}
