//! Catalog browsing and rental endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{isbn_serde, BookDetail, BookListPage, BookListQuery},
};

use super::{parse_isbn, AuthenticatedUser};

/// Checkout request. `bookIsbn` and the historical `book_id` spelling are
/// accepted alongside the canonical `book_isbn`.
#[derive(Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[serde(alias = "bookIsbn", alias = "book_id", with = "isbn_serde")]
    #[schema(value_type = String)]
    pub book_isbn: i64,
}

/// Checkout response
#[derive(Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub id: Uuid,
    #[serde(with = "isbn_serde")]
    #[schema(value_type = String)]
    pub book_isbn: i64,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

/// Return request
#[derive(Deserialize, ToSchema)]
pub struct ReturnRequest {
    #[serde(alias = "rentalId", alias = "id")]
    pub rental_id: Uuid,
}

/// Return response
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub id: Uuid,
    pub returned_date: DateTime<Utc>,
}

/// List the catalog, paginated, newest publication first
#[utoipa::path(
    get,
    path = "/book/list",
    tag = "books",
    params(BookListQuery),
    responses(
        (status = 200, description = "One page of the catalog", body = BookListPage),
        (status = 400, description = "Page below 1")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookListQuery>,
) -> AppResult<Json<BookListPage>> {
    let page = state.services.catalog.list_books(&query).await?;
    Ok(Json(page))
}

/// Get book detail by ISBN
#[utoipa::path(
    get,
    path = "/book/detail/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book detail", body = BookDetail),
        (status = 400, description = "Malformed ISBN"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn book_detail(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookDetail>> {
    let isbn = parse_isbn(&isbn)?;
    let detail = state.services.catalog.book_detail(isbn).await?;
    Ok(Json(detail))
}

/// Check out a book
#[utoipa::path(
    post,
    path = "/book/rental",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Rental opened", body = CheckoutResponse),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is already on loan")
    )
)]
pub async fn checkout(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    let rental = state
        .services
        .rentals
        .checkout(claims.user_id, request.book_isbn)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            id: rental.id,
            book_isbn: rental.book_isbn,
            checkout_date: rental.checkout_date,
            due_date: rental.due_date,
        }),
    ))
}

/// Return a checked-out book
#[utoipa::path(
    post,
    path = "/book/return",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Rental closed", body = ReturnResponse),
        (status = 403, description = "Rental belongs to another user"),
        (status = 404, description = "Rental not found"),
        (status = 409, description = "Rental already returned")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let rental = state
        .services
        .rentals
        .return_rental(request.rental_id, claims.user_id)
        .await?;

    // mark_returned always sets the date; missing here would be a bug
    let returned_date = rental
        .returned_date
        .ok_or_else(|| crate::error::AppError::Internal("Returned rental has no date".to_string()))?;

    Ok(Json(ReturnResponse {
        id: rental.id,
        returned_date,
    }))
}
