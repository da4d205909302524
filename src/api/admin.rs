//! Administration endpoints for authors, publishers and books

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        author::{AuthorView, CreateAuthor},
        book::{Book, CreateBook, UpdateBook},
        publisher::{CreatePublisher, PublisherView},
    },
};
use uuid::Uuid;

use super::{parse_isbn, AdminUser};

// -- Authors ----------------------------------------------------------------

/// Register an author
#[utoipa::path(
    post,
    path = "/admin/author",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorView),
        (status = 400, description = "Name missing or blank"),
        (status = 403, description = "Admin privilege required")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Json(request): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<AuthorView>)> {
    let author = state.services.admin.create_author(request).await?;
    Ok((StatusCode::CREATED, Json(author.into())))
}

/// Overwrite an author's name
#[utoipa::path(
    put,
    path = "/admin/author/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Author ID")),
    request_body = CreateAuthor,
    responses(
        (status = 200, description = "Author updated", body = AuthorView),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateAuthor>,
) -> AppResult<Json<AuthorView>> {
    let author = state.services.admin.update_author(id, request).await?;
    Ok(Json(author.into()))
}

/// Soft-delete an author
#[utoipa::path(
    delete,
    path = "/admin/author/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.admin.delete_author(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Publishers -------------------------------------------------------------

/// Register a publisher
#[utoipa::path(
    post,
    path = "/admin/publisher",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = PublisherView),
        (status = 400, description = "Name missing or blank"),
        (status = 403, description = "Admin privilege required")
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Json(request): Json<CreatePublisher>,
) -> AppResult<(StatusCode, Json<PublisherView>)> {
    let publisher = state.services.admin.create_publisher(request).await?;
    Ok((StatusCode::CREATED, Json(publisher.into())))
}

/// Overwrite a publisher's name
#[utoipa::path(
    put,
    path = "/admin/publisher/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Publisher ID")),
    request_body = CreatePublisher,
    responses(
        (status = 200, description = "Publisher updated", body = PublisherView),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn update_publisher(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<CreatePublisher>,
) -> AppResult<Json<PublisherView>> {
    let publisher = state.services.admin.update_publisher(id, request).await?;
    Ok(Json(publisher.into()))
}

/// Soft-delete a publisher
#[utoipa::path(
    delete,
    path = "/admin/publisher/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Publisher ID")),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.admin.delete_publisher(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Books ------------------------------------------------------------------

/// Register a book
#[utoipa::path(
    post,
    path = "/admin/book",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Author or publisher not found"),
        (status = 409, description = "ISBN already registered")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.admin.create_book(request).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Overwrite a book's fields
#[utoipa::path(
    put,
    path = "/admin/book/{isbn}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book, author or publisher not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(isbn): Path<String>,
    Json(request): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let isbn = parse_isbn(&isbn)?;
    let book = state.services.admin.update_book(isbn, request).await?;
    Ok(Json(book))
}

/// Soft-delete a book
#[utoipa::path(
    delete,
    path = "/admin/book/{isbn}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AdminUser(_claims): AdminUser,
    Path(isbn): Path<String>,
) -> AppResult<StatusCode> {
    let isbn = parse_isbn(&isbn)?;
    state.services.admin.delete_book(isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}
