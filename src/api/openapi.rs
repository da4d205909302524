//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, books, health, search, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librarium API",
        version = "1.0.0",
        description = "Book Rental Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::register,
        users::login,
        users::refresh,
        users::rental_history,
        users::update_profile,
        // Books
        books::list_books,
        books::book_detail,
        books::checkout,
        books::return_book,
        // Admin
        admin::create_author,
        admin::update_author,
        admin::delete_author,
        admin::create_publisher,
        admin::update_publisher,
        admin::delete_publisher,
        admin::create_book,
        admin::update_book,
        admin::delete_book,
        // Search
        search::search_authors,
        search::search_publishers,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::PublicUser,
            crate::models::user::RegisterUser,
            crate::models::user::UpdateProfile,
            users::LoginRequest,
            users::LoginResponse,
            users::RefreshRequest,
            users::RefreshResponse,
            users::RentalHistoryResponse,
            // Books
            crate::models::book::Book,
            crate::models::book::BookSummary,
            crate::models::book::BookDetail,
            crate::models::book::BookListPage,
            crate::models::book::NameRef,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Rentals
            crate::models::rental::RentalLog,
            crate::models::rental::RentalBookRef,
            crate::models::rental::RentalHistoryEntry,
            books::CheckoutRequest,
            books::CheckoutResponse,
            books::ReturnRequest,
            books::ReturnResponse,
            // Authors & publishers
            crate::models::author::Author,
            crate::models::author::AuthorView,
            crate::models::author::CreateAuthor,
            crate::models::publisher::Publisher,
            crate::models::publisher::PublisherView,
            crate::models::publisher::CreatePublisher,
            search::AuthorSearchResponse,
            search::PublisherSearchResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "Accounts, authentication and rental history"),
        (name = "books", description = "Catalog browsing and rentals"),
        (name = "admin", description = "Author, publisher and book administration"),
        (name = "search", description = "Author and publisher keyword search")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
