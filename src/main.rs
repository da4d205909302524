//! Librarium Server - Book Rental Management System
//!
//! A Rust REST API server for book catalog browsing and rentals.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use librarium_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("librarium_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Librarium Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone(), config.catalog.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // User accounts
        .route("/user/register", post(api::users::register))
        .route("/user/login", post(api::users::login))
        .route("/user/refresh", post(api::users::refresh))
        .route("/user/rental-history", get(api::users::rental_history))
        .route("/user/profile", put(api::users::update_profile))
        // Catalog & rentals
        .route("/book/list", get(api::books::list_books))
        .route("/book/detail/:isbn", get(api::books::book_detail))
        .route("/book/rental", post(api::books::checkout))
        .route("/book/return", post(api::books::return_book))
        // Administration
        .route("/admin/author", post(api::admin::create_author))
        .route("/admin/author/:id", put(api::admin::update_author))
        .route("/admin/author/:id", delete(api::admin::delete_author))
        .route("/admin/publisher", post(api::admin::create_publisher))
        .route("/admin/publisher/:id", put(api::admin::update_publisher))
        .route("/admin/publisher/:id", delete(api::admin::delete_publisher))
        .route("/admin/book", post(api::admin::create_book))
        .route("/admin/book/:isbn", put(api::admin::update_book))
        .route("/admin/book/:isbn", delete(api::admin::delete_book))
        // Search
        .route("/search/author", get(api::search::search_authors))
        .route("/search/publisher", get(api::search::search_publishers))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
