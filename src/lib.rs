//! Librarium Book Rental Management System
//!
//! A Rust implementation of the Librarium book rental server, providing a
//! REST JSON API for browsing a book catalog, renting and returning books,
//! and administering authors, publishers and the catalog itself.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
