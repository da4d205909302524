//! Keyword search endpoints for authors and publishers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{author::AuthorView, publisher::PublisherView},
};

/// Search query parameters
#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

impl SearchQuery {
    fn keyword(&self) -> AppResult<&str> {
        match self.keyword.as_deref() {
            Some(k) if !k.is_empty() => Ok(k),
            _ => Err(AppError::Validation("Keyword is required".to_string())),
        }
    }
}

/// Author search response
#[derive(Serialize, ToSchema)]
pub struct AuthorSearchResponse {
    pub authors: Vec<AuthorView>,
}

/// Publisher search response
#[derive(Serialize, ToSchema)]
pub struct PublisherSearchResponse {
    pub publishers: Vec<PublisherView>,
}

/// Search authors by name substring
#[utoipa::path(
    get,
    path = "/search/author",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching authors", body = AuthorSearchResponse),
        (status = 400, description = "Keyword missing")
    )
)]
pub async fn search_authors(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<AuthorSearchResponse>> {
    let keyword = query.keyword()?;
    let authors = state.services.admin.search_authors(keyword).await?;

    Ok(Json(AuthorSearchResponse {
        authors: authors.into_iter().map(Into::into).collect(),
    }))
}

/// Search publishers by name substring
#[utoipa::path(
    get,
    path = "/search/publisher",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching publishers", body = PublisherSearchResponse),
        (status = 400, description = "Keyword missing")
    )
)]
pub async fn search_publishers(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<PublisherSearchResponse>> {
    let keyword = query.keyword()?;
    let publishers = state.services.admin.search_publishers(keyword).await?;

    Ok(Json(PublisherSearchResponse {
        publishers: publishers.into_iter().map(Into::into).collect(),
    }))
}
