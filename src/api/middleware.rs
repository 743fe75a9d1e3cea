//! Shared handler plumbing
//!
//! Contains:
//! - `AppState`, the services handed to every handler
//! - `ApiError`, the error type every handler returns

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ContentConfig;
use crate::db::ContentStore;
use crate::services::{ArticleService, ArticleServiceError, CategoryService, CategoryServiceError};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub article_service: Arc<ArticleService>,
    pub content: Arc<ContentConfig>,
}

impl AppState {
    /// Wire the services over a content store
    pub fn new(store: ContentStore, content: ContentConfig) -> Self {
        let article_service = match content.related_seed {
            Some(seed) => ArticleService::with_seed(store.articles, store.categories.clone(), seed),
            None => ArticleService::new(store.articles, store.categories.clone()),
        };

        Self {
            category_service: Arc::new(CategoryService::new(store.categories)),
            article_service: Arc::new(article_service),
            content: Arc::new(content),
        }
    }
}

/// Error response body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by API handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A body that could not be parsed at all
    pub fn malformed_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body")
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, message = %self.message, "request rejected");
        }

        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<CategoryServiceError> for ApiError {
    fn from(e: CategoryServiceError) -> Self {
        match e {
            CategoryServiceError::NotFound => ApiError::not_found("Category not found"),
            CategoryServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            CategoryServiceError::InternalError(e) => ApiError::internal_error(e.to_string()),
        }
    }
}

impl From<ArticleServiceError> for ApiError {
    fn from(e: ArticleServiceError) -> Self {
        match e {
            ArticleServiceError::NotFound => ApiError::not_found("Article not found"),
            ArticleServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            ArticleServiceError::InternalError(e) => ApiError::internal_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_status() {
        let not_found: ApiError = ArticleServiceError::NotFound.into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "Article not found");

        let invalid: ApiError = CategoryServiceError::ValidationError("Category name is required".into()).into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

        let internal: ApiError = CategoryServiceError::InternalError(anyhow::anyhow!("boom")).into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_malformed_request_is_bad_request() {
        let err = ApiError::malformed_request();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid request body");
    }
}
