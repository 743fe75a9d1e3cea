//! Article API endpoints
//!
//! Handles HTTP requests for articles:
//! - GET /api/posts - List articles (`?category=`, `?sort=`), or one with `?id=`
//! - POST /api/posts - Create an article
//! - PUT /api/posts?id= - Update an article
//! - DELETE /api/posts?id= - Delete an article
//! - GET /api/posts/featured - Featured articles
//! - GET /api/posts/recent - Newest articles
//! - GET /api/posts/related?id= - Articles sharing a category
//! - GET /api/posts/toc?id= - Table of contents

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::common::{parse_body, IdQuery, MessageResponse};
use crate::api::middleware::{ApiError, AppState};
use crate::models::{CategoryRef, CategorySelection, CreateArticleInput, UpdateArticleInput};
use crate::services::SortOrder;

/// Query parameters for `GET /api/posts`
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub id: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters for `GET /api/posts/recent`
#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
    pub include_featured: Option<bool>,
}

/// Query parameters for `GET /api/posts/related`
#[derive(Debug, Default, Deserialize)]
pub struct RelatedQuery {
    pub id: Option<String>,
    pub limit: Option<usize>,
}

/// Request body for creating or updating an article.
///
/// `categories` may be an array of names, an array of category objects or a
/// single name; `category` is the older single-name form.
#[derive(Debug, Default, Deserialize)]
pub struct PostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub categories: Option<Value>,
    pub category: Option<Value>,
    pub is_featured: Option<bool>,
}

impl PostRequest {
    fn into_create_input(self) -> Result<CreateArticleInput, ApiError> {
        let categories = category_selection(self.categories, self.category)?.unwrap_or_default();

        Ok(CreateArticleInput {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            date: self.date.filter(|d| !d.is_empty()),
            image: self.image.filter(|i| !i.is_empty()),
            categories,
            is_featured: self.is_featured,
        })
    }

    fn into_update_input(self) -> Result<UpdateArticleInput, ApiError> {
        let categories = category_selection(self.categories, self.category)?;

        Ok(UpdateArticleInput {
            title: self.title,
            description: self.description,
            content: self.content,
            date: self.date,
            image: self.image,
            categories,
            is_featured: self.is_featured,
        })
    }
}

/// Work out which categories a request body names.
///
/// `None` means the body said nothing about categories. `categories` wins
/// over `category` unless it selects nothing.
fn category_selection(
    categories: Option<Value>,
    category: Option<Value>,
) -> Result<Option<CategorySelection>, ApiError> {
    let primary = categories.map(selection_from_value).transpose()?;

    match primary {
        Some(selection) if selection != CategorySelection::Unspecified => Ok(Some(selection)),
        _ => match category {
            Some(value) => selection_from_value(value).map(Some),
            None => Ok(primary),
        },
    }
}

fn selection_from_value(value: Value) -> Result<CategorySelection, ApiError> {
    match value {
        Value::Null => Ok(CategorySelection::Unspecified),
        Value::String(name) if name.is_empty() => Ok(CategorySelection::Unspecified),
        Value::String(name) => Ok(CategorySelection::name(name)),
        Value::Array(items) if items.is_empty() => Ok(CategorySelection::Unspecified),
        Value::Array(items) => {
            let as_objects = items
                .first()
                .and_then(Value::as_object)
                .is_some_and(|object| object.contains_key("id"));

            if as_objects {
                serde_json::from_value::<Vec<CategoryRef>>(Value::Array(items))
                    .map(CategorySelection::Objects)
                    .map_err(|_| ApiError::malformed_request())
            } else {
                Ok(CategorySelection::names(
                    items.iter().filter_map(Value::as_str).map(str::to_string),
                ))
            }
        }
        Value::Object(_) => serde_json::from_value::<CategoryRef>(value)
            .map(|r| CategorySelection::Objects(vec![r]))
            .map_err(|_| ApiError::malformed_request()),
        Value::Bool(_) | Value::Number(_) => Err(ApiError::malformed_request()),
    }
}

fn required_id(id: Option<&str>) -> Result<&str, ApiError> {
    id.filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::validation_error("Article ID is required"))
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|e| ApiError::validation_error(e.body_text()))
}

/// Build the article router
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_posts)
                .post(create_post)
                .put(update_post)
                .delete(delete_post),
        )
        .route("/featured", get(featured_posts))
        .route("/recent", get(recent_posts))
        .route("/related", get(related_posts))
        .route("/toc", get(table_of_contents))
}

/// GET /api/posts
async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let query = query_params(query)?;

    if let Some(id) = query.id.as_deref().filter(|id| !id.is_empty()) {
        let article = state.article_service.get_by_id(id).await?;
        return Ok(Json(article).into_response());
    }

    let sort = query
        .sort
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<SortOrder>)
        .transpose()
        .map_err(ApiError::validation_error)?;

    let articles = state
        .article_service
        .query(query.category.as_deref().filter(|c| !c.is_empty()), sort)
        .await?;
    Ok(Json(articles).into_response())
}

/// POST /api/posts
async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: PostRequest = parse_body(&body)?;
    let input = req.into_create_input()?;

    let article = state.article_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/posts?id=
async fn update_post(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = required_id(query.id())?;
    let req: PostRequest = parse_body(&body)?;
    let input = req.into_update_input()?;

    let article = state.article_service.update(id, input).await?;
    Ok(Json(article))
}

/// DELETE /api/posts?id=
async fn delete_post(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = required_id(query.id())?;

    state.article_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Article deleted successfully")))
}

/// GET /api/posts/featured
async fn featured_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.article_service.featured().await?))
}

/// GET /api/posts/recent
async fn recent_posts(
    State(state): State<AppState>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let query = query_params(query)?;
    let limit = query.limit.unwrap_or(state.content.recent_limit);
    let exclude_featured = !query.include_featured.unwrap_or(false);

    Ok(Json(state.article_service.recent(exclude_featured, limit).await?))
}

/// GET /api/posts/related?id=
async fn related_posts(
    State(state): State<AppState>,
    query: Result<Query<RelatedQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let query = query_params(query)?;
    let id = required_id(query.id.as_deref())?;
    let limit = query.limit.unwrap_or(state.content.related_limit);

    Ok(Json(state.article_service.related(id, limit).await?))
}

/// GET /api/posts/toc?id=
async fn table_of_contents(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = required_id(query.id())?;

    Ok(Json(state.article_service.table_of_contents(id).await?))
}
