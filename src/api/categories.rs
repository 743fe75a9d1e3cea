//! Category API endpoints
//!
//! Handles HTTP requests for category management:
//! - GET /api/categories - List categories, or one with `?id=`
//! - POST /api/categories - Create a category
//! - PUT /api/categories?id= - Update a category
//! - DELETE /api/categories?id= - Delete a category

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::common::{parse_body, IdQuery, MessageResponse};
use crate::api::middleware::{ApiError, AppState};
use crate::models::{CreateCategoryInput, UpdateCategoryInput};

/// Request body for creating a category
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for updating a category; other fields are ignored
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateCategoryRequest> for UpdateCategoryInput {
    fn from(req: UpdateCategoryRequest) -> Self {
        UpdateCategoryInput {
            name: req.name,
            description: req.description,
        }
    }
}

/// Build the category router
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_categories)
            .post(create_category)
            .put(update_category)
            .delete(delete_category),
    )
}

/// Category ids arrive as query strings; one that is not a number names no category.
fn parse_category_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::not_found("Category not found"))
}

fn required_id(query: &IdQuery) -> Result<i64, ApiError> {
    let raw = query
        .id()
        .ok_or_else(|| ApiError::validation_error("Category ID is required"))?;
    parse_category_id(raw)
}

/// GET /api/categories
async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, ApiError> {
    if let Some(raw) = query.id() {
        let id = parse_category_id(raw)?;
        let category = state.category_service.get_by_id(id).await?;
        return Ok(Json(category).into_response());
    }

    let categories = state.category_service.list().await?;
    Ok(Json(categories).into_response())
}

/// POST /api/categories
async fn create_category(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: CreateCategoryRequest = parse_body(&body)?;

    let name = req
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::validation_error("Category name is required"))?;

    let mut input = CreateCategoryInput::new(name);
    input.description = req.description;

    let category = state.category_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories?id=
async fn update_category(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = required_id(&query)?;
    let req: UpdateCategoryRequest = parse_body(&body)?;

    let category = state.category_service.update(id, req.into()).await?;
    Ok(Json(category))
}

/// DELETE /api/categories?id=
async fn delete_category(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = required_id(&query)?;

    state.category_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
