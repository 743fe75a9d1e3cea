//! Category service
//!
//! Implements business logic for category management:
//! - Create, read, update, delete categories
//! - Name validation
//!
//! Deleting a category does not touch the articles that embed it; articles
//! hold their own snapshot of each category.

use anyhow::Context;
use std::sync::Arc;

use crate::db::repositories::CategoryRepository;
use crate::models::{Category, CreateCategoryInput, UpdateCategoryInput};

/// Error types for category service operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryServiceError {
    /// Category not found
    #[error("Category not found")]
    NotFound,

    /// Validation error
    #[error("{0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Category service for managing blog categories
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Create a new category service
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// List all categories in insertion order
    pub async fn list(&self) -> Result<Vec<Category>, CategoryServiceError> {
        self.repo
            .list()
            .await
            .context("Failed to list categories")
            .map_err(Into::into)
    }

    /// Get category by ID
    ///
    /// # Errors
    /// - `NotFound` if no category has this id
    pub async fn get_by_id(&self, id: i64) -> Result<Category, CategoryServiceError> {
        tracing::debug!(id, "looking up category");
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get category by ID")?
            .ok_or(CategoryServiceError::NotFound)
    }

    /// Create a new category
    ///
    /// The id is one above the largest existing id; the description defaults
    /// to an empty string.
    ///
    /// # Errors
    /// - `ValidationError` if the name is empty
    pub async fn create(&self, input: CreateCategoryInput) -> Result<Category, CategoryServiceError> {
        if input.name.trim().is_empty() {
            return Err(CategoryServiceError::ValidationError(
                "Category name is required".to_string(),
            ));
        }

        let category = Category::new(input.name, input.description.unwrap_or_default());
        let created = self
            .repo
            .create(&category)
            .await
            .context("Failed to create category")?;

        tracing::info!(id = created.id, name = %created.name, "category created");
        Ok(created)
    }

    /// Update a category
    ///
    /// Fields present in `input` overwrite the stored ones, the rest are kept.
    /// `updated_at` moves forward even when `input` is empty.
    ///
    /// # Errors
    /// - `NotFound` if the category doesn't exist
    /// - `ValidationError` if the new name is empty
    pub async fn update(&self, id: i64, input: UpdateCategoryInput) -> Result<Category, CategoryServiceError> {
        let mut category = self.get_by_id(id).await?;

        if let Some(name) = input.name {
            if name.trim().is_empty() {
                return Err(CategoryServiceError::ValidationError(
                    "Category name cannot be empty".to_string(),
                ));
            }
            category.name = name;
        }
        if let Some(description) = input.description {
            category.description = description;
        }
        category.touch();

        let updated = self
            .repo
            .update(&category)
            .await
            .context("Failed to update category")?
            .ok_or(CategoryServiceError::NotFound)?;

        tracing::info!(id, "category updated");
        Ok(updated)
    }

    /// Delete a category
    ///
    /// # Errors
    /// - `NotFound` if the category doesn't exist
    pub async fn delete(&self, id: i64) -> Result<(), CategoryServiceError> {
        let removed = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete category")?;

        if !removed {
            return Err(CategoryServiceError::NotFound);
        }

        tracing::info!(id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::MemoryCategoryRepository;
    use crate::db::seed;

    fn setup_test_service() -> CategoryService {
        CategoryService::new(MemoryCategoryRepository::boxed(seed::categories()))
    }

    fn setup_empty_service() -> CategoryService {
        CategoryService::new(MemoryCategoryRepository::boxed(Vec::new()))
    }

    #[tokio::test]
    async fn test_list_categories() {
        let service = setup_test_service();
        let names: Vec<String> = service.list().await.unwrap().into_iter().map(|c| c.name).collect();

        assert_eq!(names, vec!["个人日记", "旅行", "技术", "摄影", "读书"]);
    }

    #[tokio::test]
    async fn test_create_category_success() {
        let service = setup_test_service();

        let input = CreateCategoryInput::new("Test").with_description("A test category");
        let category = service.create(input).await.expect("Failed to create category");

        assert_eq!(category.id, 6);
        assert_eq!(category.name, "Test");
        assert_eq!(category.description, "A test category");
        assert_eq!(category.created_at, category.updated_at);
    }

    #[tokio::test]
    async fn test_create_category_defaults_description() {
        let service = setup_empty_service();

        let category = service.create(CreateCategoryInput::new("Solo")).await.unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(category.description, "");
    }

    #[tokio::test]
    async fn test_create_category_empty_name_fails() {
        let service = setup_test_service();

        let result = service.create(CreateCategoryInput::new("   ")).await;
        assert!(matches!(result, Err(CategoryServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_ids_never_collide() {
        let service = setup_test_service();
        let before: Vec<i64> = service.list().await.unwrap().iter().map(|c| c.id).collect();

        let created = service.create(CreateCategoryInput::new("New")).await.unwrap();
        assert!(!before.contains(&created.id));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let service = setup_test_service();

        let result = service.get_by_id(999).await;
        assert!(matches!(result, Err(CategoryServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_category_name() {
        let service = setup_test_service();

        let updated = service
            .update(3, UpdateCategoryInput::new().with_name("Tech"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Tech");
        assert_eq!(updated.description, "编程、开发和技术学习相关内容");
        assert_eq!(service.get_by_id(3).await.unwrap().name, "Tech");
    }

    #[tokio::test]
    async fn test_update_empty_input_only_touches_timestamp() {
        let service = setup_test_service();
        let before = service.get_by_id(2).await.unwrap();

        let after = service.update(2, UpdateCategoryInput::new()).await.unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_eq!(after.description, before.description);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn test_update_twice_keeps_increasing() {
        let service = setup_test_service();

        let first = service.update(1, UpdateCategoryInput::new()).await.unwrap();
        let second = service.update(1, UpdateCategoryInput::new()).await.unwrap();
        assert!(second.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn test_update_category_not_found() {
        let service = setup_test_service();

        let result = service.update(999, UpdateCategoryInput::new().with_name("x")).await;
        assert!(matches!(result, Err(CategoryServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_empty_name_fails() {
        let service = setup_test_service();

        let result = service.update(1, UpdateCategoryInput::new().with_name("")).await;
        assert!(matches!(result, Err(CategoryServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let service = setup_test_service();

        service.delete(4).await.unwrap();
        assert!(matches!(service.get_by_id(4).await, Err(CategoryServiceError::NotFound)));
        assert!(matches!(service.delete(4).await, Err(CategoryServiceError::NotFound)));
    }
}
