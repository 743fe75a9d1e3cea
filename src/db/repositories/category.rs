//! Category repository
//!
//! Storage operations for categories.
//!
//! This module provides:
//! - `CategoryRepository` trait defining the interface for category data access
//! - `MemoryCategoryRepository` keeping categories in process memory

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Category;

/// Category repository trait
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category, assigning its id
    async fn create(&self, category: &Category) -> Result<Category>;

    /// Get category by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>>;

    /// Get the first category with the given name
    async fn get_by_name(&self, name: &str) -> Result<Option<Category>>;

    /// List all categories in insertion order
    async fn list(&self) -> Result<Vec<Category>>;

    /// Write a category back by id; `None` if it no longer exists
    async fn update(&self, category: &Category) -> Result<Option<Category>>;

    /// Delete a category; `false` if it did not exist
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// In-memory category repository.
///
/// Ids are `max(existing) + 1`, so the id of a deleted category with the
/// highest id is handed out again.
#[derive(Default)]
pub struct MemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl MemoryCategoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given records as-is
    pub fn with_records(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(categories: Vec<Category>) -> Arc<dyn CategoryRepository> {
        Arc::new(Self::with_records(categories))
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn create(&self, category: &Category) -> Result<Category> {
        let mut categories = self.categories.write().await;
        let next_id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;

        let mut created = category.clone();
        created.id = next_id;
        categories.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.categories.read().await.clone())
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>> {
        let mut categories = self.categories.write().await;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category.clone();
                Ok(Some(category.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut categories = self.categories.write().await;
        match categories.iter().position(|c| c.id == id) {
            Some(index) => {
                categories.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
