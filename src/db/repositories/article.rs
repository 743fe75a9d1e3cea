//! Article repository
//!
//! Storage operations for articles.
//!
//! This module provides:
//! - `ArticleRepository` trait defining the interface for article data access
//! - `MemoryArticleRepository` keeping articles in process memory

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Article;

/// Article repository trait
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Create a new article, assigning its id
    async fn create(&self, article: &Article) -> Result<Article>;

    /// Get article by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<Article>>;

    /// List all articles in insertion order
    async fn list(&self) -> Result<Vec<Article>>;

    /// Write an article back by id; `None` if it no longer exists
    async fn update(&self, article: &Article) -> Result<Option<Article>>;

    /// Delete an article; `false` if it did not exist
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Count stored articles
    async fn count(&self) -> Result<usize>;
}

struct ArticleTable {
    rows: Vec<Article>,
    next_id: u64,
}

/// In-memory article repository.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after deletions.
pub struct MemoryArticleRepository {
    table: RwLock<ArticleTable>,
}

impl Default for MemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryArticleRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a repository holding the given records as-is.
    ///
    /// The id counter starts above the largest numeric id among them.
    pub fn with_records(articles: Vec<Article>) -> Self {
        let next_id = articles
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            table: RwLock::new(ArticleTable {
                rows: articles,
                next_id,
            }),
        }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(articles: Vec<Article>) -> Arc<dyn ArticleRepository> {
        Arc::new(Self::with_records(articles))
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn create(&self, article: &Article) -> Result<Article> {
        let mut table = self.table.write().await;

        // Skip over ids a caller may have planted through `with_records`
        let mut id = table.next_id;
        while table.rows.iter().any(|a| a.id == id.to_string()) {
            id += 1;
        }
        table.next_id = id + 1;

        let mut created = article.clone();
        created.id = id.to_string();
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Article>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Article>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn update(&self, article: &Article) -> Result<Option<Article>> {
        let mut table = self.table.write().await;
        match table.rows.iter_mut().find(|a| a.id == article.id) {
            Some(slot) => {
                *slot = article.clone();
                Ok(Some(article.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut table = self.table.write().await;
        match table.rows.iter().position(|a| a.id == id) {
            Some(index) => {
                table.rows.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.table.read().await.rows.len())
    }
}
