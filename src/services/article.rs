//! Article service
//!
//! Implements business logic for article management:
//! - Create, read, update, delete articles
//! - Validation of required fields
//! - Resolving category names into category snapshots
//! - The derived views (listing, featured, recent, related, table of contents)

use anyhow::Context;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

use crate::db::repositories::{ArticleRepository, CategoryRepository};
use crate::models::{
    Article, Category, CategorySelection, CreateArticleInput, UpdateArticleInput, DEFAULT_IMAGE,
};
use crate::services::markdown::{extract_toc, TocEntry};
use crate::services::query::{self, SortOrder, ALL_CATEGORIES};

/// Error types for article service operations
#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    /// Article not found
    #[error("Article not found")]
    NotFound,

    /// Validation error
    #[error("{0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Article service for managing blog articles
pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    rng: Mutex<StdRng>,
}

impl ArticleService {
    /// Create a new article service
    ///
    /// Related-article picks are shuffled with an entropy-seeded generator.
    pub fn new(repo: Arc<dyn ArticleRepository>, category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self {
            repo,
            category_repo,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a new article service whose related-article picks are
    /// reproducible for a given seed
    pub fn with_seed(
        repo: Arc<dyn ArticleRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        seed: u64,
    ) -> Self {
        Self {
            repo,
            category_repo,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// List all articles in insertion order
    pub async fn list(&self) -> Result<Vec<Article>, ArticleServiceError> {
        self.repo
            .list()
            .await
            .context("Failed to list articles")
            .map_err(Into::into)
    }

    /// List articles filtered by category name and/or sorted.
    ///
    /// Without a category every article is kept; without a sort order the
    /// insertion order is kept.
    pub async fn query(
        &self,
        category: Option<&str>,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Article>, ArticleServiceError> {
        let articles = self.list().await?;
        let filtered = query::filter_by_category(&articles, category.unwrap_or(ALL_CATEGORIES));

        Ok(match sort {
            Some(order) => query::sort_articles(&filtered, order),
            None => filtered,
        })
    }

    /// Get article by ID
    ///
    /// # Errors
    /// - `NotFound` if no article has this id
    pub async fn get_by_id(&self, id: &str) -> Result<Article, ArticleServiceError> {
        tracing::debug!(id, "looking up article");
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get article by ID")?
            .ok_or(ArticleServiceError::NotFound)
    }

    /// Create a new article
    ///
    /// Missing `date` defaults to today, missing `image` to the stock cover,
    /// and categories that resolve to nothing become the uncategorized
    /// placeholder.
    ///
    /// # Errors
    /// - `ValidationError` if title, description or content is empty
    pub async fn create(&self, input: CreateArticleInput) -> Result<Article, ArticleServiceError> {
        if [&input.title, &input.description, &input.content]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ArticleServiceError::ValidationError(
                "Missing required fields".to_string(),
            ));
        }

        let categories = self.resolve_categories(input.categories).await?;
        let article = Article::new(
            input.title,
            input.description,
            input.content,
            input
                .date
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
            input.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            categories,
            input.is_featured.unwrap_or(false),
        );

        let created = self
            .repo
            .create(&article)
            .await
            .context("Failed to create article")?;

        tracing::info!(id = %created.id, title = %created.title, "article created");
        Ok(created)
    }

    /// Update an article
    ///
    /// Fields present in `input` overwrite the stored ones, the rest are kept.
    /// A category selection replaces the whole category list.
    ///
    /// # Errors
    /// - `NotFound` if the article doesn't exist
    /// - `ValidationError` if title, description or content would become empty
    pub async fn update(&self, id: &str, input: UpdateArticleInput) -> Result<Article, ArticleServiceError> {
        let mut article = self.get_by_id(id).await?;

        for (field, value) in [
            ("title", &input.title),
            ("description", &input.description),
            ("content", &input.content),
        ] {
            if value.as_ref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ArticleServiceError::ValidationError(format!(
                    "Article {} cannot be empty",
                    field
                )));
            }
        }

        if let Some(title) = input.title {
            article.title = title;
        }
        if let Some(description) = input.description {
            article.description = description;
        }
        if let Some(content) = input.content {
            article.content = content;
        }
        if let Some(date) = input.date {
            article.date = date;
        }
        if let Some(image) = input.image {
            article.image = image;
        }
        if let Some(is_featured) = input.is_featured {
            article.is_featured = is_featured;
        }
        if let Some(selection) = input.categories {
            let categories = self.resolve_categories(selection).await?;
            article.set_categories(categories);
        }
        article.touch();

        let updated = self
            .repo
            .update(&article)
            .await
            .context("Failed to update article")?
            .ok_or(ArticleServiceError::NotFound)?;

        tracing::info!(id, "article updated");
        Ok(updated)
    }

    /// Delete an article
    ///
    /// # Errors
    /// - `NotFound` if the article doesn't exist
    pub async fn delete(&self, id: &str) -> Result<(), ArticleServiceError> {
        let removed = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete article")?;

        if !removed {
            return Err(ArticleServiceError::NotFound);
        }

        tracing::info!(id, "article deleted");
        Ok(())
    }

    /// Articles flagged for the homepage carousel
    pub async fn featured(&self) -> Result<Vec<Article>, ArticleServiceError> {
        Ok(query::derive_featured(&self.list().await?))
    }

    /// The newest `limit` articles
    pub async fn recent(&self, exclude_featured: bool, limit: usize) -> Result<Vec<Article>, ArticleServiceError> {
        Ok(query::derive_recent(&self.list().await?, exclude_featured, limit))
    }

    /// Up to `limit` articles sharing a category with the given one
    ///
    /// # Errors
    /// - `NotFound` if the article doesn't exist
    pub async fn related(&self, id: &str, limit: usize) -> Result<Vec<Article>, ArticleServiceError> {
        let article = self.get_by_id(id).await?;
        let all = self.list().await?;

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Ok(query::derive_related(&article, &all, limit, &mut *rng))
    }

    /// Headings of the article's content
    ///
    /// # Errors
    /// - `NotFound` if the article doesn't exist
    pub async fn table_of_contents(&self, id: &str) -> Result<Vec<TocEntry>, ArticleServiceError> {
        let article = self.get_by_id(id).await?;
        Ok(extract_toc(&article.content))
    }

    /// Count stored articles
    pub async fn count(&self) -> Result<usize, ArticleServiceError> {
        self.repo
            .count()
            .await
            .context("Failed to count articles")
            .map_err(Into::into)
    }

    // ========================================================================
    // Private helper methods
    // ========================================================================

    /// Turn a category selection into category snapshots.
    ///
    /// Names are looked up in the category store and dropped when unknown;
    /// inline objects are taken as given. Duplicates (by id) are dropped. An
    /// empty result is left for `Article` to replace with the placeholder.
    async fn resolve_categories(
        &self,
        selection: CategorySelection,
    ) -> Result<Vec<Category>, ArticleServiceError> {
        let candidates: Vec<Category> = match selection {
            CategorySelection::Unspecified => Vec::new(),
            CategorySelection::Objects(refs) => refs.into_iter().map(Category::from).collect(),
            CategorySelection::Names(names) => {
                let mut found = Vec::with_capacity(names.len());
                for name in names {
                    match self
                        .category_repo
                        .get_by_name(&name)
                        .await
                        .context("Failed to resolve category")?
                    {
                        Some(category) => found.push(category),
                        None => tracing::debug!(name = %name, "unknown category name dropped"),
                    }
                }
                found
            }
        };

        let mut resolved: Vec<Category> = Vec::with_capacity(candidates.len());
        for category in candidates {
            if !resolved.iter().any(|c| c.id == category.id) {
                resolved.push(category);
            }
        }

        if resolved.is_empty() {
            tracing::debug!("no category resolved, filing as uncategorized");
        }
        Ok(resolved)
    }
}
