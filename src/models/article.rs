//! Article model
//!
//! This module provides:
//! - `Article` entity representing a blog post
//! - `CategorySelection` describing how a request names an article's categories
//! - Input types for creating and updating articles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Image used when an article is created without one
pub const DEFAULT_IMAGE: &str = "/images/yellow.jpeg";

/// Article entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Unique identifier, assigned by the store
    pub id: String,
    /// Article title
    pub title: String,
    /// Short summary shown on cards
    pub description: String,
    /// Markdown content
    pub content: String,
    /// Publication date (`YYYY-MM-DD`), independent of `created_at`
    pub date: String,
    /// Cover image path or URL
    pub image: String,
    /// Category snapshots, never empty
    pub categories: Vec<Category>,
    /// Whether the article is shown in the homepage carousel
    #[serde(default)]
    pub is_featured: bool,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article.
    ///
    /// The ID will be empty and should be assigned by the store. An empty
    /// category list is replaced with the uncategorized placeholder.
    pub fn new(
        title: String,
        description: String,
        content: String,
        date: String,
        image: String,
        categories: Vec<Category>,
        is_featured: bool,
    ) -> Self {
        let now = Utc::now();
        let mut article = Self {
            id: String::new(),
            title,
            description,
            content,
            date,
            image,
            categories: Vec::new(),
            is_featured,
            created_at: now,
            updated_at: now,
        };
        article.set_categories(categories);
        article
    }

    /// Replace the category list wholesale, keeping it non-empty.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = if categories.is_empty() {
            vec![Category::uncategorized()]
        } else {
            categories
        };
    }

    /// Check whether the article carries a category with the given id
    pub fn has_category_id(&self, id: i64) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Check whether the article carries a category with the given name
    pub fn has_category_name(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Stamp `updated_at` for a mutation.
    pub fn touch(&mut self) {
        self.updated_at = super::next_timestamp(self.updated_at);
    }
}

/// A category object supplied inline by a client.
///
/// Only `id` is mandatory; the rest is filled in when the snapshot is taken.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CategoryRef> for Category {
    fn from(r: CategoryRef) -> Self {
        let now = Utc::now();
        Category {
            id: r.id,
            name: r.name,
            description: r.description.unwrap_or_default(),
            created_at: r.created_at.unwrap_or(now),
            updated_at: r.updated_at.unwrap_or(now),
        }
    }
}

/// How a request identifies an article's categories.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategorySelection {
    /// No categories supplied
    #[default]
    Unspecified,
    /// Category names to look up in the category store
    Names(Vec<String>),
    /// Category objects taken over as given
    Objects(Vec<CategoryRef>),
}

impl CategorySelection {
    /// Select categories by a single name
    pub fn name(name: impl Into<String>) -> Self {
        Self::Names(vec![name.into()])
    }

    /// Select categories by several names
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }
}

/// Input for creating a new article
#[derive(Debug, Clone, Default)]
pub struct CreateArticleInput {
    pub title: String,
    pub description: String,
    pub content: String,
    /// Publication date (defaults to today)
    pub date: Option<String>,
    /// Cover image (defaults to [`DEFAULT_IMAGE`])
    pub image: Option<String>,
    pub categories: CategorySelection,
    pub is_featured: Option<bool>,
}

impl CreateArticleInput {
    /// Create a new CreateArticleInput with the required fields
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set the publication date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the categories
    pub fn with_categories(mut self, categories: CategorySelection) -> Self {
        self.categories = categories;
        self
    }

    /// Set the featured flag
    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }
}

/// Input for updating an article.
///
/// Fields left as `None` keep their current value; a supplied category
/// selection replaces the whole list.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub categories: Option<CategorySelection>,
    pub is_featured: Option<bool>,
}

impl UpdateArticleInput {
    /// Create an empty update input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the categories
    pub fn with_categories(mut self, categories: CategorySelection) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Set the featured flag
    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_with(categories: Vec<Category>) -> Article {
        Article::new(
            "旅行的意义".to_string(),
            "记录一些旅行中的感悟与美景。".to_string(),
            "# 出发".to_string(),
            "2025-03-18".to_string(),
            DEFAULT_IMAGE.to_string(),
            categories,
            false,
        )
    }

    #[test]
    fn test_article_new_falls_back_to_uncategorized() {
        let article = article_with(Vec::new());

        assert_eq!(article.categories.len(), 1);
        assert!(article.categories[0].is_uncategorized());
        assert!(article.id.is_empty());
    }

    #[test]
    fn test_article_category_lookups() {
        let mut travel = Category::new("旅行".to_string(), String::new());
        travel.id = 2;
        let article = article_with(vec![travel]);

        assert!(article.has_category_id(2));
        assert!(!article.has_category_id(3));
        assert!(article.has_category_name("旅行"));
        assert!(!article.has_category_name("技术"));
    }

    #[test]
    fn test_set_categories_replaces_wholesale() {
        let mut a = Category::new("A".to_string(), String::new());
        a.id = 1;
        let mut b = Category::new("B".to_string(), String::new());
        b.id = 2;
        let mut article = article_with(vec![a]);

        article.set_categories(vec![b.clone()]);
        assert_eq!(article.categories, vec![b]);

        article.set_categories(Vec::new());
        assert!(article.categories[0].is_uncategorized());
    }

    #[test]
    fn test_category_ref_fills_missing_fields() {
        let r: CategoryRef = serde_json::from_str(r#"{"id": 7, "name": "音乐"}"#).unwrap();
        let category: Category = r.into();

        assert_eq!(category.id, 7);
        assert_eq!(category.name, "音乐");
        assert_eq!(category.description, "");
    }

    #[test]
    fn test_article_json_shape() {
        let value = serde_json::to_value(article_with(Vec::new())).unwrap();

        assert!(value.get("is_featured").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value["categories"].is_array());
    }
}
