//! Category model
//!
//! This module defines the Category entity and related types for the jotpad blog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the placeholder category attached to articles whose
/// categories could not be resolved.
pub const UNCATEGORIZED_ID: i64 = 99;

/// Display name of the placeholder category.
pub const UNCATEGORIZED_NAME: &str = "未分类";

/// Category entity grouping articles under a name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Category name
    pub name: String,
    /// Category description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new Category with the given parameters.
    ///
    /// The ID will be set to 0 and should be assigned by the store.
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// The placeholder category used when none of an article's categories resolve.
    pub fn uncategorized() -> Self {
        let mut category = Self::new(UNCATEGORIZED_NAME.to_string(), String::new());
        category.id = UNCATEGORIZED_ID;
        category
    }

    /// Check if this is the placeholder "uncategorized" category
    pub fn is_uncategorized(&self) -> bool {
        self.id == UNCATEGORIZED_ID && self.name == UNCATEGORIZED_NAME
    }

    /// Stamp `updated_at` for a mutation.
    pub fn touch(&mut self) {
        self.updated_at = super::next_timestamp(self.updated_at);
    }
}

/// Input for creating a new category
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// Category name
    pub name: String,
    /// Category description
    pub description: Option<String>,
}

impl CreateCategoryInput {
    /// Create a new category input with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Input for updating a category.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryInput {
    /// New name (optional)
    pub name: Option<String>,
    /// New description (optional)
    pub description: Option<String>,
}

impl UpdateCategoryInput {
    /// Create an empty update input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the input carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
