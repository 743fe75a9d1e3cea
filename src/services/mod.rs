//! Services layer - Business logic
//!
//! This module contains the business logic of jotpad.
//! Services are responsible for:
//! - Implementing business rules
//! - Coordinating between repositories
//! - Handling validation and error cases
//!
//! `query` and `markdown` are pure functions with no store access.

pub mod article;
pub mod category;
pub mod markdown;
pub mod query;

pub use article::{ArticleService, ArticleServiceError};
pub use category::{CategoryService, CategoryServiceError};
pub use markdown::{extract_toc, heading_anchor, TocEntry};
pub use query::{
    derive_featured, derive_recent, derive_related, filter_by_category, sort_articles, SortOrder,
    ALL_CATEGORIES,
};
