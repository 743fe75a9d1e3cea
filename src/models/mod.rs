//! Data models
//!
//! This module contains the data structures used throughout jotpad:
//! - Content entities (Article, Category)
//! - Create/update inputs handed to the services

mod article;
mod category;

use chrono::{DateTime, Duration, Utc};

pub use article::{
    Article, CategoryRef, CategorySelection, CreateArticleInput, UpdateArticleInput, DEFAULT_IMAGE,
};
pub use category::{
    Category, CreateCategoryInput, UpdateCategoryInput, UNCATEGORIZED_ID, UNCATEGORIZED_NAME,
};

/// Timestamp for a mutation of a record last updated at `previous`.
///
/// Always later than `previous`, even when the clock has not moved.
pub(crate) fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
