//! Content repositories
//!
//! Repository pattern implementations for content storage.
//! Each repository handles CRUD operations for a specific entity.

pub mod article;
pub mod category;

pub use article::{ArticleRepository, MemoryArticleRepository};
pub use category::{CategoryRepository, MemoryCategoryRepository};
