//! Content store
//!
//! This module provides the in-memory storage behind jotpad. The store is an
//! explicit object built once at start-up and handed to the services, so
//! every test can build its own isolated copy.
//!
//! # Concurrency
//!
//! Each repository call runs under its own lock and is atomic. Sequences of
//! calls are not: an update reads, merges, then writes back, and two updates
//! of the same record racing each other resolve last-write-wins.
//!
//! # Usage
//!
//! ```
//! use jotpad::config::ContentConfig;
//! use jotpad::db::create_store;
//!
//! let store = create_store(&ContentConfig::default());
//! ```

pub mod repositories;
pub mod seed;

use std::sync::Arc;

use crate::config::ContentConfig;
use repositories::{
    ArticleRepository, CategoryRepository, MemoryArticleRepository, MemoryCategoryRepository,
};

/// Handle to the article and category collections
#[derive(Clone)]
pub struct ContentStore {
    pub categories: Arc<dyn CategoryRepository>,
    pub articles: Arc<dyn ArticleRepository>,
}

impl ContentStore {
    /// A store holding the seed content
    pub fn seeded() -> Self {
        Self {
            categories: MemoryCategoryRepository::boxed(seed::categories()),
            articles: MemoryArticleRepository::boxed(seed::articles()),
        }
    }

    /// A store with no content at all
    pub fn empty() -> Self {
        Self {
            categories: MemoryCategoryRepository::boxed(Vec::new()),
            articles: MemoryArticleRepository::boxed(Vec::new()),
        }
    }
}

/// Build the content store described by the configuration
pub fn create_store(config: &ContentConfig) -> ContentStore {
    if config.seed {
        ContentStore::seeded()
    } else {
        ContentStore::empty()
    }
}
