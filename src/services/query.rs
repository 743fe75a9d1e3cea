//! Article queries
//!
//! Pure functions deriving the views the blog pages show from the full
//! article list: category tabs, sort orders, the featured carousel, the
//! recent list and the related-articles panel. Nothing here fails; an empty
//! or non-matching input yields an empty result.

use chrono::{DateTime, NaiveDate};
use feruca::Collator;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Article;

/// Category tab name that selects every article
pub const ALL_CATEGORIES: &str = "全部";

/// Default size of the recent-articles list
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Default size of the related-articles panel
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Sort orders offered by the article listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Latest `date` first
    #[default]
    Newest,
    /// Earliest `date` first
    Oldest,
    /// Title ascending
    Az,
    /// Title descending
    Za,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Az => "az",
            SortOrder::Za => "za",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "az" => Ok(SortOrder::Az),
            "za" => Ok(SortOrder::Za),
            other => Err(format!(
                "Unknown sort order '{}', expected newest, oldest, az or za",
                other
            )),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep the articles filed under the named category.
///
/// [`ALL_CATEGORIES`] keeps everything. Matching is exact and case-sensitive.
pub fn filter_by_category(articles: &[Article], category_name: &str) -> Vec<Article> {
    if category_name == ALL_CATEGORIES {
        return articles.to_vec();
    }

    articles
        .iter()
        .filter(|a| a.has_category_name(category_name))
        .cloned()
        .collect()
}

/// Sort a copy of the articles. Ties keep their input order.
///
/// Titles are ordered with the Unicode Collation Algorithm (CLDR root
/// collation), so case and accents only break ties between otherwise equal
/// titles and lowercase comes before uppercase.
pub fn sort_articles(articles: &[Article], order: SortOrder) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    match order {
        SortOrder::Newest => sorted.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date))),
        SortOrder::Oldest => sorted.sort_by(|a, b| parse_date(&a.date).cmp(&parse_date(&b.date))),
        SortOrder::Az | SortOrder::Za => {
            let mut collator = Collator::default();
            sorted.sort_by(|a, b| {
                let ordering = collator.collate(a.title.as_str(), b.title.as_str());
                if order == SortOrder::Za {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
    }
    sorted
}

/// Featured articles, in input order
pub fn derive_featured(articles: &[Article]) -> Vec<Article> {
    articles.iter().filter(|a| a.is_featured).cloned().collect()
}

/// The newest `limit` articles, leaving out featured ones when asked to
pub fn derive_recent(articles: &[Article], exclude_featured: bool, limit: usize) -> Vec<Article> {
    let candidates: Vec<Article> = articles
        .iter()
        .filter(|a| !(exclude_featured && a.is_featured))
        .cloned()
        .collect();

    let mut recent = sort_articles(&candidates, SortOrder::Newest);
    recent.truncate(limit);
    recent
}

/// Up to `limit` other articles sharing a category id with `article`.
///
/// The pick is shuffled with `rng`, so with more candidates than `limit`
/// different generators choose different subsets.
pub fn derive_related<R>(article: &Article, all: &[Article], limit: usize, rng: &mut R) -> Vec<Article>
where
    R: Rng + ?Sized,
{
    let mut candidates: Vec<Article> = all
        .iter()
        .filter(|other| other.id != article.id)
        .filter(|other| article.categories.iter().any(|c| other.has_category_id(c.id)))
        .cloned()
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(limit);
    candidates
}

/// Calendar date of an article's `date` field.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps. Anything else yields
/// `None`, which orders before every valid date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::models::{Category, DEFAULT_IMAGE};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn category(id: i64) -> Category {
        let mut c = Category::new(format!("c{}", id), String::new());
        c.id = id;
        c
    }

    /// Articles with pairwise distinct dates, in arbitrary order
    fn articles_strategy() -> impl Strategy<Value = Vec<Article>> {
        prop::collection::btree_set(0i64..5000, 0..12)
            .prop_map(|days| days.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
            .prop_flat_map(|days| {
                let n = days.len();
                (
                    Just(days),
                    prop::collection::vec(
                        ("[a-zA-Z]{1,8}", prop::collection::vec(1i64..5, 1..3), any::<bool>()),
                        n,
                    ),
                )
            })
            .prop_map(|(days, rows)| {
                let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid epoch");
                days.into_iter()
                    .zip(rows)
                    .enumerate()
                    .map(|(i, (day, (title, category_ids, featured)))| {
                        let date = epoch + chrono::Duration::days(day);
                        let mut a = Article::new(
                            title,
                            String::new(),
                            String::new(),
                            date.format("%Y-%m-%d").to_string(),
                            DEFAULT_IMAGE.to_string(),
                            category_ids.into_iter().map(category).collect(),
                            featured,
                        );
                        a.id = (i + 1).to_string();
                        a
                    })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn filter_all_is_identity(articles in articles_strategy()) {
            prop_assert_eq!(filter_by_category(&articles, ALL_CATEGORIES), articles);
        }

        #[test]
        fn newest_reversed_is_oldest(articles in articles_strategy()) {
            let mut newest = sort_articles(&articles, SortOrder::Newest);
            newest.reverse();
            prop_assert_eq!(newest, sort_articles(&articles, SortOrder::Oldest));
        }

        #[test]
        fn sort_is_a_permutation(articles in articles_strategy()) {
            let mut before: Vec<String> = articles.iter().map(|a| a.id.clone()).collect();
            let mut after: Vec<String> = sort_articles(&articles, SortOrder::Az)
                .into_iter()
                .map(|a| a.id)
                .collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn related_excludes_source_and_respects_limit(
            articles in articles_strategy(),
            limit in 0usize..5,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            for source in &articles {
                let related = derive_related(source, &articles, limit, &mut rng);
                prop_assert!(related.len() <= limit);
                prop_assert!(related.iter().all(|a| a.id != source.id));
                prop_assert!(related
                    .iter()
                    .all(|a| source.categories.iter().any(|c| a.has_category_id(c.id))));
            }
        }

        #[test]
        fn recent_is_bounded_and_unfeatured(articles in articles_strategy(), limit in 0usize..10) {
            let recent = derive_recent(&articles, true, limit);
            prop_assert!(recent.len() <= limit);
            prop_assert!(recent.iter().all(|a| !a.is_featured));
        }
    }
}
