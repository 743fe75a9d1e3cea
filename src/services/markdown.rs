//! Markdown table of contents
//!
//! Builds the flat heading list shown next to an article. Only ATX headings
//! (`#` through `######`) are recognized, one per line; setext headings and
//! code fences are not interpreted.
//!
//! # Example
//!
//! ```
//! use jotpad::services::markdown::extract_toc;
//!
//! let toc = extract_toc("# Hello World\n\nSome text.\n## Details");
//! assert_eq!(toc[0].id, "hello-world");
//! assert_eq!(toc[1].level, 2);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));

static NON_ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid anchor filter regex"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// One heading in a table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level, 1 through 6
    pub level: u8,
    /// Heading text, trimmed
    pub text: String,
    /// Anchor id derived from the text
    pub id: String,
}

/// Extract the headings of a markdown document, top to bottom.
///
/// Headings whose anchor ids collide are all emitted unchanged, so a
/// document with two identical headings yields two identical ids.
pub fn extract_toc(markdown: &str) -> Vec<TocEntry> {
    markdown
        .lines()
        .filter_map(|line| {
            let caps = HEADING_RE.captures(line)?;
            let level = caps[1].len() as u8;
            let text = caps[2].trim().to_string();
            let id = heading_anchor(&text);
            Some(TocEntry { level, text, id })
        })
        .collect()
}

/// Derive the anchor id for a heading text.
///
/// Lowercases, drops everything except ASCII letters, digits and
/// whitespace, then joins the remaining words with hyphens.
///
/// Hyphens already in the text are dropped too, so `"a-b"` becomes `"ab"`.
/// A renderer whose slugger keeps hyphens will produce `"a-b"` for the same
/// heading, and links between the two will not match.
pub fn heading_anchor(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept = NON_ANCHOR_RE.replace_all(&lowered, "");
    WHITESPACE_RE.replace_all(&kept, "-").into_owned()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every line built as a heading shows up once, in order, at its level
        #[test]
        fn headings_preserved_in_order(
            headings in prop::collection::vec((1usize..=6, "[A-Za-z][A-Za-z0-9 ]{0,15}"), 0..10)
        ) {
            let doc: String = headings
                .iter()
                .map(|(level, text)| format!("{} {}\nparagraph\n", "#".repeat(*level), text))
                .collect();

            let toc = extract_toc(&doc);
            prop_assert_eq!(toc.len(), headings.len());
            for (entry, (level, text)) in toc.iter().zip(&headings) {
                prop_assert_eq!(entry.level as usize, *level);
                prop_assert_eq!(&entry.text, &text.trim().to_string());
            }
        }

        /// Anchor ids only ever contain lowercase letters, digits and hyphens
        #[test]
        fn anchor_alphabet(text in "\\PC{0,40}") {
            let id = heading_anchor(&text);
            prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
