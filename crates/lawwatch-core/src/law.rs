//! Law records as served by the backend, with ordering and category helpers.

use std::collections::BTreeSet;

use serde::Deserialize;

/// A single law record from the backend.
///
/// Every field is optional on the wire: missing fields deserialize to empty
/// strings, and the display helpers substitute placeholders rather than
/// failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Law {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// ISO 8601 timestamp string.
    #[serde(default)]
    pub created_at: String,
}

/// Envelope for the laws-listing endpoint: `{"laws": [...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct LawsEnvelope {
    #[serde(default)]
    pub laws: Vec<Law>,
}

/// Envelope for the search endpoint: `{"results": [...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub results: Vec<Law>,
}

impl Law {
    /// One-line summary: `name (category)`.
    pub fn headline(&self) -> String {
        format!("{} ({})", self.display_name(), self.category)
    }

    /// Full display line: `[created_at] name: description`.
    pub fn detail_line(&self) -> String {
        let description = if self.description.is_empty() {
            "No description"
        } else {
            &self.description
        };
        format!("[{}] {}: {}", self.created_at, self.display_name(), description)
    }

    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }
}

/// Sort laws newest first by `created_at`.
///
/// Lexicographic comparison is order-preserving for same-format ISO 8601
/// strings; the sort is stable, so backend order breaks ties.
pub fn sort_newest_first(laws: &mut [Law]) {
    laws.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Derive the sorted set of distinct non-empty categories.
pub fn distinct_categories(laws: &[Law]) -> Vec<String> {
    let set: BTreeSet<&str> = laws
        .iter()
        .map(|law| law.category.as_str())
        .filter(|category| !category.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
