//! Scoped substring search over a record collection

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Which fields a search compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// All four stored fields
    #[default]
    All,
    /// Term only
    Term,
    /// Definition only
    Definition,
    /// Category only
    Category,
}

impl std::fmt::Display for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Term => write!(f, "term"),
            Self::Definition => write!(f, "definition"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// Filter a collection by case-insensitive substring containment
///
/// The needle is trimmed and lowercased; each candidate field is lowercased
/// before comparison. An empty needle returns the whole collection in its
/// original order ("browse all"); a non-empty needle with no match returns
/// an empty vec. A record matches if any field in scope contains the
/// needle; the first matching field suffices. Relative order is preserved
/// and no ranking is applied.
pub fn search(records: &[Record], term: &str, scope: SearchScope) -> Vec<Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| record_matches(record, &needle, scope))
        .cloned()
        .collect()
}

fn record_matches(record: &Record, needle: &str, scope: SearchScope) -> bool {
    let candidates: &[&String] = match scope {
        SearchScope::All => &[
            &record.term,
            &record.definition,
            &record.category,
            &record.example,
        ],
        SearchScope::Term => &[&record.term],
        SearchScope::Definition => &[&record.definition],
        SearchScope::Category => &[&record.category],
    };

    candidates.iter().any(|field| field.to_lowercase().contains(needle))
}
