//! Candidate list: the fixed, ordered set of strings the combobox can suggest.

pub mod candidates_render;
pub mod loader;

use std::ops::Deref;
use std::sync::Arc;

pub use loader::{CandidateSource, load_candidates, parse_candidates};

/// Items shown when no other source is available
pub const BUILTIN_ITEMS: &[&str] = &[
    "Apple",
    "Apricot",
    "Avocado",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cherry",
    "Coconut",
    "Grape",
    "Grapefruit",
    "Kiwi",
    "Lemon",
    "Mango",
    "Orange",
    "Papaya",
    "Peach",
    "Pear",
    "Pineapple",
    "Raspberry",
    "Strawberry",
];

/// Immutable, cheaply cloneable list of candidates.
///
/// Order is preserved exactly as supplied and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    items: Arc<[String]>,
}

impl Candidates {
    /// Line breaks inside an item are folded to spaces so every item fits
    /// the single-line search field
    pub fn new(items: Vec<String>) -> Self {
        let items: Vec<String> = items
            .into_iter()
            .map(|item| {
                if item.contains(['\n', '\r']) {
                    single_line(&item)
                } else {
                    item
                }
            })
            .collect();
        Self {
            items: items.into(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_ITEMS.iter().map(|s| s.to_string()).collect())
    }
}

/// `text` with each line break (`\r\n`, `\n` or `\r`) replaced by a space
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

impl Default for Candidates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Deref for Candidates {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.items
    }
}

impl From<Vec<String>> for Candidates {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<&[&str]> for Candidates {
    fn from(items: &[&str]) -> Self {
        Self::new(items.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
#[path = "candidates_tests.rs"]
mod candidates_tests;
