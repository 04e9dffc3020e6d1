//! Filter engine: turns a query into the ordered list of matching candidates.

mod matcher;

pub use matcher::{SubstringMatcher, filter};

use crate::candidates::Candidates;

/// The candidate list bound to the matcher used to search it.
///
/// This is what the combobox consults when its debounce timer fires.
#[derive(Debug, Clone)]
pub struct SuggestionFilter {
    candidates: Candidates,
}

impl SuggestionFilter {
    pub fn new(candidates: Candidates) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    /// Candidates matching `query`, in candidate order
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        filter(query, &self.candidates)
    }
}
