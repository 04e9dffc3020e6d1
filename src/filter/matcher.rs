use memchr::memmem;

/// Case-insensitive substring matcher for a single query.
///
/// The query is folded once; each candidate is folded on comparison.
pub struct SubstringMatcher {
    needle: String,
}

impl SubstringMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// An empty folded query matches nothing
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        if self.needle.is_empty() {
            return false;
        }
        let haystack = candidate.to_lowercase();
        memmem::find(haystack.as_bytes(), self.needle.as_bytes()).is_some()
    }
}

/// Candidates whose lowercase form contains the lowercase query.
///
/// Order is preserved and duplicates pass through. An empty query yields no
/// suggestions at all rather than the full list.
pub fn filter(query: &str, candidates: &[String]) -> Vec<String> {
    let matcher = SubstringMatcher::new(query);
    if matcher.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|candidate| matcher.matches(candidate))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
