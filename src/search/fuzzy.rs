//! Ordered-subsequence matching for incremental tag lookup
//!
//! This is not edit-distance matching: a pattern matches when its
//! characters appear in the candidate in order, not necessarily
//! contiguously. Each pattern character consumes the earliest remaining
//! matching candidate character, scanning left to right.

/// Case-insensitive subsequence test
///
/// An empty or whitespace-only pattern matches everything. Runs in
/// O(len(candidate)).
#[must_use]
pub fn matches(pattern: &str, candidate: &str) -> bool {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return true;
    }

    let mut wanted = pattern.chars().flat_map(char::to_lowercase).peekable();
    for c in candidate.chars().flat_map(char::to_lowercase) {
        if wanted.peek() == Some(&c) {
            wanted.next();
        }
        if wanted.peek().is_none() {
            return true;
        }
    }
    wanted.peek().is_none()
}

/// Keep the candidates the pattern subsequence-matches
#[must_use]
pub fn filter_candidates<'a>(pattern: &str, candidates: &'a [String]) -> Vec<&'a str> {
    candidates
        .iter()
        .map(String::as_str)
        .filter(|candidate| matches(pattern, candidate))
        .collect()
}
