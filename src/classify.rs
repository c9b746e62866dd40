//! Input classification helpers.
//!
//! Validation is deliberately fuzzy: case-insensitive substring containment
//! against small keyword tables. Each phase value type wraps these helpers
//! in a pure `classify(&str) -> Option<Self>` so the matching is testable
//! independently of any state transition.

/// Whether the (already lowercased) input contains any of the keywords.
pub fn contains_any(input_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| input_lower.contains(k))
}

/// Ordered first-match lookup: the first table entry whose keyword appears
/// in the input wins.
pub fn first_match<T: Copy>(input_lower: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| input_lower.contains(keyword))
        .map(|&(_, value)| value)
}

/// Length guard for free-text fields, counted in characters of the raw
/// input (not trimmed, matching the wire contract).
pub fn shorter_than(input: &str, min_chars: usize) -> bool {
    input.chars().count() < min_chars
}
