//! Substring search over question text.

/// Whether `text` contains `term`, ignoring case for any Unicode letter.
///
/// Both sides are lowercased, so the term is never interpreted as a pattern.
pub fn contains_ignoring_case(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}
