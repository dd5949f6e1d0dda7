//! Fixed-size pagination over fully loaded result lists.

/// Number of questions on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Normalize a raw `page` query value. Anything that is not a positive
/// integer selects the first page.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Return the 1-indexed `page` of `items`. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
