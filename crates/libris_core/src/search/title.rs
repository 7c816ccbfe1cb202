//! Case-insensitive partial-title matching.
//!
//! # Responsibility
//! - Normalize user queries for matching.
//! - Provide the single matching predicate used by repositories.
//!
//! # Invariants
//! - Matching is case-insensitive and substring-based.
//! - A blank query matches every title.

/// Normalizes a raw search string for matching.
///
/// Trims surrounding whitespace and lower-cases the remainder. The output
/// feeds [`title_matches`] so query and title use the same case folding.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns whether `title` contains the already-normalized `needle`.
pub fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}
