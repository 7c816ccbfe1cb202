//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record.
//!
//! # Invariants
//! - `id` is assigned by the repository at creation and never changes.
//! - Identifiers are unique within a run and never reused after removal.

use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Signed so that arbitrary user-entered integers stay representable and
/// resolve to a normal not-found outcome instead of a parse failure.
pub type BookId = i64;

/// Canonical catalog record.
///
/// Title and author are stored verbatim as entered; the identifier is
/// picked by the repository when the record is stored, never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog-assigned identifier, unique within one process run.
    pub id: BookId,
    /// Title as entered.
    pub title: String,
    /// Author as entered.
    pub author: String,
    /// Publication year.
    pub year: i32,
}

impl Book {
    /// Creates a record with a repository-assigned identifier.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}
