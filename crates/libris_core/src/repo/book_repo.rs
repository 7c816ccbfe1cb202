//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the identifier-keyed catalog store.
//! - Own identifier assignment, uniqueness and monotonicity.
//!
//! # Invariants
//! - Every key in the store equals its record's `id`.
//! - `next_id` is strictly greater than every identifier ever assigned.
//! - Removal never makes an identifier available again.

use std::collections::BTreeMap;

use crate::model::book::{Book, BookId};
use crate::search::title::{normalize_query, title_matches};

const FIRST_BOOK_ID: BookId = 1;

/// Repository interface for catalog CRUD operations.
///
/// Lookups return owned records. `None` and `false` signal not-found
/// outcomes, which are normal results rather than errors.
pub trait BookRepository {
    /// Stores a new record and returns its assigned identifier.
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> BookId;
    /// Exact lookup by identifier.
    fn get_book(&self, id: BookId) -> Option<Book>;
    /// Case-insensitive partial-title search, in insertion order.
    fn find_by_title(&self, query: &str) -> Vec<Book>;
    /// Every record, in insertion order.
    fn list_books(&self) -> Vec<Book>;
    /// Deletes on exact identifier match; returns whether a record existed.
    fn remove_book(&mut self, id: BookId) -> bool;
}

/// In-memory identifier-keyed book store.
///
/// Identifiers are monotonic from 1 and never reused, so ascending key
/// order equals insertion order and listing needs no extra ordering state.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: BTreeMap<BookId, Book>,
    next_id: BookId,
}

impl MemoryBookRepository {
    /// Creates an empty store; the first assigned identifier is 1.
    pub fn new() -> Self {
        Self {
            books: BTreeMap::new(),
            next_id: FIRST_BOOK_ID,
        }
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for MemoryBookRepository {
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> BookId {
        let id = self.next_id;
        self.next_id += 1;
        self.books.insert(id, Book::new(id, title, author, year));
        id
    }

    fn get_book(&self, id: BookId) -> Option<Book> {
        self.books.get(&id).cloned()
    }

    fn find_by_title(&self, query: &str) -> Vec<Book> {
        let needle = normalize_query(query);
        self.books
            .values()
            .filter(|book| title_matches(&book.title, &needle))
            .cloned()
            .collect()
    }

    fn list_books(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    fn remove_book(&mut self, id: BookId) -> bool {
        // The counter is untouched: removed identifiers stay retired.
        self.books.remove(&id).is_some()
    }
}
