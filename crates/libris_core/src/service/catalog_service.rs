//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable catalog entry points for presentation callers.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository identifier rules.
//! - Log events carry identifiers and counts only, never record text.

use log::info;

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::BookRepository;

/// Use-case wrapper over a [`BookRepository`] implementation.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new book and returns its assigned identifier.
    ///
    /// # Contract
    /// - Always succeeds for well-typed inputs.
    /// - Assigned identifiers are strictly increasing from 1.
    pub fn add_book(&mut self, title: &str, author: &str, year: i32) -> BookId {
        let id = self.repo.add_book(title, author, year);
        info!("event=book_added module=catalog status=ok id={id}");
        id
    }

    /// Looks up one book by exact identifier.
    pub fn get_book(&self, id: BookId) -> Option<Book> {
        self.repo.get_book(id)
    }

    /// Finds books whose titles contain `query`, case-insensitively.
    ///
    /// Results keep catalog insertion order. A blank query matches every
    /// registered book.
    pub fn find_by_title(&self, query: &str) -> Vec<Book> {
        self.repo.find_by_title(query)
    }

    /// Lists every registered book in insertion order.
    pub fn list_books(&self) -> Vec<Book> {
        self.repo.list_books()
    }

    /// Removes a book by identifier; returns whether a record was deleted.
    ///
    /// Removed identifiers are never reassigned.
    pub fn remove_book(&mut self, id: BookId) -> bool {
        let removed = self.repo.remove_book(id);
        if removed {
            info!("event=book_removed module=catalog status=ok id={id}");
        }
        removed
    }
}
