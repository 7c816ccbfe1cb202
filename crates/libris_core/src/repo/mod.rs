//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate storage details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs report not-found outcomes as values, not errors.

pub mod book_repo;
