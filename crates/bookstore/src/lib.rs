//! # bookstore
//!
//! Backing store for the book cache: the slow source of truth that the
//! cache falls back to on a miss.
//!
//! ## Pieces
//! - **Book**: immutable record keyed by [`BookId`]
//! - **Backend**: the `fetch(id)` contract the cache consumes
//! - **BookStore**: in-memory records behind simulated lookup latency
//! - **Catalog files**: `id | title | author | year`, one record per line

#![warn(missing_docs)]

mod backend;
mod book;
mod catalog;
mod error;
mod parser;
mod store;

pub use backend::{Backend, Instrumented};
pub use book::{Book, BookId};
pub use error::{Error, Result};
pub use store::{BookStore, DEFAULT_LATENCY};
