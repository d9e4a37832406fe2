//! # bookcache
//!
//! Read-through cache for a slow [`bookstore::Backend`].
//!
//! ## Architecture
//! - **HashMap**: AHash-keyed id -> record map behind one `RwLock`
//! - **Read path**: shared lock only, never touches the backend
//! - **Miss path**: fetch with no lock held, then a brief exclusive insert
//!
//! Entries are never evicted; a record fetched once is served from memory
//! for the lifetime of the cache.

#![warn(missing_docs)]

mod cache;
mod stats;

pub use cache::{BookCache, Lookup, Origin};
pub use stats::CacheStats;
