//! BookCache: read-through cache wrapping a Backend

use std::collections::HashMap;
use std::fmt;

use ahash::RandomState;
use bookstore::{Backend, Book, BookId};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::stats::CacheStats;

/// Where a resolved record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Served from the in-memory map
    Cache,
    /// Fetched from the backend on a miss
    Backend,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Cache => f.write_str("from cache"),
            Origin::Backend => f.write_str("from database"),
        }
    }
}

/// A resolved record tagged with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// The record
    pub book: Book,
    /// Cache hit or backend fetch
    pub origin: Origin,
}

/// Read-through cache in front of a slow backend
///
/// The map is guarded by a single reader/writer lock. Reads take the shared
/// lock; the only write is a short exclusive insert after a successful
/// fetch. The lock is never held while the backend is being queried, so a
/// slow fetch for one id does not block readers of any other id.
///
/// Two callers that miss on the same id at the same time both fetch and
/// both insert. The backend is deterministic per id, so the second insert
/// writes the same record the first one did.
pub struct BookCache<B> {
    /// Source of truth
    backend: B,

    /// id -> record, only ever grows
    entries: RwLock<HashMap<BookId, Book, RandomState>>,

    /// Cache statistics
    stats: CacheStats,
}

impl<B: Backend> BookCache<B> {
    /// Create an empty cache in front of `backend`
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: RwLock::new(HashMap::with_hasher(RandomState::new())),
            stats: CacheStats::new(),
        }
    }

    /// Probe the cache without falling back to the backend
    ///
    /// # Returns
    /// * `Option<Book>` - A copy of the cached record, if present
    pub fn get(&self, id: BookId) -> Option<Book> {
        self.entries.read().get(&id).cloned()
    }

    /// Get a record from the cache, or from the backend on a miss
    ///
    /// A record fetched from the backend is cached before returning.
    /// Unknown ids return `None` and leave the cache untouched.
    pub fn resolve(&self, id: BookId) -> Option<Book> {
        self.lookup(id).map(|lookup| lookup.book)
    }

    /// Like [`BookCache::resolve`], also reporting where the record came from
    pub fn lookup(&self, id: BookId) -> Option<Lookup> {
        if let Some(book) = self.get(id) {
            self.stats.record_hit();
            trace!(id, "cache hit");
            return Some(Lookup {
                book,
                origin: Origin::Cache,
            });
        }

        // Cache miss - fetch with no lock held
        self.stats.record_miss();
        debug!(id, "cache miss");

        let Some(book) = self.backend.fetch(id) else {
            self.stats.record_not_found();
            debug!(id, "not found in backend");
            return None;
        };

        self.entries.write().insert(id, book.clone());
        self.stats.record_insert();
        debug!(id, "cache populated");

        Some(Lookup {
            book,
            origin: Origin::Backend,
        })
    }

    /// Check whether an id is cached
    pub fn contains(&self, id: BookId) -> bool {
        self.entries.read().contains_key(&id)
    }

    /// Get the number of cached records
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if nothing is cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Borrow the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
