//! In-memory backing store with simulated lookup latency

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use ahash::RandomState;
use tracing::{debug, info};

use crate::backend::Backend;
use crate::book::{Book, BookId};
use crate::catalog;
use crate::error::{Error, Result};
use crate::parser::parse_catalog;

/// Time every fetch takes unless configured otherwise (100 ms)
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// BookStore is the authoritative source of book records
///
/// Records are fixed at construction. Every [`Backend::fetch`] blocks the
/// calling thread for the configured latency before answering, so it
/// behaves like a round trip to a remote database.
pub struct BookStore {
    /// id -> record
    books: HashMap<BookId, Book, RandomState>,

    /// Simulated per-fetch latency
    latency: Duration,
}

impl BookStore {
    /// Store holding the built-in catalog (ids 1 through 10)
    pub fn builtin() -> Self {
        let mut books = HashMap::with_hasher(RandomState::new());
        for book in catalog::builtin() {
            books.insert(book.id, book);
        }

        Self {
            books,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Build a store from records
    ///
    /// # Returns
    /// * `Result<BookStore>` - `Error::DuplicateId` if two records share an id
    pub fn from_books<I>(books: I) -> Result<Self>
    where
        I: IntoIterator<Item = Book>,
    {
        let mut map = HashMap::with_hasher(RandomState::new());
        for book in books {
            if map.contains_key(&book.id) {
                return Err(Error::DuplicateId(book.id));
            }
            map.insert(book.id, book);
        }

        Ok(Self {
            books: map,
            latency: DEFAULT_LATENCY,
        })
    }

    /// Load a store from a catalog file
    ///
    /// # Arguments
    /// * `path` - Catalog file, one `id | title | author | year` record per line
    ///
    /// # Returns
    /// * `Result<BookStore>` - Store with the default latency
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let store = Self::from_books(parse_catalog(&contents)?)?;

        info!("Loaded {} books from {}", store.len(), path.display());
        Ok(store)
    }

    /// Replace the simulated per-fetch latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Simulated per-fetch latency
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Check whether an id is known, without paying the fetch latency
    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }

    /// All known ids in ascending order
    pub fn ids(&self) -> Vec<BookId> {
        let mut ids: Vec<_> = self.books.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Backend for BookStore {
    fn fetch(&self, id: BookId) -> Option<Book> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let book = self.books.get(&id).cloned();
        debug!(id, found = book.is_some(), "backing store fetch");
        book
    }
}
