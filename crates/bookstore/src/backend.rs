//! The backing-store contract consumed by the cache

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ahash::RandomState;
use parking_lot::Mutex;

use crate::book::{Book, BookId};

/// A slow, authoritative lookup-by-id service.
///
/// Implementations must be safe to call from many threads at once and
/// deterministic per id: the same id always yields the same record, or
/// always yields `None`. An unknown id is a normal outcome, not an error.
pub trait Backend: Send + Sync {
    /// Look up a record, returning an owned copy
    fn fetch(&self, id: BookId) -> Option<Book>;
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn fetch(&self, id: BookId) -> Option<Book> {
        (**self).fetch(id)
    }
}

impl<B: Backend + ?Sized> Backend for &B {
    fn fetch(&self, id: BookId) -> Option<Book> {
        (**self).fetch(id)
    }
}

/// Backend wrapper that counts every `fetch` it forwards
pub struct Instrumented<B> {
    inner: B,
    calls: AtomicU64,
    per_id: Mutex<HashMap<BookId, u64, RandomState>>,
}

impl<B: Backend> Instrumented<B> {
    /// Wrap a backend
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
            per_id: Mutex::new(HashMap::with_hasher(RandomState::new())),
        }
    }

    /// Total number of fetches forwarded so far
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Number of fetches forwarded for one id
    pub fn calls_for(&self, id: BookId) -> u64 {
        self.per_id.lock().get(&id).copied().unwrap_or(0)
    }

    /// Borrow the wrapped backend
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Backend> Backend for Instrumented<B> {
    fn fetch(&self, id: BookId) -> Option<Book> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        *self.per_id.lock().entry(id).or_insert(0) += 1;
        self.inner.fetch(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    struct OneBook;

    impl Backend for OneBook {
        fn fetch(&self, id: BookId) -> Option<Book> {
            (id == 1).then(|| Book::new(1, "Only", "One", 2000))
        }
    }

    #[test]
    fn test_instrumented_counts() {
        let backend = Instrumented::new(OneBook);

        assert!(backend.fetch(1).is_some());
        assert!(backend.fetch(1).is_some());
        assert!(backend.fetch(2).is_none());

        assert_eq!(backend.calls(), 3);
        assert_eq!(backend.calls_for(1), 2);
        assert_eq!(backend.calls_for(2), 1);
        assert_eq!(backend.calls_for(3), 0);
    }

    #[test]
    fn test_instrumented_concurrent_counts() {
        let backend = Instrumented::new(OneBook);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..100 {
                        backend.fetch(1);
                    }
                });
            }
        });

        assert_eq!(backend.calls(), 800);
        assert_eq!(backend.calls_for(1), 800);
    }

    fn fetch_through<B: Backend>(backend: B, id: BookId) -> Option<Book> {
        backend.fetch(id)
    }

    #[test]
    fn test_shared_wrappers_forward() {
        let shared: Arc<dyn Backend> = Arc::new(OneBook);
        assert_eq!(fetch_through(Arc::clone(&shared), 1).map(|b| b.id), Some(1));
        assert_eq!(fetch_through(&OneBook, 1).map(|b| b.id), Some(1));
        assert!(fetch_through(shared, 2).is_none());
    }
}
