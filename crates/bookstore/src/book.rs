//! Book records

use std::fmt;

/// Key a book is stored and cached under
pub type BookId = u64;

/// A single book record.
///
/// Records never change once written to a store, so a cached copy is
/// always equal to what the store would return for the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    /// Unique id, also the lookup key
    pub id: BookId,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Year of publication (negative for BCE)
    pub year: i32,
}

impl Book {
    /// Create a new record
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title:\t\t{:?}", self.title)?;
        writeln!(f, "Author:\t\t{:?}", self.author)?;
        writeln!(f, "Published:\t{}", self.year)
    }
}
