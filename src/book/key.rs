use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a book owned by a [`Catalog`](crate::Catalog).
///
/// Handles stay valid for the life of the catalog that issued them; books are
/// never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(usize);

impl BookId {
    pub fn from_index(index: usize) -> Self {
        BookId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Value identity of a book: two books are the same book when both their
/// title and their ISBN match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookKey {
    pub title: String,
    pub isbn: u64,
}

impl BookKey {
    pub fn new(title: impl Into<String>, isbn: u64) -> Self {
        BookKey {
            title: title.into(),
            isbn,
        }
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ISBN {})", self.title, self.isbn)
    }
}
