mod book;
mod key;

pub use book::{is_valid_rating, Book, BookKind, BookSnapshot, MAX_RATING, MIN_RATING};
pub use key::{BookId, BookKey};
