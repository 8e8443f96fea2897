use std::fmt;

use crate::book::BookId;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    DuplicateIsbn { title: String, isbn: u64 },
    DuplicateIdentity { title: String, isbn: u64 },
    InvalidEmail(String),
    DuplicateEmail(String),
    UnknownReader(String),
    UnknownBook(BookId),
    InvalidRating { title: String, rating: Option<f64> },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateIsbn { title, isbn } => write!(
                f,
                "{} not added, a book with ISBN {} already exists",
                title, isbn
            ),
            CatalogError::DuplicateIdentity { title, isbn } => write!(
                f,
                "another book is already titled {} with ISBN {}",
                title, isbn
            ),
            CatalogError::InvalidEmail(email) => write!(f, "invalid email {}", email),
            CatalogError::DuplicateEmail(email) => {
                write!(f, "a reader with email {} is already registered", email)
            }
            CatalogError::UnknownReader(email) => write!(f, "no reader with email {}", email),
            CatalogError::UnknownBook(id) => write!(f, "book {} is not in this catalog", id),
            CatalogError::InvalidRating { title, rating } => match rating {
                Some(rating) => write!(f, "invalid rating {} for {}", rating, title),
                None => write!(f, "missing rating for {}", title),
            },
        }
    }
}

impl std::error::Error for CatalogError {}
