use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::BookKey;
use crate::error::CatalogError;
use crate::notify::CatalogEvent;

/// Ratings must be strictly greater than this.
pub const MIN_RATING: f64 = 0.0;
/// Ratings may be at most this.
pub const MAX_RATING: f64 = 4.0;

/// Descriptive attributes that distinguish the kinds of book. They carry no
/// behaviour; rating logic is identical for every kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookKind {
    General,
    Fiction { author: String },
    NonFiction { subject: String, level: String },
}

#[derive(Debug, Clone)]
pub struct Book {
    title: String,
    isbn: u64,
    price: f64,
    ratings: Vec<f64>,
    kind: BookKind,
    events_to_emit: Vec<CatalogEvent>,
}

impl Book {
    pub fn new(title: impl Into<String>, isbn: u64, price: f64) -> Self {
        Book::with_kind(title, isbn, price, BookKind::General)
    }

    pub fn fiction(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: u64,
        price: f64,
    ) -> Self {
        let kind = BookKind::Fiction {
            author: author.into(),
        };
        Book::with_kind(title, isbn, price, kind)
    }

    pub fn non_fiction(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        isbn: u64,
        price: f64,
    ) -> Self {
        let kind = BookKind::NonFiction {
            subject: subject.into(),
            level: level.into(),
        };
        Book::with_kind(title, isbn, price, kind)
    }

    pub fn with_kind(title: impl Into<String>, isbn: u64, price: f64, kind: BookKind) -> Self {
        Book {
            title: title.into(),
            isbn,
            price,
            ratings: Vec::new(),
            kind,
            events_to_emit: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> u64 {
        self.isbn
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Accepted ratings in the order they were received.
    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            BookKind::Fiction { author } => Some(author),
            _ => None,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { subject, .. } => Some(subject),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { level, .. } => Some(level),
            _ => None,
        }
    }

    pub fn key(&self) -> BookKey {
        BookKey::new(self.title.clone(), self.isbn)
    }

    /// Reassign the ISBN. Uniqueness is only enforced when a catalog creates
    /// a book, so nothing is checked here.
    pub fn set_isbn(&mut self, isbn: u64) {
        let old = self.isbn;
        self.isbn = isbn;
        self.events_to_emit.push(CatalogEvent::IsbnChanged {
            title: self.title.clone(),
            old,
            new: isbn,
        });
    }

    /// Record a rating if it lies in `(MIN_RATING, MAX_RATING]`.
    ///
    /// Returns the new average on success. A missing or out-of-band rating
    /// leaves the book untouched and yields [`CatalogError::InvalidRating`].
    /// Either way a notification is queued.
    pub fn add_rating(&mut self, rating: Option<f64>) -> Result<f64, CatalogError> {
        match rating {
            Some(value) if is_valid_rating(value) => {
                self.ratings.push(value);
                let average = self.average_rating();
                self.events_to_emit.push(CatalogEvent::RatingAdded {
                    title: self.title.clone(),
                    rating: value,
                    count: self.ratings.len(),
                    average,
                });
                Ok(average)
            }
            _ => {
                self.events_to_emit.push(CatalogEvent::RatingRejected {
                    title: self.title.clone(),
                    rating,
                });
                Err(CatalogError::InvalidRating {
                    title: self.title.clone(),
                    rating,
                })
            }
        }
    }

    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        self.ratings.iter().sum::<f64>() / self.ratings.len() as f64
    }

    /// Drain notifications queued by state changes since the last call.
    pub fn take_events(&mut self) -> Vec<CatalogEvent> {
        std::mem::take(&mut self.events_to_emit)
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            title: self.title.clone(),
            isbn: self.isbn,
            price: self.price,
            kind: self.kind.clone(),
            ratings: self.ratings.clone(),
            average_rating: self.average_rating(),
        }
    }
}

/// NaN fails both comparisons and is rejected along with everything else
/// outside the band.
pub fn is_valid_rating(rating: f64) -> bool {
    rating > MIN_RATING && rating <= MAX_RATING
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BookKind::General => write!(
                f,
                "{} with ISBN {} has an average rating of {:.2}",
                self.title,
                self.isbn,
                self.average_rating()
            ),
            BookKind::Fiction { author } => write!(
                f,
                "{} by {} with ISBN {} has an average rating of {:.2}",
                self.title,
                author,
                self.isbn,
                self.average_rating()
            ),
            BookKind::NonFiction { subject, level } => {
                write!(f, "{}, a {} manual on {}", self.title, level, subject)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub title: String,
    pub isbn: u64,
    pub price: f64,
    pub kind: BookKind,
    pub ratings: Vec<f64>,
    pub average_rating: f64,
}
