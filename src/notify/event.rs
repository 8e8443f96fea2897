use std::fmt;

use serde::Serialize;

/// Why a reader registration was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidEmail,
    DuplicateEmail,
}

/// A notification describing something that happened inside the catalog.
///
/// Every mutating operation produces one of these, whether it succeeded or
/// was rejected. Sinks decide how (and whether) to render them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CatalogEvent {
    BookAdded {
        title: String,
        isbn: u64,
    },
    BookRejected {
        title: String,
        isbn: u64,
    },
    ReaderAdded {
        name: String,
        email: String,
    },
    ReaderRejected {
        email: String,
        reason: RejectionReason,
    },
    UnknownReader {
        email: String,
    },
    RatingAdded {
        title: String,
        rating: f64,
        count: usize,
        average: f64,
    },
    RatingRejected {
        title: String,
        rating: Option<f64>,
    },
    IsbnChanged {
        title: String,
        old: u64,
        new: u64,
    },
    IsbnRejected {
        title: String,
        isbn: u64,
    },
    EmailChanged {
        old: String,
        new: String,
    },
    BookListed {
        summary: String,
    },
    ReaderListed {
        summary: String,
    },
}

impl CatalogEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::BookAdded { .. } => "BookAdded",
            CatalogEvent::BookRejected { .. } => "BookRejected",
            CatalogEvent::ReaderAdded { .. } => "ReaderAdded",
            CatalogEvent::ReaderRejected { .. } => "ReaderRejected",
            CatalogEvent::UnknownReader { .. } => "UnknownReader",
            CatalogEvent::RatingAdded { .. } => "RatingAdded",
            CatalogEvent::RatingRejected { .. } => "RatingRejected",
            CatalogEvent::IsbnChanged { .. } => "IsbnChanged",
            CatalogEvent::IsbnRejected { .. } => "IsbnRejected",
            CatalogEvent::EmailChanged { .. } => "EmailChanged",
            CatalogEvent::BookListed { .. } => "BookListed",
            CatalogEvent::ReaderListed { .. } => "ReaderListed",
        }
    }

    /// True for notifications that report a rejected or failed operation.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CatalogEvent::BookRejected { .. }
                | CatalogEvent::ReaderRejected { .. }
                | CatalogEvent::UnknownReader { .. }
                | CatalogEvent::RatingRejected { .. }
                | CatalogEvent::IsbnRejected { .. }
        )
    }
}

impl fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogEvent::BookAdded { title, isbn } => {
                write!(f, "Added {} with ISBN {} to the catalog", title, isbn)
            }
            CatalogEvent::BookRejected { title, isbn } => write!(
                f,
                "{} not added, a book with ISBN {} already exists!",
                title, isbn
            ),
            CatalogEvent::ReaderAdded { name, email } => {
                write!(f, "Registered reader {} <{}>", name, email)
            }
            CatalogEvent::ReaderRejected { email, reason } => match reason {
                RejectionReason::InvalidEmail => {
                    write!(f, "You entered an invalid email {}!", email)
                }
                RejectionReason::DuplicateEmail => {
                    write!(f, "A reader with email {} already exists!", email)
                }
            },
            CatalogEvent::UnknownReader { email } => write!(f, "No user with email {}", email),
            CatalogEvent::RatingAdded {
                title,
                rating,
                count,
                average,
            } => write!(
                f,
                "A rating of {:.2} was added to {} with a total of {} ratings and an average rating of {:.2}",
                rating, title, count, average
            ),
            CatalogEvent::RatingRejected { .. } => write!(f, "Invalid Rating"),
            CatalogEvent::IsbnChanged { title, old, new } => write!(
                f,
                "The ISBN of {} was updated from {} to {}",
                title, old, new
            ),
            CatalogEvent::IsbnRejected { title, isbn } => write!(
                f,
                "The ISBN of {} was not changed, another {} already has ISBN {}!",
                title, title, isbn
            ),
            CatalogEvent::EmailChanged { new, .. } => {
                write!(f, "User email was changed to: {}", new)
            }
            CatalogEvent::BookListed { summary } | CatalogEvent::ReaderListed { summary } => {
                f.write_str(summary)
            }
        }
    }
}
