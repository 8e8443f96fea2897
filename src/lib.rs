//! In-memory catalog of books, readers and ratings.
//!
//! A [`Catalog`] owns every [`Book`] and [`Reader`]. Readers record readings
//! (optionally rated) through the catalog, which keeps per-book read counts and
//! answers "most read", "highest rated" and "most positive reader" queries.
//! Every mutation is reported to an [`EventSink`].

mod book;
mod catalog;
mod email;
mod error;
mod notify;
mod reader;

pub use book::{
    is_valid_rating, Book, BookId, BookKey, BookKind, BookSnapshot, MAX_RATING, MIN_RATING,
};
pub use catalog::{Catalog, CatalogBuilder};
pub use email::{EmailValidator, PatternEmailValidator};
pub use error::CatalogError;
pub use notify::{CatalogEvent, EventSink, LogSink, RecordingSink, RejectionReason, SinkError};
pub use reader::{Reader, ReaderSnapshot, Reading};

#[cfg(feature = "emitter")]
pub use notify::EmitterSink;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
