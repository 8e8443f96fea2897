use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::book::{Book, BookId, BookKey, BookKind};
use crate::email::EmailValidator;
use crate::error::CatalogError;
use crate::notify::{CatalogEvent, EventSink, LogSink, RejectionReason};
use crate::reader::Reader;

use super::CatalogBuilder;

/// Owns every book and reader, enforces ISBN and email uniqueness, routes
/// reading events and answers aggregate queries.
///
/// Every mutating call reports what happened to the configured [`EventSink`],
/// including rejections. Rejected calls leave the catalog unchanged.
pub struct Catalog<S: EventSink = LogSink> {
    pub(super) books: Vec<Book>,
    pub(super) library: HashMap<u64, BookId>,
    pub(super) read_counts: HashMap<BookId, u32>,
    pub(super) readers: HashMap<String, Reader>,
    pub(super) sink: S,
    pub(super) validator: Box<dyn EmailValidator>,
}

impl Catalog<LogSink> {
    pub fn new() -> Self {
        Catalog::builder().build()
    }

    pub fn builder() -> CatalogBuilder<LogSink> {
        CatalogBuilder::new()
    }
}

impl Default for Catalog<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> Catalog<S> {
    pub(super) fn from_parts(sink: S, validator: Box<dyn EmailValidator>) -> Self {
        Catalog {
            books: Vec::new(),
            library: HashMap::new(),
            read_counts: HashMap::new(),
            readers: HashMap::new(),
            sink,
            validator,
        }
    }

    pub fn create_book(
        &mut self,
        title: impl Into<String>,
        isbn: u64,
        price: f64,
    ) -> Result<BookId, CatalogError> {
        self.insert_book(Book::with_kind(title, isbn, price, BookKind::General))
    }

    pub fn create_fiction_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: u64,
        price: f64,
    ) -> Result<BookId, CatalogError> {
        self.insert_book(Book::fiction(title, author, isbn, price))
    }

    pub fn create_non_fiction_book(
        &mut self,
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        isbn: u64,
        price: f64,
    ) -> Result<BookId, CatalogError> {
        self.insert_book(Book::non_fiction(title, subject, level, isbn, price))
    }

    fn insert_book(&mut self, book: Book) -> Result<BookId, CatalogError> {
        let title = book.title().to_string();
        let isbn = book.isbn();

        if self.library.contains_key(&isbn) {
            self.publish(CatalogEvent::BookRejected {
                title: title.clone(),
                isbn,
            });
            return Err(CatalogError::DuplicateIsbn { title, isbn });
        }

        let id = BookId::from_index(self.books.len());
        self.books.push(book);
        self.library.insert(isbn, id);
        tracing::debug!(book = %id, isbn, "book created");
        self.publish(CatalogEvent::BookAdded { title, isbn });
        Ok(id)
    }

    /// Register a reader and record one unrated reading for each distinct
    /// book in `initial_books`.
    ///
    /// The email must pass the configured validator and must not already be
    /// registered. Every initial book must belong to this catalog; otherwise
    /// nothing is registered.
    pub fn register_reader(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        initial_books: &[BookId],
    ) -> Result<(), CatalogError> {
        let name = name.into();
        let email = email.into();

        self.check_new_email(&email)?;
        if let Some(missing) = initial_books.iter().find(|id| self.book(**id).is_none()) {
            return Err(CatalogError::UnknownBook(*missing));
        }

        self.readers
            .insert(email.clone(), Reader::new(name.clone(), email.clone()));
        tracing::debug!(%email, "reader registered");
        self.publish(CatalogEvent::ReaderAdded {
            name,
            email: email.clone(),
        });

        let mut seen = HashSet::new();
        for id in initial_books {
            if seen.insert(*id) {
                self.record_reading_event(Some(*id), &email, None)?;
            }
        }
        Ok(())
    }

    /// Associate `book` with the reader registered under `email`.
    ///
    /// The reader's collection and the catalog's read count are updated even
    /// when the rating is missing or out of range; such a rating is only
    /// dropped from the book. A `None` book is a no-op once the reader has
    /// been found.
    pub fn record_reading_event(
        &mut self,
        book: Option<BookId>,
        email: &str,
        rating: Option<f64>,
    ) -> Result<(), CatalogError> {
        if !self.readers.contains_key(email) {
            self.publish(CatalogEvent::UnknownReader {
                email: email.to_string(),
            });
            return Err(CatalogError::UnknownReader(email.to_string()));
        }
        let Some(id) = book else {
            return Ok(());
        };
        let Some(book) = self.books.get_mut(id.index()) else {
            tracing::warn!(book = %id, "reading event for a book outside this catalog");
            return Err(CatalogError::UnknownBook(id));
        };
        let Some(reader) = self.readers.get_mut(email) else {
            return Err(CatalogError::UnknownReader(email.to_string()));
        };

        reader.record_reading(book, rating);
        *self.read_counts.entry(id).or_insert(0) += 1;
        // An invalid rating is reported by the book itself; the reading stands.
        let _ = book.add_rating(rating);

        tracing::debug!(book = %id, %email, ?rating, "reading recorded");
        self.flush_book(id);
        Ok(())
    }

    /// Reassign a book's ISBN.
    ///
    /// The new ISBN is not checked against the library and the library index
    /// keeps the ISBN the book was created under. The change is refused if
    /// another book already has the same title and ISBN, since readers could
    /// no longer tell the two apart. Reader collections are re-keyed so they
    /// keep pointing at the book.
    pub fn set_book_isbn(&mut self, id: BookId, isbn: u64) -> Result<(), CatalogError> {
        let old_key = self.book(id).ok_or(CatalogError::UnknownBook(id))?.key();
        let new_key = BookKey::new(old_key.title.clone(), isbn);
        let taken = self
            .books()
            .any(|(other, book)| other != id && book.key() == new_key);
        if taken {
            self.publish(CatalogEvent::IsbnRejected {
                title: new_key.title.clone(),
                isbn,
            });
            return Err(CatalogError::DuplicateIdentity {
                title: new_key.title,
                isbn,
            });
        }

        let book = self
            .books
            .get_mut(id.index())
            .ok_or(CatalogError::UnknownBook(id))?;
        book.set_isbn(isbn);
        let new_key = book.key();

        for reader in self.readers.values_mut() {
            reader.rekey(&old_key, new_key.clone());
        }
        self.flush_book(id);
        Ok(())
    }

    /// Move a reader to a new email, keeping the email index consistent.
    pub fn change_reader_email(&mut self, old: &str, new: &str) -> Result<(), CatalogError> {
        if !self.readers.contains_key(old) {
            self.publish(CatalogEvent::UnknownReader {
                email: old.to_string(),
            });
            return Err(CatalogError::UnknownReader(old.to_string()));
        }
        if old == new {
            return Ok(());
        }
        self.check_new_email(new)?;

        let mut events = Vec::new();
        if let Some(mut reader) = self.readers.remove(old) {
            reader.change_email(new);
            events = reader.take_events();
            self.readers.insert(new.to_string(), reader);
        }
        for event in events {
            self.publish(event);
        }
        Ok(())
    }

    fn check_new_email(&mut self, email: &str) -> Result<(), CatalogError> {
        let rejection = if !self.validator.is_valid(email) {
            Some((
                RejectionReason::InvalidEmail,
                CatalogError::InvalidEmail(email.to_string()),
            ))
        } else if self.readers.contains_key(email) {
            Some((
                RejectionReason::DuplicateEmail,
                CatalogError::DuplicateEmail(email.to_string()),
            ))
        } else {
            None
        };

        match rejection {
            Some((reason, err)) => {
                self.publish(CatalogEvent::ReaderRejected {
                    email: email.to_string(),
                    reason,
                });
                Err(err)
            }
            None => Ok(()),
        }
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.index())
    }

    /// Look a book up by the ISBN it was created under.
    pub fn book_by_isbn(&self, isbn: u64) -> Option<&Book> {
        self.library.get(&isbn).and_then(|id| self.book(*id))
    }

    pub fn book_id_by_isbn(&self, isbn: u64) -> Option<BookId> {
        self.library.get(&isbn).copied()
    }

    /// Every book ever created, in creation order.
    pub fn books(&self) -> impl Iterator<Item = (BookId, &Book)> {
        self.books
            .iter()
            .enumerate()
            .map(|(index, book)| (BookId::from_index(index), book))
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn reader(&self, email: &str) -> Option<&Reader> {
        self.readers.get(email)
    }

    pub fn readers(&self) -> impl Iterator<Item = &Reader> {
        self.readers.values()
    }

    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Number of reading events recorded for the book; 0 if it was never read.
    pub fn read_count(&self, id: BookId) -> u32 {
        self.read_counts.get(&id).copied().unwrap_or(0)
    }

    /// Number of distinct books with at least one reading event.
    pub fn tracked_book_count(&self) -> usize {
        self.read_counts.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub(super) fn publish(&mut self, event: CatalogEvent) {
        if let Err(err) = self.sink.notify(&event) {
            tracing::warn!(event_type = event.event_type(), error = %err, "event sink failed");
        }
    }

    fn flush_book(&mut self, id: BookId) {
        let events = match self.books.get_mut(id.index()) {
            Some(book) => book.take_events(),
            None => return,
        };
        for event in events {
            self.publish(event);
        }
    }

    fn tracked_keys(&self) -> HashMap<BookKey, u32> {
        self.read_counts
            .iter()
            .filter_map(|(id, count)| self.book(*id).map(|book| (book.key(), *count)))
            .collect()
    }
}

impl<S: EventSink, T: EventSink> PartialEq<Catalog<T>> for Catalog<S> {
    fn eq(&self, other: &Catalog<T>) -> bool {
        self.readers == other.readers && self.tracked_keys() == other.tracked_keys()
    }
}

impl<S: EventSink> fmt::Display for Catalog<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalog has {} readers and {} books",
            self.readers.len(),
            self.read_counts.len()
        )
    }
}

impl<S: EventSink + fmt::Debug> fmt::Debug for Catalog<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books)
            .field("library", &self.library)
            .field("read_counts", &self.read_counts)
            .field("readers", &self.readers)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
