use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::book::{Book, BookKey};
use crate::notify::CatalogEvent;

/// What a reader recorded for one book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub price: f64,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Reader {
    name: String,
    email: String,
    readings: HashMap<BookKey, Reading>,
    events_to_emit: Vec<CatalogEvent>,
}

impl Reader {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Reader {
            name: name.into(),
            email: email.into(),
            readings: HashMap::new(),
            events_to_emit: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Change the email on this reader only. Keeping any email index in sync
    /// is up to whoever owns the reader.
    pub fn change_email(&mut self, email: impl Into<String>) {
        let new = email.into();
        let old = std::mem::replace(&mut self.email, new.clone());
        self.events_to_emit.push(CatalogEvent::EmailChanged { old, new });
    }

    pub fn readings(&self) -> &HashMap<BookKey, Reading> {
        &self.readings
    }

    /// Add the book to this reader's collection, replacing any earlier entry
    /// for the same book.
    pub fn record_reading(&mut self, book: &Book, rating: Option<f64>) {
        self.readings.insert(
            book.key(),
            Reading {
                price: book.price(),
                rating,
            },
        );
    }

    pub fn has_read(&self, key: &BookKey) -> bool {
        self.readings.contains_key(key)
    }

    pub fn rating_for(&self, key: &BookKey) -> Option<f64> {
        self.readings.get(key).and_then(|reading| reading.rating)
    }

    /// Number of distinct books in the collection, rated or not.
    pub fn books_read(&self) -> usize {
        self.readings.len()
    }

    /// Mean of the ratings this reader supplied, or `None` if they never
    /// supplied one. A rating of zero counts as not supplied.
    pub fn average_rating(&self) -> Option<f64> {
        let given: Vec<f64> = self
            .readings
            .values()
            .filter_map(|reading| reading.rating)
            .filter(|rating| *rating != 0.0)
            .collect();
        if given.is_empty() {
            return None;
        }
        Some(given.iter().sum::<f64>() / given.len() as f64)
    }

    pub fn total_price(&self) -> f64 {
        self.readings.values().map(|reading| reading.price).sum()
    }

    /// Move an entry to a new key after the book's identity changed. An entry
    /// already held under `new` is never overwritten.
    pub(crate) fn rekey(&mut self, old: &BookKey, new: BookKey) {
        if self.readings.contains_key(&new) {
            return;
        }
        if let Some(reading) = self.readings.remove(old) {
            self.readings.insert(new, reading);
        }
    }

    pub fn take_events(&mut self) -> Vec<CatalogEvent> {
        std::mem::take(&mut self.events_to_emit)
    }

    pub fn snapshot(&self) -> ReaderSnapshot {
        ReaderSnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            books_read: self.books_read(),
            average_rating: self.average_rating(),
            total_price: self.total_price(),
        }
    }
}

impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for Reader {}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user: {}, email: {}, books read: {}, average rating: ",
            self.name,
            self.email,
            self.books_read()
        )?;
        match self.average_rating() {
            Some(average) => write!(f, "{:.2}", average),
            None => f.write_str("none"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReaderSnapshot {
    pub name: String,
    pub email: String,
    pub books_read: usize,
    pub average_rating: Option<f64>,
    pub total_price: f64,
}
