use std::fmt;

use crate::email::{EmailValidator, PatternEmailValidator};
use crate::notify::{EventSink, LogSink};

use super::Catalog;

/// Configures a [`Catalog`] before it is created.
///
/// # Example
///
/// ```
/// use tome_rater::{Catalog, RecordingSink};
///
/// let sink = RecordingSink::new();
/// let mut catalog = Catalog::builder()
///     .sink(sink.clone())
///     .email_validator(|email: &str| email.ends_with("@example.com"))
///     .build();
///
/// assert!(catalog.register_reader("Ann", "ann@example.com", &[]).is_ok());
/// assert!(catalog.register_reader("Bob", "bob@other.org", &[]).is_err());
/// assert_eq!(sink.event_types(), vec!["ReaderAdded", "ReaderRejected"]);
/// ```
pub struct CatalogBuilder<S: EventSink = LogSink> {
    sink: S,
    validator: Box<dyn EmailValidator>,
}

impl CatalogBuilder<LogSink> {
    pub fn new() -> Self {
        CatalogBuilder {
            sink: LogSink::new(),
            validator: Box::new(PatternEmailValidator),
        }
    }
}

impl Default for CatalogBuilder<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> CatalogBuilder<S> {
    /// Send notifications to `sink` instead of the default [`LogSink`].
    pub fn sink<T: EventSink>(self, sink: T) -> CatalogBuilder<T> {
        CatalogBuilder {
            sink,
            validator: self.validator,
        }
    }

    pub fn email_validator(mut self, validator: impl EmailValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn build(self) -> Catalog<S> {
        Catalog::from_parts(self.sink, self.validator)
    }
}

impl<S: EventSink + fmt::Debug> fmt::Debug for CatalogBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogBuilder")
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
