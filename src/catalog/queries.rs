use crate::book::{Book, BookId};
use crate::notify::{CatalogEvent, EventSink};
use crate::reader::Reader;

use super::Catalog;

/// Aggregate queries and summary views.
///
/// The "most" queries return every entry that shares the maximum. Results
/// come back in a stable order (books by creation, readers by email), but
/// callers should treat them as sets.
impl<S: EventSink> Catalog<S> {
    /// Books with the highest read count. Empty if nothing has been read.
    pub fn most_read_books(&self) -> Vec<&Book> {
        let Some(max) = self.read_counts.values().copied().max() else {
            return Vec::new();
        };
        self.tracked_ids()
            .into_iter()
            .filter(|id| self.read_count(*id) == max)
            .filter_map(|id| self.book(id))
            .collect()
    }

    /// Read books with the highest average rating. Empty if nothing has been
    /// read.
    pub fn highest_rated_books(&self) -> Vec<&Book> {
        let tracked: Vec<&Book> = self
            .tracked_ids()
            .into_iter()
            .filter_map(|id| self.book(id))
            .collect();
        let Some(max) = tracked
            .iter()
            .map(|book| book.average_rating())
            .reduce(f64::max)
        else {
            return Vec::new();
        };
        tracked
            .into_iter()
            .filter(|book| book.average_rating() == max)
            .collect()
    }

    /// Readers with the highest average given rating. Readers who never
    /// supplied a rating are not considered.
    pub fn most_positive_readers(&self) -> Vec<&Reader> {
        let mut rated: Vec<(&Reader, f64)> = self
            .readers
            .values()
            .filter_map(|reader| reader.average_rating().map(|average| (reader, average)))
            .collect();
        let Some(max) = rated.iter().map(|(_, average)| *average).reduce(f64::max) else {
            return Vec::new();
        };
        rated.retain(|(_, average)| *average == max);
        rated.sort_by(|(a, _), (b, _)| a.email().cmp(b.email()));
        rated.into_iter().map(|(reader, _)| reader).collect()
    }

    /// Report every book that has been read to the sink.
    pub fn report_catalog(&mut self) {
        let summaries: Vec<String> = self
            .tracked_ids()
            .into_iter()
            .filter_map(|id| self.book(id).map(ToString::to_string))
            .collect();
        for summary in summaries {
            self.publish(CatalogEvent::BookListed { summary });
        }
    }

    /// Report every registered reader to the sink.
    pub fn report_readers(&mut self) {
        let mut readers: Vec<&Reader> = self.readers.values().collect();
        readers.sort_by(|a, b| a.email().cmp(b.email()));
        let summaries: Vec<String> = readers.into_iter().map(ToString::to_string).collect();
        for summary in summaries {
            self.publish(CatalogEvent::ReaderListed { summary });
        }
    }

    fn tracked_ids(&self) -> Vec<BookId> {
        let mut ids: Vec<BookId> = self.read_counts.keys().copied().collect();
        ids.sort();
        ids
    }
}
