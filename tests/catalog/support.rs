use tome_rater::{Book, BookId, Catalog, RecordingSink};

pub fn recording_catalog() -> (Catalog<RecordingSink>, RecordingSink) {
    let sink = RecordingSink::new();
    (Catalog::builder().sink(sink.clone()).build(), sink)
}

pub fn titles(books: Vec<&Book>) -> Vec<String> {
    let mut titles: Vec<String> = books.into_iter().map(|book| book.title().to_string()).collect();
    titles.sort();
    titles
}

pub fn read_times(
    catalog: &mut Catalog<RecordingSink>,
    book: BookId,
    email: &str,
    times: usize,
) {
    for _ in 0..times {
        catalog.record_reading_event(Some(book), email, None).unwrap();
    }
}
