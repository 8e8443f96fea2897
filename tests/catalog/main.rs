mod support;

use support::{read_times, recording_catalog, titles};
use tome_rater::{BookKey, CatalogError, CatalogEvent, RejectionReason};

#[test]
fn duplicate_isbn_keeps_first_book() {
    let (mut catalog, sink) = recording_catalog();
    let first = catalog.create_book("Dune", 111, 10.0).unwrap();

    let second = catalog.create_non_fiction_book("Dune Atlas", "maps", "advanced", 111, 30.0);

    assert!(second.is_err());
    assert_eq!(catalog.book_count(), 1);
    assert_eq!(catalog.book(first).unwrap().title(), "Dune");
    assert_eq!(
        sink.events().last(),
        Some(&CatalogEvent::BookRejected {
            title: "Dune Atlas".into(),
            isbn: 111,
        })
    );
}

#[test]
fn duplicate_email_leaves_first_reader_untouched() {
    let (mut catalog, sink) = recording_catalog();
    let dune = catalog.create_book("Dune", 111, 10.0).unwrap();
    catalog.register_reader("Ann", "a@b.com", &[dune]).unwrap();

    let again = catalog.register_reader("Impostor", "a@b.com", &[]);

    assert_eq!(again, Err(CatalogError::DuplicateEmail("a@b.com".into())));
    let reader = catalog.reader("a@b.com").unwrap();
    assert_eq!(reader.name(), "Ann");
    assert_eq!(reader.books_read(), 1);
    assert_eq!(catalog.reader_count(), 1);
    assert_eq!(
        sink.events().last(),
        Some(&CatalogEvent::ReaderRejected {
            email: "a@b.com".into(),
            reason: RejectionReason::DuplicateEmail,
        })
    );
}

#[test]
fn malformed_email_is_rejected() {
    let (mut catalog, _) = recording_catalog();
    for email in ["ann", "ann@example", "@example.com"] {
        assert_eq!(
            catalog.register_reader("Ann", email, &[]),
            Err(CatalogError::InvalidEmail(email.into()))
        );
    }
    assert_eq!(catalog.reader_count(), 0);
}

#[test]
fn initial_books_are_read_without_rating() {
    let (mut catalog, sink) = recording_catalog();
    let dune = catalog.create_book("Dune", 111, 10.0).unwrap();
    let go = catalog.create_book("Go", 222, 20.0).unwrap();
    sink.clear();

    catalog.register_reader("Ann", "a@b.com", &[dune, go]).unwrap();

    let reader = catalog.reader("a@b.com").unwrap();
    assert_eq!(reader.books_read(), 2);
    assert_eq!(reader.average_rating(), None);
    assert_eq!(reader.total_price(), 30.0);
    assert_eq!(catalog.read_count(dune), 1);
    assert_eq!(catalog.read_count(go), 1);
    assert_eq!(
        sink.event_types(),
        vec!["ReaderAdded", "RatingRejected", "RatingRejected"]
    );
}

#[test]
fn most_read_books_follows_counts_and_ties() {
    let (mut catalog, _) = recording_catalog();
    assert!(catalog.most_read_books().is_empty());

    let a = catalog.create_book("A", 1, 0.0).unwrap();
    let b = catalog.create_book("B", 2, 0.0).unwrap();
    catalog.register_reader("Ann", "a@b.com", &[]).unwrap();

    read_times(&mut catalog, a, "a@b.com", 3);
    read_times(&mut catalog, b, "a@b.com", 2);
    assert_eq!(titles(catalog.most_read_books()), vec!["A"]);

    read_times(&mut catalog, b, "a@b.com", 1);
    assert_eq!(titles(catalog.most_read_books()), vec!["A", "B"]);
}

#[test]
fn rating_round_trip() {
    let (mut catalog, _) = recording_catalog();
    let dune = catalog.create_book("Dune", 111, 10.0).unwrap();
    catalog.register_reader("Ann", "a@b.com", &[]).unwrap();
    catalog.register_reader("Bob", "bob@b.com", &[]).unwrap();
    catalog
        .record_reading_event(Some(dune), "bob@b.com", Some(2.0))
        .unwrap();

    catalog
        .record_reading_event(Some(dune), "a@b.com", Some(4.0))
        .unwrap();

    assert_eq!(catalog.reader("a@b.com").unwrap().average_rating(), Some(4.0));
    let book = catalog.book(dune).unwrap();
    assert!(book.ratings().contains(&4.0));
    assert_eq!(book.average_rating(), 3.0);
}

#[test]
fn two_book_scenario() {
    let (mut catalog, _) = recording_catalog();
    let dune = catalog.create_book("Dune", 111, 10.0).unwrap();
    let go = catalog.create_book("Go", 222, 20.0).unwrap();
    catalog.register_reader("Ann", "a@b.com", &[]).unwrap();

    catalog
        .record_reading_event(Some(dune), "a@b.com", Some(4.0))
        .unwrap();
    catalog
        .record_reading_event(Some(go), "a@b.com", Some(2.0))
        .unwrap();

    let reader = catalog.reader("a@b.com").unwrap();
    assert_eq!(reader.average_rating(), Some(3.0));
    assert_eq!(reader.books_read(), 2);
    assert_eq!(reader.total_price(), 30.0);
    assert_eq!(titles(catalog.highest_rated_books()), vec!["Dune"]);
}

#[test]
fn most_positive_reader_scenario() {
    let (mut catalog, _) = recording_catalog();
    let dune = catalog.create_fiction_book("Dune", "Frank Herbert", 111, 10.0).unwrap();
    let rust = catalog
        .create_non_fiction_book("Rust", "programming", "beginner", 222, 40.0)
        .unwrap();
    catalog.register_reader("Happy", "happy@b.com", &[]).unwrap();
    catalog.register_reader("Grumpy", "grumpy@b.com", &[]).unwrap();

    for book in [dune, rust] {
        catalog
            .record_reading_event(Some(book), "happy@b.com", Some(4.0))
            .unwrap();
        catalog
            .record_reading_event(Some(book), "grumpy@b.com", Some(1.0))
            .unwrap();
    }

    let winners = catalog.most_positive_readers();
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].email(), "happy@b.com");
}

#[test]
fn highest_rated_returns_ties() {
    let (mut catalog, _) = recording_catalog();
    let dune = catalog.create_book("Dune", 111, 10.0).unwrap();
    let go = catalog.create_book("Go", 222, 20.0).unwrap();
    let low = catalog.create_book("Low", 333, 5.0).unwrap();
    catalog.register_reader("Ann", "a@b.com", &[]).unwrap();

    for (book, rating) in [(dune, 3.0), (go, 3.0), (low, 1.0)] {
        catalog
            .record_reading_event(Some(book), "a@b.com", Some(rating))
            .unwrap();
    }

    assert_eq!(titles(catalog.highest_rated_books()), vec!["Dune", "Go"]);
}

#[test]
fn rereading_counts_again_but_overwrites_reader_entry() {
    let (mut catalog, _) = recording_catalog();
    let dune = catalog.create_book("Dune", 111, 10.0).unwrap();
    catalog.register_reader("Ann", "a@b.com", &[]).unwrap();

    catalog
        .record_reading_event(Some(dune), "a@b.com", Some(1.0))
        .unwrap();
    catalog
        .record_reading_event(Some(dune), "a@b.com", Some(3.0))
        .unwrap();

    let reader = catalog.reader("a@b.com").unwrap();
    assert_eq!(reader.books_read(), 1);
    assert_eq!(reader.rating_for(&BookKey::new("Dune", 111)), Some(3.0));
    assert_eq!(catalog.read_count(dune), 2);
    assert_eq!(catalog.book(dune).unwrap().ratings(), &[1.0, 3.0]);
}

#[test]
fn catalogs_compare_by_readers_and_read_books() {
    let (mut left, _) = recording_catalog();
    let (mut right, _) = recording_catalog();
    for catalog in [&mut left, &mut right] {
        let dune = catalog.create_book("Dune", 111, 10.0).unwrap();
        catalog.register_reader("Ann", "a@b.com", &[dune]).unwrap();
    }
    assert!(left == right);

    let go = right.create_book("Go", 222, 20.0).unwrap();
    assert!(left == right);

    right.record_reading_event(Some(go), "a@b.com", None).unwrap();
    assert!(left != right);
}
