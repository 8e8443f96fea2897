use tome_rater::Catalog;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut catalog = Catalog::new();

    let society = catalog
        .create_non_fiction_book("Society of Mind", "cognition", "advanced", 12_345_678, 15.0)
        .ok();
    let alice = catalog
        .create_fiction_book("Alice in Wonderland", "Lewis Carroll", 12_345, 8.5)
        .ok();
    let code = catalog
        .create_non_fiction_book("Automate the Boring Stuff", "python", "beginner", 1_929_452, 20.0)
        .ok();
    // rejected: ISBN already taken
    let _ = catalog.create_book("Duplicate", 12_345, 1.0);

    let _ = catalog.register_reader("Alan Turing", "alan@turing.com", &[]);
    let _ = catalog.register_reader("David Marr", "david@computation.org", &[]);
    let _ = catalog.register_reader("Broken", "not-an-email", &[]);

    let _ = catalog.record_reading_event(society, "alan@turing.com", Some(1.0));
    let _ = catalog.record_reading_event(alice, "alan@turing.com", Some(3.0));
    let _ = catalog.record_reading_event(code, "david@computation.org", Some(4.0));
    let _ = catalog.record_reading_event(alice, "david@computation.org", Some(7.0));
    let _ = catalog.record_reading_event(alice, "nobody@nowhere.net", Some(2.0));

    catalog.report_catalog();
    catalog.report_readers();

    for book in catalog.most_read_books() {
        println!("most read: {}", book.title());
    }
    for book in catalog.highest_rated_books() {
        println!("highest rated: {}", book.title());
    }
    for reader in catalog.most_positive_readers() {
        println!("most positive: {}", reader.name());
    }
    println!("{}", catalog);
}
