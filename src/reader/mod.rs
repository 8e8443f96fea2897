mod reader;

pub use reader::{Reader, ReaderSnapshot, Reading};
