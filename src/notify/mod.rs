mod event;
mod sink;

pub use event::{CatalogEvent, RejectionReason};
pub use sink::{EventSink, LogSink, RecordingSink, SinkError};

#[cfg(feature = "emitter")]
pub use sink::EmitterSink;
