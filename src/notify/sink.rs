use std::fmt;
use std::sync::{Arc, Mutex};

use super::CatalogEvent;

/// Receives notifications from a catalog.
///
/// A failing sink never aborts the operation that produced the event; the
/// catalog logs the failure and carries on.
pub trait EventSink {
    type Error: fmt::Display;

    fn notify(&mut self, event: &CatalogEvent) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    BufferPoisoned,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::BufferPoisoned => write!(f, "sink buffer poisoned"),
        }
    }
}

impl std::error::Error for SinkError {}

/// Renders notifications as human-readable lines, either through `tracing`
/// or into a shared buffer.
#[derive(Debug, Default)]
pub struct LogSink {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogSink {
    pub fn new() -> Self {
        LogSink { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogSink {
            buffer: Some(buffer),
        }
    }
}

impl EventSink for LogSink {
    type Error = SinkError;

    fn notify(&mut self, event: &CatalogEvent) -> Result<(), Self::Error> {
        match &self.buffer {
            Some(buffer) => {
                let mut buffer = buffer.lock().map_err(|_| SinkError::BufferPoisoned)?;
                buffer.push(event.to_string());
            }
            None if event.is_rejection() => {
                tracing::warn!(event_type = event.event_type(), "{}", event);
            }
            None => {
                tracing::info!(event_type = event.event_type(), "{}", event);
            }
        }
        Ok(())
    }
}

/// Keeps every structured event so callers can inspect exactly what was reported.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<CatalogEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    pub fn events(&self) -> Vec<CatalogEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events().iter().map(CatalogEvent::event_type).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl EventSink for RecordingSink {
    type Error = SinkError;

    fn notify(&mut self, event: &CatalogEvent) -> Result<(), Self::Error> {
        self.events
            .lock()
            .map_err(|_| SinkError::BufferPoisoned)?
            .push(event.clone());
        Ok(())
    }
}

/// Forwards notifications to in-process listeners registered on an
/// [`EventEmitter`](crate::EventEmitter). Payloads are JSON.
#[cfg(feature = "emitter")]
pub struct EmitterSink {
    emitter: crate::EventEmitter,
}

#[cfg(feature = "emitter")]
impl EmitterSink {
    pub fn new(emitter: crate::EventEmitter) -> Self {
        EmitterSink { emitter }
    }

    pub fn on<F>(&mut self, event_type: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event_type, listener);
    }
}

#[cfg(feature = "emitter")]
impl fmt::Debug for EmitterSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterSink").finish_non_exhaustive()
    }
}

#[cfg(feature = "emitter")]
impl EventSink for EmitterSink {
    type Error = serde_json::Error;

    fn notify(&mut self, event: &CatalogEvent) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(event)?;
        self.emitter.emit(event.event_type(), payload);
        Ok(())
    }
}
