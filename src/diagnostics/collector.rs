// SPDX-License-Identifier: MPL-2.0
//! Diagnostics handle for recording events.
//!
//! Every event is mirrored to `tracing` and kept in a bounded ring buffer
//! that the application can inspect later.

use std::sync::{Arc, Mutex};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction,
    WarningEvent,
};

/// Handle for sending diagnostic events to the shared buffer.
///
/// This handle is cheap to clone and can be shared across threads.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsHandle {
    /// Creates a handle backed by a fresh buffer of the given capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Logs a user action event.
    pub fn log_action(&self, action: UserAction) {
        tracing::debug!(?action, "user action");
        self.record(DiagnosticEventKind::UserAction { action });
    }

    /// Logs a warning event with full details.
    pub fn log_warning(&self, event: WarningEvent) {
        tracing::warn!(warning_type = ?event.warning_type, "{}", event.message);
        self.record(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error event with full details.
    pub fn log_error(&self, event: ErrorEvent) {
        tracing::error!(error_type = %event.error_type, "{}", event.message);
        self.record(DiagnosticEventKind::Error { event });
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the recorded error events, oldest first.
    #[must_use]
    pub fn errors(&self) -> Vec<ErrorEvent> {
        self.events()
            .iter()
            .filter_map(DiagnosticEvent::as_error)
            .cloned()
            .collect()
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every recorded event.
    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    fn record(&self, kind: DiagnosticEventKind) {
        // A poisoned buffer only loses history; the tracing output above still went out
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(DiagnosticEvent::new(kind));
        }
    }
}
