// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording developer-facing events.
//!
//! Failures that the user only sees as a generic toast are recorded here
//! with their full detail.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped user action, warning or error
//! - [`DiagnosticsHandle`]: Cloneable handle that mirrors events to `tracing`
//!   and stores them in a shared buffer

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsHandle;
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
