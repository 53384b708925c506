// SPDX-License-Identifier: MPL-2.0
//! File dialog port definition.
//!
//! This module defines the [`FileDialog`] trait for asking the user to pick a
//! file. The native adapter lives in [`crate::infrastructure::dialog`]; tests
//! substitute scripted implementations.

use futures_util::future::BoxFuture;
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Request
// =============================================================================

/// A named group of allowed file extensions, shown by the dialog as a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Label shown next to the filter (e.g. "Image").
    pub name: String,
    /// Allowed extensions, without the leading dot.
    pub extensions: Vec<String>,
}

impl FileFilter {
    /// Creates a filter from a label and a list of extensions.
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }
}

/// Parameters for an "open file" dialog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// Whether several files may be selected at once.
    pub multiple: bool,
    /// Filters restricting which files can be selected.
    pub filters: Vec<FileFilter>,
}

impl OpenRequest {
    /// Single-selection request with the given filter.
    #[must_use]
    pub fn single(filter: FileFilter) -> Self {
        Self {
            multiple: false,
            filters: vec![filter],
        }
    }
}

// =============================================================================
// DialogError
// =============================================================================

/// Errors raised by the dialog capability itself.
///
/// Cancellation is not an error: it resolves to `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// The platform dialog backend failed (missing portal, crashed helper, ...).
    Backend(String),
    /// The request cannot be served by this dialog implementation.
    Unsupported(String),
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogError::Backend(msg) => write!(f, "File dialog backend failed: {msg}"),
            DialogError::Unsupported(msg) => write!(f, "Unsupported dialog request: {msg}"),
        }
    }
}

impl std::error::Error for DialogError {}

/// Result of a dialog session: a picked path, `None` on cancellation, or an error.
pub type DialogOutcome = Result<Option<PathBuf>, DialogError>;

// =============================================================================
// FileDialog Trait
// =============================================================================

/// Capability to run an "open file" dialog.
///
/// The returned future must be `'static` so it can be handed to
/// `iced::Task::perform`; implementations capture what they need from the
/// request by value.
pub trait FileDialog: Send + Sync {
    /// Starts a dialog session for the given request.
    fn open(&self, request: OpenRequest) -> BoxFuture<'static, DialogOutcome>;
}
