// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use std::fmt;

/// User-initiated actions worth keeping as context for later errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// The image picker trigger was pressed.
    PickImage,
    /// Navigation to another nested view.
    Navigate {
        /// Identifier of the destination route.
        route: String,
    },
    /// A toast was dismissed by hand.
    DismissNotification,
    /// The navigation aside was shown or hidden.
    ToggleAside,
    /// The image inspector panel was shown or hidden.
    ToggleInspector,
    /// The interface language was changed.
    SelectLanguage {
        /// BCP 47 tag of the new locale.
        locale: String,
    },
}

/// Category of a recorded error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// The file dialog capability failed.
    DialogError,
    /// A picked path could not be turned into a resource locator.
    ConversionError,
    /// A picked file could not be read or decoded.
    LoadError,
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorType::DialogError => "dialog",
            ErrorType::ConversionError => "conversion",
            ErrorType::LoadError => "load",
            ErrorType::Other => "other",
        };
        f.write_str(label)
    }
}

/// Category of a recorded warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// Configuration fell back to defaults.
    ConfigFallback,
    /// Preferences could not be written back.
    ConfigSave,
    Other,
}

/// An error with its raw detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A warning with its raw detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A timestamped diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub kind: DiagnosticEventKind,
    pub recorded_at: DateTime<Utc>,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            kind,
            recorded_at: Utc::now(),
        }
    }

    /// Returns the error payload if this is an error event.
    #[must_use]
    pub fn as_error(&self) -> Option<&ErrorEvent> {
        match &self.kind {
            DiagnosticEventKind::Error { event } => Some(event),
            _ => None,
        }
    }
}
