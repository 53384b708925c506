// SPDX-License-Identifier: MPL-2.0
//! Path-to-resource-locator port definition.
//!
//! The rendering surface does not take raw file system paths; it takes
//! [`AssetUrl`]s produced by an [`AssetResolver`].

use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// AssetUrl
// =============================================================================

/// A display-ready resource locator for a local file.
///
/// Always built by an [`AssetResolver`]; the locator keeps the local path it
/// was derived from so the renderer can load the pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetUrl {
    url: String,
    local_path: PathBuf,
}

impl AssetUrl {
    /// Pairs a locator string with the local path it points to.
    pub fn new(url: impl Into<String>, local_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            local_path: local_path.into(),
        }
    }

    /// The locator string (e.g. `app://localhost/tmp/photo.png`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The local file the locator was derived from.
    #[must_use]
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }
}

impl fmt::Display for AssetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

// =============================================================================
// ConvertError
// =============================================================================

/// Errors that can occur while turning a path into an [`AssetUrl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The dialog handed back an empty path.
    EmptyPath,
    /// Only absolute paths can be addressed.
    RelativePath(PathBuf),
    /// The path could not be encoded as a URL.
    InvalidUrl(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::EmptyPath => write!(f, "Cannot convert an empty path"),
            ConvertError::RelativePath(path) => {
                write!(f, "Cannot convert relative path: {}", path.display())
            }
            ConvertError::InvalidUrl(msg) => write!(f, "Invalid resource locator: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

// =============================================================================
// AssetResolver Trait
// =============================================================================

/// Capability to convert a local path into a renderable resource locator.
pub trait AssetResolver: Send + Sync {
    /// Converts `path` into an [`AssetUrl`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] if the path cannot be addressed.
    fn resolve(&self, path: &Path) -> Result<AssetUrl, ConvertError>;
}
