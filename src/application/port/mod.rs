// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! UI components hold these as trait objects so they can be exercised with
//! scripted implementations in tests.
//!
//! # Available Ports
//!
//! - [`dialog`]: Native "open file" dialog
//! - [`asset`]: Local path to resource locator conversion
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so they can be shared through `Arc`
//! - No `async fn`: asynchronous ports return a boxed `'static` future that
//!   callers hand to `iced::Task::perform`
//!
//! # Example
//!
//! ```ignore
//! use esim_workbench::application::port::{FileDialog, FileFilter, OpenRequest};
//!
//! fn ask(dialog: &dyn FileDialog) {
//!     let future = dialog.open(OpenRequest::single(FileFilter::new("Image", &["png"])));
//!     // hand `future` to Task::perform
//! }
//! ```

pub mod asset;
pub mod dialog;

pub use asset::{AssetResolver, AssetUrl, ConvertError};
pub use dialog::{DialogError, DialogOutcome, FileDialog, FileFilter, OpenRequest};
