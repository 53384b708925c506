// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.
//!
//! - [`dialog`]: native "open file" dialog via `rfd`
//! - [`asset`]: `app://localhost/...` locators for local files

pub mod asset;
pub mod dialog;

pub use asset::AppAssetResolver;
pub use dialog::NativeFileDialog;
