// SPDX-License-Identifier: MPL-2.0
//! Media decoding.
//!
//! Picked files are decoded once, off the update loop, so the preview can
//! tell a missing or corrupt file apart from a displayable one before it
//! replaces the current selection.

pub mod image;

pub use image::{load_image, ImageData};
