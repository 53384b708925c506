// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message` type, an `update` and a `view` taking a `ViewContext`.
//!
//! # Views
//!
//! - [`image_picker`] - File dialog trigger with a fixed-size preview frame
//! - [`preview`] - Zoomable, pannable canvas inside the preview frame
//! - [`inspector`] - Details panel for the current selection
//! - [`about`] - Application version and credits
//!
//! # Shell
//!
//! - [`layout`] - Header / aside / content frame with the route outlet
//! - [`navbar`] - Route buttons for the header and the aside menu
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`viewport`] - Zoom and pan geometry

pub mod about;
pub mod design_tokens;
pub mod image_picker;
pub mod inspector;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod preview;
pub mod theming;
pub mod viewport;
