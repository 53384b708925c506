// SPDX-License-Identifier: MPL-2.0
//! `esim_workbench` is a small desktop shell built with the Iced GUI framework.
//!
//! It hosts an image picker that previews a local image chosen through the
//! native file dialog, inside a header / aside / content / inspector layout.
//! The preview decodes the file and can be zoomed and panned. Text is
//! localized with Fluent and preferences live in a TOML file.
//!
//! # Layers
//!
//! - [`application`] - Port traits for the file dialog and path conversion
//! - [`infrastructure`] - Native adapters implementing those ports
//! - [`media`] - Decoding of picked image files
//! - [`ui`] - Widgets, layout and notifications
//! - [`app`] - Root state wiring everything together

#![doc(html_root_url = "https://docs.rs/esim_workbench/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
