// SPDX-License-Identifier: MPL-2.0
//! Application layer - capability interfaces.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Infrastructure implements application layer ports
//! - Presentation (the `ui` module) depends only on the ports, never on the
//!   concrete adapters; `app` wires the adapters in

pub mod port;
