// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message` type, an `update` function and a `view` function fed
//! by an explicit `ViewContext`.
//!
//! - [`theming`] - Display mode resolution, persistence and toggling
//! - [`drawer`] - Responsive side drawer state and panel
//! - [`navbar`] - App bar with drawer and mode toggles
//! - [`breakpoint`] - Named viewport-width thresholds
//! - [`design_tokens`] - Spacing and sizing constants

pub mod breakpoint;
pub mod design_tokens;
pub mod drawer;
pub mod navbar;
pub mod theming;
