// SPDX-License-Identifier: MPL-2.0
//! `iced_shell` is a responsive application shell built with the Iced GUI framework.
//!
//! It manages two independent pieces of UI state: a light/dark display mode
//! that is persisted between sessions and falls back to the desktop's
//! preference, and a side drawer that closes itself when the window grows
//! past a breakpoint.

pub mod app;
pub mod error;
pub mod ui;
