// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

use crate::ui::breakpoint::Breakpoint;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;

/// Minimum window width; narrow enough to reach the `xs` regime.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Breakpoint at which the viewport counts as "at least small screen".
pub const DEFAULT_DRAWER_BREAKPOINT: Breakpoint = Breakpoint::Sm;

/// Width of the side drawer panel.
pub const DEFAULT_DRAWER_WIDTH: f32 = 240.0;

pub const MIN_DRAWER_WIDTH: f32 = 120.0;

pub const MAX_DRAWER_WIDTH: f32 = 480.0;
