// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::drawer;
use crate::ui::navbar;
use iced::keyboard;
use iced::Size;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Drawer(drawer::Message),
    /// The window was resized to the given logical size.
    WindowResized(Size),
    /// A key press no widget captured.
    KeyPressed(keyboard::Key),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for the preference storage).
    /// Takes precedence over `ICED_SHELL_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SHELL_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
