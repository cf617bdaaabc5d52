// SPDX-License-Identifier: MPL-2.0
//! User settings stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[layout]` - Drawer breakpoint and width
//! - `[window]` - Initial window geometry
//!
//! The display mode is not part of this file: it lives in the preference
//! storage (see [`crate::app::persisted_state`]) so toggling never rewrites
//! user-edited settings.
//!
//! # Examples
//!
//! ```no_run
//! use iced_shell::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("drawer breakpoint: {:?}", config.layout.breakpoint());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Drawer layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Breakpoint at which an open drawer is closed automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_breakpoint: Option<Breakpoint>,

    /// Drawer panel width in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_width: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            drawer_breakpoint: Some(DEFAULT_DRAWER_BREAKPOINT),
            drawer_width: Some(DEFAULT_DRAWER_WIDTH),
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.drawer_breakpoint.unwrap_or(DEFAULT_DRAWER_BREAKPOINT)
    }

    /// Drawer width clamped to the supported range.
    #[must_use]
    pub fn drawer_width(&self) -> f32 {
        self.drawer_width
            .unwrap_or(DEFAULT_DRAWER_WIDTH)
            .clamp(MIN_DRAWER_WIDTH, MAX_DRAWER_WIDTH)
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_WINDOW_WIDTH),
            height: Some(DEFAULT_WINDOW_HEIGHT),
        }
    }
}

impl WindowConfig {
    /// Window size with the configured values clamped to the minimum size.
    #[must_use]
    pub fn size(&self) -> iced::Size {
        iced::Size::new(
            self.width
                .unwrap_or(DEFAULT_WINDOW_WIDTH)
                .max(MIN_WINDOW_WIDTH),
            self.height
                .unwrap_or(DEFAULT_WINDOW_HEIGHT)
                .max(MIN_WINDOW_HEIGHT),
        )
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!("failed to load {}: {}", path.display(), err)),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
