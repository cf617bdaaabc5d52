// SPDX-License-Identifier: MPL-2.0
//! Data and config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) registered via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_SHELL_DATA_DIR`, `ICED_SHELL_CONFIG_DIR`)
//! 4. **Platform default** from the `dirs` crate, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name used under the platform data/config roots.
pub const APP_NAME: &str = "IcedShell";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_SHELL_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHELL_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the directory overrides given on the command line.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI directory overrides already initialized, ignoring");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_root: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_root.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding the preference storage file.
///
/// Returns `None` if no data directory can be determined, in which case the
/// storage runs ephemeral.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}
