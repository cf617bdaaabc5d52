// SPDX-License-Identifier: MPL-2.0
//! Display mode resolution and persistence.
//!
//! The initial mode is resolved once, when the [`ModeController`] is built:
//! a valid persisted preference always wins, otherwise the system preference
//! decides. Every toggle afterwards is written straight back to storage.

use crate::app::persisted_state::PreferenceStorage;
use iced::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key holding the serialized [`DisplayMode`].
pub const MODE_STORAGE_KEY: &str = "colorMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDisplayMode(pub String);

impl fmt::Display for InvalidDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid display mode: {:?}", self.0)
    }
}

impl std::error::Error for InvalidDisplayMode {}

impl FromStr for DisplayMode {
    type Err = InvalidDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(InvalidDisplayMode(other.to_string())),
        }
    }
}

impl From<DisplayMode> for Theme {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Theme::Light,
            DisplayMode::Dark => Theme::Dark,
        }
    }
}

/// Read-only view of the environment's preferred color scheme.
pub trait SystemTheme {
    fn prefers_dark(&self) -> bool;
}

/// Queries the desktop environment through `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectedSystemTheme;

impl SystemTheme for DetectedSystemTheme {
    fn prefers_dark(&self) -> bool {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => true,
            Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) => false,
            Err(err) => {
                tracing::debug!(%err, "system theme detection failed, assuming light");
                false
            }
        }
    }
}

/// A fixed answer, for tests and for platforms without detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSystemTheme {
    pub dark: bool,
}

impl SystemTheme for StaticSystemTheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// Returns the persisted mode, if one is stored and valid.
pub fn persisted_mode(storage: &impl PreferenceStorage) -> Option<DisplayMode> {
    let raw = storage.read(MODE_STORAGE_KEY)?;
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!(%err, "ignoring persisted display mode");
            None
        }
    }
}

/// Determines the initial display mode.
pub fn resolve(storage: &impl PreferenceStorage, system: &impl SystemTheme) -> DisplayMode {
    if let Some(mode) = persisted_mode(storage) {
        return mode;
    }

    if system.prefers_dark() {
        DisplayMode::Dark
    } else {
        DisplayMode::Light
    }
}

/// Owns the current display mode and the storage it is persisted to.
#[derive(Debug)]
pub struct ModeController<S> {
    current: DisplayMode,
    storage: S,
}

impl<S: PreferenceStorage> ModeController<S> {
    /// Builds the controller, running resolution against `storage` and `system`.
    pub fn new(storage: S, system: &impl SystemTheme) -> Self {
        let current = resolve(&storage, system);
        tracing::debug!(mode = %current, "resolved display mode");
        Self { current, storage }
    }

    #[must_use]
    pub fn current(&self) -> DisplayMode {
        self.current
    }

    /// Flips the mode and persists the new value.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory mode
    /// still changes.
    pub fn toggle(&mut self) -> DisplayMode {
        self.current = self.current.toggled();

        if let Err(err) = self.storage.write(MODE_STORAGE_KEY, self.current.as_str()) {
            tracing::warn!(%err, mode = %self.current, "failed to persist display mode");
        }

        self.current
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current.into()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persisted_state::MemoryStorage;
    use crate::error::{Error, Result};

    const SYSTEM_DARK: StaticSystemTheme = StaticSystemTheme { dark: true };
    const SYSTEM_LIGHT: StaticSystemTheme = StaticSystemTheme { dark: false };

    /// Storage whose writes always fail.
    #[derive(Default)]
    struct ReadOnlyStorage {
        value: Option<String>,
        attempts: usize,
    }

    impl PreferenceStorage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Option<String> {
            self.value.clone()
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            self.attempts += 1;
            Err(Error::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn persisted_dark_wins_over_light_system() {
        let storage = MemoryStorage::with_entry(MODE_STORAGE_KEY, "dark");
        assert_eq!(resolve(&storage, &SYSTEM_LIGHT), DisplayMode::Dark);
    }

    #[test]
    fn persisted_light_wins_over_dark_system() {
        let storage = MemoryStorage::with_entry(MODE_STORAGE_KEY, "light");
        assert_eq!(resolve(&storage, &SYSTEM_DARK), DisplayMode::Light);
    }

    #[test]
    fn absent_preference_follows_system() {
        let storage = MemoryStorage::new();
        assert_eq!(resolve(&storage, &SYSTEM_DARK), DisplayMode::Dark);
        assert_eq!(resolve(&storage, &SYSTEM_LIGHT), DisplayMode::Light);
    }

    #[test]
    fn corrupt_preference_is_treated_as_absent() {
        for raw in ["", "Dark", "purple", " light"] {
            let storage = MemoryStorage::with_entry(MODE_STORAGE_KEY, raw);
            assert_eq!(resolve(&storage, &SYSTEM_DARK), DisplayMode::Dark, "{raw:?}");
        }
    }

    #[test]
    fn toggle_twice_restores_mode_and_persists_second_value() {
        let mut controller = ModeController::new(MemoryStorage::new(), &SYSTEM_LIGHT);
        let initial = controller.current();

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.current(), initial);
        assert_eq!(
            controller.storage().read(MODE_STORAGE_KEY).as_deref(),
            Some(initial.as_str())
        );
        assert_eq!(controller.storage().writes, 2);
    }

    #[test]
    fn every_toggle_writes_immediately() {
        let mut controller = ModeController::new(MemoryStorage::new(), &SYSTEM_DARK);
        assert_eq!(controller.storage().writes, 0);

        assert_eq!(controller.toggle(), DisplayMode::Light);
        assert_eq!(controller.storage().writes, 1);
        assert_eq!(
            controller.storage().read(MODE_STORAGE_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn failed_write_still_toggles_in_memory() {
        let mut controller = ModeController::new(ReadOnlyStorage::default(), &SYSTEM_LIGHT);

        assert_eq!(controller.toggle(), DisplayMode::Dark);
        assert_eq!(controller.current(), DisplayMode::Dark);
        assert_eq!(controller.storage().attempts, 1);
    }

    #[test]
    fn display_mode_round_trips_through_str() {
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            assert_eq!(mode.as_str().parse::<DisplayMode>(), Ok(mode));
        }
    }

    #[test]
    fn mode_maps_to_builtin_theme() {
        assert_eq!(Theme::from(DisplayMode::Light), Theme::Light);
        assert_eq!(Theme::from(DisplayMode::Dark), Theme::Dark);
    }

    #[test]
    fn detected_system_theme_does_not_panic() {
        // Depends on the host desktop, so only check it returns
        let _ = DetectedSystemTheme.prefers_dark();
    }
}
