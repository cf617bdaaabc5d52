// SPDX-License-Identifier: MPL-2.0
use iced_shell::app::config::{self, Config};
use iced_shell::app::persisted_state::{FileStorage, MemoryStorage, PreferenceStorage};
use iced_shell::ui::breakpoint::Breakpoint;
use iced_shell::ui::drawer::DrawerController;
use iced_shell::ui::theming::{DisplayMode, ModeController, StaticSystemTheme, MODE_STORAGE_KEY};
use tempfile::tempdir;

const SYSTEM_DARK: StaticSystemTheme = StaticSystemTheme { dark: true };

#[test]
fn first_run_follows_system_then_persisted_choice_wins() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // Empty storage, system prefers dark
    let (storage, warning) = FileStorage::open_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let mut controller = ModeController::new(storage, &SYSTEM_DARK);
    assert_eq!(controller.current(), DisplayMode::Dark);

    assert_eq!(controller.toggle(), DisplayMode::Light);
    assert_eq!(
        controller.storage().read(MODE_STORAGE_KEY).as_deref(),
        Some("light")
    );

    // Reload ignores the system preference this time
    let (storage, _) = FileStorage::open_from(Some(dir.path().to_path_buf()));
    let reloaded = ModeController::new(storage, &SYSTEM_DARK);
    assert_eq!(reloaded.current(), DisplayMode::Light);
}

#[test]
fn unavailable_storage_degrades_to_ephemeral_mode() {
    let mut controller = ModeController::new(FileStorage::default(), &SYSTEM_DARK);

    assert_eq!(controller.toggle(), DisplayMode::Light);
    assert_eq!(controller.current(), DisplayMode::Light);
    assert!(controller.storage().path().is_none());
}

#[test]
fn resolution_always_yields_a_mode() {
    for stored in [None, Some("light"), Some("dark"), Some("garbage")] {
        for dark in [false, true] {
            let storage = match stored {
                Some(value) => MemoryStorage::with_entry(MODE_STORAGE_KEY, value),
                None => MemoryStorage::new(),
            };
            let controller = ModeController::new(storage, &StaticSystemTheme { dark });
            assert!(matches!(
                controller.current(),
                DisplayMode::Light | DisplayMode::Dark
            ));
        }
    }
}

#[test]
fn widening_past_configured_breakpoint_closes_drawer() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.layout.drawer_breakpoint = Some(Breakpoint::Md);
    config::save_to_path(&config, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let breakpoint = loaded.layout.breakpoint();

    // Narrow viewport, user opens the drawer
    let mut drawer = DrawerController::new(breakpoint.is_at_least(700.0));
    drawer.open();
    assert!(drawer.is_open());

    // 800px is still below `md`
    drawer.viewport_changed(breakpoint.is_at_least(800.0));
    assert!(drawer.is_open());

    // Crossing into the large regime force-closes it
    assert!(drawer.viewport_changed(breakpoint.is_at_least(950.0)));
    assert!(!drawer.is_open());
}
