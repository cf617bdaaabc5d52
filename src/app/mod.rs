// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the two UI controllers (display mode and drawer)
//! and routes messages to them. The controllers do not know about each
//! other; views receive their state explicitly through view contexts.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::route_event;
pub use view::APP_TITLE;

use crate::ui::breakpoint::Breakpoint;
use crate::ui::drawer::{self, DrawerController, Trigger};
use crate::ui::navbar;
use crate::ui::theming::{DetectedSystemTheme, DisplayMode, ModeController, SystemTheme};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::FileStorage;
use std::fmt;

/// Root Iced application state.
pub struct App {
    mode: ModeController<FileStorage>,
    drawer: DrawerController,
    breakpoint: Breakpoint,
    drawer_width: f32,
    viewport_width: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode.current())
            .field("drawer", &self.drawer.state())
            .field("viewport_width", &self.viewport_width)
            .finish()
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: config.window.size(),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir, flags.config_dir);

    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}, using default settings");
    }
    let settings = window_settings(&config);

    // iced 0.14 requires a `Fn` boot function; the config is consumed once
    let boot_state = RefCell::new(Some(config));
    let boot = move || {
        let config = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(&config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Opens the default preference storage and resolves the display mode
    /// against the desktop's reported theme.
    fn new(config: &Config) -> (Self, Task<Message>) {
        let (storage, warning) = FileStorage::open();
        if let Some(warning) = warning {
            tracing::warn!("{warning}");
        }

        (Self::from_parts(config, storage, &DetectedSystemTheme), Task::none())
    }

    /// Builds the application from explicit collaborators.
    pub fn from_parts(config: &Config, storage: FileStorage, system: &impl SystemTheme) -> Self {
        let breakpoint = config.layout.breakpoint();
        let viewport_width = config.window.size().width;
        let mode = ModeController::new(storage, system);

        tracing::info!(
            mode = %mode.current(),
            ?breakpoint,
            viewport_width,
            "shell initialized"
        );

        Self {
            mode,
            drawer: DrawerController::new(breakpoint.is_at_least(viewport_width)),
            breakpoint,
            drawer_width: config.layout.drawer_width(),
            viewport_width,
        }
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode.current()
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    #[must_use]
    pub fn storage(&self) -> &FileStorage {
        self.mode.storage()
    }

    pub fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    pub fn theme(&self) -> Theme {
        self.mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                match navbar::update(navbar_message, &mut self.drawer) {
                    navbar::Event::ToggleMode => {
                        let mode = self.mode.toggle();
                        tracing::info!(%mode, "display mode toggled");
                    }
                    navbar::Event::None => {}
                }
            }
            Message::Drawer(drawer_message) => drawer::update(drawer_message, &mut self.drawer),
            Message::WindowResized(size) => {
                self.viewport_width = size.width;
                self.drawer
                    .viewport_changed(self.breakpoint.is_at_least(size.width));
            }
            Message::KeyPressed(key) => {
                let trigger = Trigger::Key(key);
                if self.drawer.is_open() && trigger.is_dismissal() {
                    self.drawer.request(false, &trigger);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            mode: self.mode.current(),
            drawer_open: self.drawer.is_open(),
            drawer_width: self.drawer_width,
            viewport_width: self.viewport_width,
            breakpoint: self.breakpoint,
        })
    }
}
