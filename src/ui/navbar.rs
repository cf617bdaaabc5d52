// SPDX-License-Identifier: MPL-2.0
//! App bar with the drawer toggle and the display mode toggle.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::drawer::{DrawerController, Trigger};
use crate::ui::theming::DisplayMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub mode: DisplayMode,
    pub drawer_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    ToggleMode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleMode,
}

/// Process a navbar message and return the corresponding event.
///
/// The drawer toggle is handled here; the display mode is owned by the
/// application and only signalled upwards.
pub fn update(message: Message, drawer: &mut DrawerController) -> Event {
    match message {
        Message::ToggleDrawer => {
            drawer.request_toggle(&Trigger::ToggleButton);
            Event::None
        }
        Message::ToggleMode => Event::ToggleMode,
    }
}

/// Render the app bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let menu_label = if ctx.drawer_open { "✕" } else { "☰" };
    let menu_button = button(Text::new(menu_label))
        .on_press(Message::ToggleDrawer)
        .padding(spacing::XS);

    // Label names the mode a press switches to
    let mode_label = match ctx.mode {
        DisplayMode::Light => "Dark mode",
        DisplayMode::Dark => "Light mode",
    };
    let mode_button = button(Text::new(mode_label))
        .on_press(Message::ToggleMode)
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .height(Length::Fixed(sizing::APP_BAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(Text::new(ctx.title).size(sizing::TITLE_TEXT))
        .push(Space::new().width(Length::Fill))
        .push(mode_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(app_bar_style)
        .into()
}

fn app_bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.strong.color.into()),
        text_color: Some(palette.background.strong.text),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_in_both_modes() {
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            let _element = view(ViewContext {
                title: "Shell",
                mode,
                drawer_open: false,
            });
        }
    }

    #[test]
    fn navbar_view_renders_with_drawer_open() {
        let _element = view(ViewContext {
            title: "Shell",
            mode: DisplayMode::Dark,
            drawer_open: true,
        });
    }

    #[test]
    fn toggle_drawer_changes_state() {
        let mut drawer = DrawerController::new(false);

        let event = update(Message::ToggleDrawer, &mut drawer);
        assert!(drawer.is_open());
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleDrawer, &mut drawer);
        assert!(!drawer.is_open());
        assert_eq!(event, Event::None);
    }

    #[test]
    fn toggle_mode_is_forwarded_without_touching_drawer() {
        let mut drawer = DrawerController::new(false);
        let event = update(Message::ToggleMode, &mut drawer);
        assert_eq!(event, Event::ToggleMode);
        assert!(!drawer.is_open());
    }
}
