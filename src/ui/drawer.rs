// SPDX-License-Identifier: MPL-2.0
//! Responsive side drawer.
//!
//! [`DrawerController`] owns the open/closed state. Besides explicit
//! open/close/toggle calls it reacts to the viewport entering the large
//! regime by closing an open drawer. The reaction is edge-triggered: it
//! fires on a `false -> true` change of the viewport signal only, so a
//! drawer reopened on an already large viewport stays open.

use crate::ui::design_tokens::spacing;
use iced::keyboard::{self, key};
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// What produced an open/close intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Pointer,
    ToggleButton,
    Key(keyboard::Key),
}

impl Trigger {
    /// Returns `true` for keys that move keyboard focus rather than activate.
    #[must_use]
    pub fn is_focus_traversal(&self) -> bool {
        matches!(
            self,
            Trigger::Key(keyboard::Key::Named(
                key::Named::Tab
                    | key::Named::Shift
                    | key::Named::ArrowUp
                    | key::Named::ArrowDown
                    | key::Named::ArrowLeft
                    | key::Named::ArrowRight
            ))
        )
    }

    /// Returns `true` for keys that dismiss an open drawer.
    ///
    /// Only `Escape` qualifies; any other key press leaves the drawer alone.
    #[must_use]
    pub fn is_dismissal(&self) -> bool {
        matches!(self, Trigger::Key(keyboard::Key::Named(key::Named::Escape)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawerController {
    state: DrawerState,
    /// Last observed "at least small screen" signal.
    at_least_small: bool,
}

impl DrawerController {
    /// Creates a closed drawer for a viewport currently in the given regime.
    #[must_use]
    pub fn new(at_least_small: bool) -> Self {
        Self {
            state: DrawerState::Closed,
            at_least_small,
        }
    }

    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    pub fn open(&mut self) {
        self.state = DrawerState::Open;
    }

    pub fn close(&mut self) {
        self.state = DrawerState::Closed;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            DrawerState::Open => DrawerState::Closed,
            DrawerState::Closed => DrawerState::Open,
        };
    }

    /// Applies an open (`true`) or close (`false`) intent.
    ///
    /// Returns `false` when the trigger was filtered out.
    pub fn request(&mut self, open: bool, trigger: &Trigger) -> bool {
        if trigger.is_focus_traversal() {
            return false;
        }
        if open {
            self.open();
        } else {
            self.close();
        }
        true
    }

    /// Applies a toggle intent, subject to the same filter as [`Self::request`].
    pub fn request_toggle(&mut self, trigger: &Trigger) -> bool {
        if trigger.is_focus_traversal() {
            return false;
        }
        self.toggle();
        true
    }

    /// Feeds a new viewport signal.
    ///
    /// Returns `true` if the drawer was force-closed by this change.
    pub fn viewport_changed(&mut self, at_least_small: bool) -> bool {
        let entered_large = at_least_small && !self.at_least_small;
        self.at_least_small = at_least_small;

        if entered_large && self.is_open() {
            tracing::debug!("viewport entered large regime, closing drawer");
            self.close();
            return true;
        }
        false
    }
}

/// Messages emitted by the drawer panel.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

pub fn update(message: Message, drawer: &mut DrawerController) {
    match message {
        Message::Close => {
            drawer.request(false, &Trigger::Pointer);
        }
    }
}

/// Contextual data needed to render the drawer panel.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub width: f32,
}

/// Renders the drawer panel with an empty content slot.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.title).size(18.0))
        .push(Space::new().width(Length::Fill))
        .push(button(Text::new("×")).on_press(Message::Close).padding(spacing::XXS));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header);

    Container::new(content)
        .width(Length::Fixed(ctx.width))
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}
