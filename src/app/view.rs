// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the app bar, the drawer (when open) and the content region.

use super::Message;
use crate::ui::breakpoint::Breakpoint;
use crate::ui::design_tokens::spacing;
use crate::ui::drawer::{self, ViewContext as DrawerViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::theming::DisplayMode;
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};

pub const APP_TITLE: &str = "Iced Shell";
const DRAWER_TITLE: &str = "Navigation";

/// Context required to render the application view.
pub struct ViewContext {
    pub mode: DisplayMode,
    pub drawer_open: bool,
    pub drawer_width: f32,
    pub viewport_width: f32,
    pub breakpoint: Breakpoint,
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let navbar = navbar::view(NavbarViewContext {
        title: APP_TITLE,
        mode: ctx.mode,
        drawer_open: ctx.drawer_open,
    })
    .map(Message::Navbar);

    let mut body = Row::new().height(Length::Fill);

    if ctx.drawer_open {
        body = body.push(
            drawer::view(DrawerViewContext {
                title: DRAWER_TITLE,
                width: ctx.drawer_width,
            })
            .map(Message::Drawer),
        );
    }

    body = body.push(view_content(&ctx));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(body)
        .into()
}

fn view_content<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let regime = if ctx.breakpoint.is_at_least(ctx.viewport_width) {
        "large"
    } else {
        "small"
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(format!("Display mode: {}", ctx.mode)))
        .push(Text::new(format!(
            "Viewport: {:.0}px ({:?}, {} layout)",
            ctx.viewport_width,
            Breakpoint::for_width(ctx.viewport_width),
            regime
        )));

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
