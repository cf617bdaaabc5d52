// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes feed the drawer's viewport signal; uncaptured key presses
//! are forwarded so an open drawer can be dismissed from the keyboard.

use super::Message;
use iced::{event, keyboard, window, Event, Subscription};

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(event, status))
}

/// Maps a native event to an application message.
pub fn route_event(event: Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    }
}
