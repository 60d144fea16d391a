// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Global listeners exist only while the state that needs them does: the
//! outside-pointer listener while a menu is open, overlay key dispatch while
//! the preview is mounted, and animation ticks while it opens or closes.
//! Leaving the state drops the subscription on the next update.

use super::Message;
use crate::config::ANIMATION_TICK;
use crate::ui::export_panel;
use crate::ui::keys::NavKey;
use crate::ui::preview;
use iced::{event, mouse, time, window, Event, Subscription};

/// Which listeners the current state needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputScope {
    /// Keys drive the panel's focus ring and selectors.
    Panel,
    /// Like `Panel`, plus uncaptured pointer presses close the menu.
    MenuOpen,
    /// Keys go to the preview overlay; the panel ignores them.
    Overlay,
}

impl InputScope {
    #[must_use]
    pub fn of(panel: &export_panel::State) -> Self {
        if panel.overlay_requested() {
            InputScope::Overlay
        } else if panel.menu_open() {
            InputScope::MenuOpen
        } else {
            InputScope::Panel
        }
    }
}

fn panel(message: export_panel::Message) -> Option<Message> {
    Some(Message::Panel(message))
}

/// Window size tracking shared by every scope.
fn ambient(event: &Event) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            panel(export_panel::Message::ViewportResized(*size))
        }
        _ => None,
    }
}

fn key(event: &Event, status: event::Status) -> Option<Message> {
    match (event, status) {
        (Event::Keyboard(keyboard_event), event::Status::Ignored) => {
            NavKey::from_event(keyboard_event).and_then(|key| panel(export_panel::Message::Key(key)))
        }
        _ => None,
    }
}

fn overlay_key(event: &Event, status: event::Status) -> Option<Message> {
    match (event, status) {
        (Event::Keyboard(keyboard_event), event::Status::Ignored) => NavKey::from_event(keyboard_event)
            .and_then(|key| panel(export_panel::Message::Preview(preview::Message::Key(key)))),
        _ => None,
    }
}

/// Creates the event subscription for the given scope.
pub fn create_event_subscription(scope: InputScope) -> Subscription<Message> {
    match scope {
        InputScope::Panel => {
            event::listen_with(|event, status, _window| ambient(&event).or_else(|| key(&event, status)))
        }
        InputScope::Overlay => event::listen_with(|event, status, _window| {
            ambient(&event).or_else(|| overlay_key(&event, status))
        }),
        InputScope::MenuOpen => event::listen_with(|event, status, _window| {
            if let (Event::Mouse(mouse::Event::ButtonPressed(_)), event::Status::Ignored) =
                (&event, status)
            {
                return panel(export_panel::Message::PointerPressed);
            }
            ambient(&event).or_else(|| key(&event, status))
        }),
    }
}

/// Creates the animation tick subscription, or none when nothing animates.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
