// SPDX-License-Identifier: MPL-2.0
//! Keyboard keys understood by the panel widgets.
//!
//! Raw Iced keyboard events are reduced to this small set before they reach
//! component state, so the state machines stay independent of the toolkit.

use iced::keyboard::{self, key::Named, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Escape,
    Tab,
    /// Shift+Tab.
    BackTab,
}

impl NavKey {
    /// Maps a key press to a navigation key, ignoring everything else.
    #[must_use]
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        match key {
            Key::Named(Named::ArrowUp) => Some(NavKey::Up),
            Key::Named(Named::ArrowDown) => Some(NavKey::Down),
            Key::Named(Named::ArrowLeft) => Some(NavKey::Left),
            Key::Named(Named::ArrowRight) => Some(NavKey::Right),
            Key::Named(Named::Enter) => Some(NavKey::Enter),
            Key::Named(Named::Space) => Some(NavKey::Space),
            Key::Named(Named::Escape) => Some(NavKey::Escape),
            Key::Named(Named::Tab) if modifiers.shift() => Some(NavKey::BackTab),
            Key::Named(Named::Tab) => Some(NavKey::Tab),
            _ => None,
        }
    }

    /// Extracts a navigation key from a key-press event.
    #[must_use]
    pub fn from_event(event: &keyboard::Event) -> Option<Self> {
        match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => Self::from_key(key, *modifiers),
            _ => None,
        }
    }

    /// Whether this key activates the focused control.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, NavKey::Enter | NavKey::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_activation_keys_are_mapped() {
        let none = Modifiers::empty();
        assert_eq!(
            NavKey::from_key(&Key::Named(Named::ArrowDown), none),
            Some(NavKey::Down)
        );
        assert_eq!(
            NavKey::from_key(&Key::Named(Named::Space), none),
            Some(NavKey::Space)
        );
        assert_eq!(
            NavKey::from_key(&Key::Named(Named::Escape), none),
            Some(NavKey::Escape)
        );
    }

    #[test]
    fn shift_tab_is_back_tab() {
        assert_eq!(
            NavKey::from_key(&Key::Named(Named::Tab), Modifiers::SHIFT),
            Some(NavKey::BackTab)
        );
        assert_eq!(
            NavKey::from_key(&Key::Named(Named::Tab), Modifiers::empty()),
            Some(NavKey::Tab)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(
            NavKey::from_key(&Key::Character("a".into()), Modifiers::empty()),
            None
        );
        assert_eq!(
            NavKey::from_key(&Key::Named(Named::F11), Modifiers::empty()),
            None
        );
    }

    #[test]
    fn only_enter_and_space_activate() {
        assert!(NavKey::Enter.is_activation());
        assert!(NavKey::Space.is_activation());
        assert!(!NavKey::Down.is_activation());
    }
}
