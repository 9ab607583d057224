// SPDX-License-Identifier: MPL-2.0
//! Keyboard input understood by the player.

/// Key identity, reduced to what the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Other,
}

/// Where keyboard focus was when the key went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Nothing in particular is focused (the document body).
    Body,
    /// A text field, button or other control owns the key.
    Control,
}

/// A key press delivered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub target: FocusTarget,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: Key, target: FocusTarget) -> Self {
        Self { key, target }
    }

    /// Returns true for the play/pause shortcut: Space with nothing focused.
    #[must_use]
    pub fn is_play_pause_shortcut(self) -> bool {
        self.key == Key::Space && self.target == FocusTarget::Body
    }
}

impl From<&iced::keyboard::Key> for Key {
    fn from(key: &iced::keyboard::Key) -> Self {
        match key {
            iced::keyboard::Key::Named(iced::keyboard::key::Named::Space) => Key::Space,
            _ => Key::Other,
        }
    }
}
