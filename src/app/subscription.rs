// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events that no widget captured are mapped to [`Shortcut`]s.
//! Pointer events are handled by the image surface widget itself.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Keyboard shortcuts understood by the gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ResetTransform,
    /// Pan one keyboard step; each component is -1, 0 or 1.
    Pan { dx: i8, dy: i8 },
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(&key, modifiers).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

/// Maps a key press to its shortcut, if any.
#[must_use]
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key.as_ref() {
        Key::Named(named) => {
            let pan = modifiers.shift();
            match named {
                Named::ArrowLeft if pan => Some(Shortcut::Pan { dx: -1, dy: 0 }),
                Named::ArrowRight if pan => Some(Shortcut::Pan { dx: 1, dy: 0 }),
                Named::ArrowUp if pan => Some(Shortcut::Pan { dx: 0, dy: -1 }),
                Named::ArrowDown if pan => Some(Shortcut::Pan { dx: 0, dy: 1 }),
                Named::ArrowLeft => Some(Shortcut::Previous),
                Named::ArrowRight => Some(Shortcut::Next),
                _ => None,
            }
        }
        Key::Character(c) if !modifiers.command() => match c {
            // "=" is the unshifted "+" on most layouts.
            "+" | "=" => Some(Shortcut::ZoomIn),
            "-" => Some(Shortcut::ZoomOut),
            "0" => Some(Shortcut::ResetTransform),
            _ => None,
        },
        _ => None,
    }
}
