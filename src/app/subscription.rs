// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only the three lightbox keys are routed. Key presses captured by a
//! focused widget never reach the gallery.

use super::Message;
use crate::gallery::{GalleryEvent, GalleryKey};
use iced::keyboard::{self, key::Named};
use iced::{event, Subscription};

/// Creates the keyboard subscription feeding the gallery.
///
/// The subscription is always active; the controller itself ignores keys
/// while the lightbox is closed.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match status {
        event::Status::Captured => None,
        event::Status::Ignored => match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => gallery_key(named).map(|key| Message::Gallery(GalleryEvent::Key(key))),
            _ => None,
        },
    })
}

/// Maps a named key onto a gallery key.
fn gallery_key(named: Named) -> Option<GalleryKey> {
    match named {
        Named::Escape => Some(GalleryKey::Escape),
        Named::ArrowLeft => Some(GalleryKey::ArrowLeft),
        Named::ArrowRight => Some(GalleryKey::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_keys_are_mapped() {
        assert_eq!(gallery_key(Named::Escape), Some(GalleryKey::Escape));
        assert_eq!(gallery_key(Named::ArrowLeft), Some(GalleryKey::ArrowLeft));
        assert_eq!(gallery_key(Named::ArrowRight), Some(GalleryKey::ArrowRight));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(gallery_key(Named::ArrowUp), None);
        assert_eq!(gallery_key(Named::Enter), None);
        assert_eq!(gallery_key(Named::Space), None);
    }
}
