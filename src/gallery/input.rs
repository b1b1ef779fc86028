// SPDX-License-Identifier: MPL-2.0
//! Translation of user input into gallery operations.
//!
//! The presentation layer turns its native events (button presses, clicks,
//! key presses) into [`GalleryEvent`]s and hands them to
//! [`GalleryController::dispatch`]. Events are applied one at a time, in
//! delivery order.

use super::GalleryController;
use crate::domain::photo::PhotoId;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    /// Close the lightbox.
    Escape,
    /// Show the previous photo.
    ArrowLeft,
    /// Show the next photo.
    ArrowRight,
}

impl GalleryKey {
    /// Parses a DOM-style key name (`"Escape"`, `"ArrowLeft"`, `"ArrowRight"`).
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// An input event addressed to the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A category button was activated.
    CategorySelected(String),
    /// A grid item was activated.
    ItemActivated(PhotoId),
    /// The lightbox "previous" control was activated.
    PrevRequested,
    /// The lightbox "next" control was activated.
    NextRequested,
    /// The lightbox close control or its backdrop was activated.
    CloseRequested,
    /// A key was pressed.
    Key(GalleryKey),
}

impl GalleryController {
    /// Applies an input event.
    ///
    /// Returns `true` if the event changed what the gallery shows. Key
    /// events are ignored while the lightbox is closed.
    pub fn dispatch(&mut self, event: GalleryEvent) -> bool {
        match event {
            GalleryEvent::CategorySelected(category) => {
                self.set_category(&category);
                true
            }
            GalleryEvent::ItemActivated(id) => self.open_by_id(&id),
            GalleryEvent::PrevRequested => self.show_previous(),
            GalleryEvent::NextRequested => self.show_next(),
            GalleryEvent::CloseRequested => self.close_if_open(),
            GalleryEvent::Key(key) => {
                if !self.modal_open() {
                    return false;
                }
                match key {
                    GalleryKey::Escape => self.close_if_open(),
                    GalleryKey::ArrowLeft => self.show_previous(),
                    GalleryKey::ArrowRight => self.show_next(),
                }
            }
        }
    }

    fn close_if_open(&mut self) -> bool {
        let was_open = self.modal_open();
        self.close();
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::{Category, PhotoRecord};

    fn gallery() -> GalleryController {
        let records = ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, category)| {
                PhotoRecord::new(
                    PhotoId::new(format!("p{i}")),
                    Category::new(*category).expect("valid category"),
                    format!("p{i}.jpg"),
                    format!("Photo {i}"),
                    "",
                )
            })
            .collect();
        GalleryController::new(records)
    }

    #[test]
    fn key_names_follow_dom_convention() {
        assert_eq!(GalleryKey::from_key_name("Escape"), Some(GalleryKey::Escape));
        assert_eq!(
            GalleryKey::from_key_name("ArrowLeft"),
            Some(GalleryKey::ArrowLeft)
        );
        assert_eq!(
            GalleryKey::from_key_name("ArrowRight"),
            Some(GalleryKey::ArrowRight)
        );
        assert_eq!(GalleryKey::from_key_name("Enter"), None);
        assert_eq!(GalleryKey::from_key_name("escape"), None);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut gallery = gallery();
        let before = gallery.clone();

        assert!(!gallery.dispatch(GalleryEvent::Key(GalleryKey::ArrowRight)));
        assert!(!gallery.dispatch(GalleryEvent::Key(GalleryKey::Escape)));
        assert_eq!(gallery, before);
    }

    #[test]
    fn keys_navigate_and_close_while_open() {
        let mut gallery = gallery();
        assert!(gallery.dispatch(GalleryEvent::ItemActivated(PhotoId::new("p1"))));

        assert!(gallery.dispatch(GalleryEvent::Key(GalleryKey::ArrowRight)));
        assert_eq!(gallery.selected_index(), Some(2));

        assert!(!gallery.dispatch(GalleryEvent::Key(GalleryKey::ArrowRight)));
        assert_eq!(gallery.selected_index(), Some(2));

        assert!(gallery.dispatch(GalleryEvent::Key(GalleryKey::ArrowLeft)));
        assert_eq!(gallery.selected_index(), Some(1));

        assert!(gallery.dispatch(GalleryEvent::Key(GalleryKey::Escape)));
        assert!(!gallery.modal_open());
    }

    #[test]
    fn button_events_map_to_operations() {
        let mut gallery = gallery();

        assert!(gallery.dispatch(GalleryEvent::CategorySelected("b".into())));
        assert_eq!(gallery.visible_len(), 1);

        assert!(!gallery.dispatch(GalleryEvent::ItemActivated(PhotoId::new("p0"))));
        assert!(gallery.dispatch(GalleryEvent::ItemActivated(PhotoId::new("p1"))));
        assert!(!gallery.dispatch(GalleryEvent::NextRequested));
        assert!(!gallery.dispatch(GalleryEvent::PrevRequested));

        assert!(gallery.dispatch(GalleryEvent::CloseRequested));
        assert!(!gallery.dispatch(GalleryEvent::CloseRequested));
    }

    #[test]
    fn events_apply_in_delivery_order() {
        let mut gallery = gallery();
        let events = [
            GalleryEvent::ItemActivated(PhotoId::new("p0")),
            GalleryEvent::NextRequested,
            GalleryEvent::NextRequested,
            GalleryEvent::NextRequested,
            GalleryEvent::PrevRequested,
        ];

        for event in events {
            gallery.dispatch(event);
        }

        assert_eq!(gallery.selected_index(), Some(1));
    }
}
