// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{config, App, Message};
use crate::gallery::GalleryEvent;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(event) => self.handle_gallery_event(event),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::DismissWarning => self.warning = None,
        }
        Task::none()
    }

    fn handle_gallery_event(&mut self, event: GalleryEvent) {
        let was_locked = self.controller.scroll_locked();
        let changed = self.controller.dispatch(event.clone());

        tracing::debug!(
            ?event,
            changed,
            selected = ?self.controller.selected_index(),
            visible = self.controller.visible_len(),
            "gallery event"
        );

        let locked = self.controller.scroll_locked();
        if locked != was_locked {
            tracing::trace!(locked, "page scroll lock changed");
        }
    }

    fn handle_toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.config.general.theme_mode = self.theme_mode;
        tracing::info!(theme = ?self.theme_mode, "theme changed");

        if let Err(error) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%error, "failed to save settings");
            self.warning = Some("notification-config-save-error".to_string());
        }
    }
}
