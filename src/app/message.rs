// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::GalleryEvent;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Input addressed to the gallery controller.
    Gallery(GalleryEvent),
    /// Flip between light and dark theme and persist the choice.
    ToggleTheme,
    /// Hide the settings warning banner.
    DismissWarning,
}

impl From<GalleryEvent> for Message {
    fn from(event: GalleryEvent) -> Self {
        Message::Gallery(event)
    }
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Category selected at startup instead of "all".
    pub category: Option<String>,
    /// Manifest file or category directory to load.
    pub source: Option<String>,
}
