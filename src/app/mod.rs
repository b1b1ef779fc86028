// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery controller.
//!
//! The `App` struct wires together the gallery, localization and persisted
//! preferences. It owns a single [`GalleryController`]; every click and key
//! press becomes a [`GalleryEvent`](crate::gallery::GalleryEvent) applied to
//! it, and the view is re-derived from the controller afterwards.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::photo::PhotoRecord;
use crate::error::Error;
use crate::gallery::GalleryController;
use crate::i18n::I18n;
use crate::manifest;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: GalleryController,
    config: Config,
    theme_mode: ThemeMode,
    /// Why the gallery source could not be loaded, shown in place of the grid.
    load_error: Option<Error>,
    /// Whether a gallery source was given at all.
    has_source: bool,
    /// i18n key of a settings warning shown under the header.
    warning: Option<String>,
    /// Explicit config directory; `None` uses the resolution in [`paths`].
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("filter", self.controller.active_filter())
            .field("modal", &self.controller.modal())
            .field("load_error", &self.load_error)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the launcher flags.
    ///
    /// The gallery source is loaded synchronously: a manifest is a small
    /// text file and a directory scan only lists file names.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let records = flags.source.as_deref().map(|source| {
            let path = Path::new(source);
            tracing::info!(source = %path.display(), "loading gallery");
            manifest::load(path)
        });

        let mut app = Self::from_parts(i18n, config, records, flags.category.as_deref(), None);
        if let Some(key) = config_warning {
            tracing::warn!(key = %key, "settings could not be loaded, using defaults");
            app.warning = Some(key);
        }

        (app, Task::none())
    }

    /// Assembles the application state from already-loaded parts.
    ///
    /// `records` is `None` when no gallery source was given.
    fn from_parts(
        i18n: I18n,
        config: Config,
        records: Option<Result<Vec<PhotoRecord>, Error>>,
        initial_category: Option<&str>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let has_source = records.is_some();
        let (mut controller, load_error) =
            match records.map(|loaded| loaded.and_then(GalleryController::try_new)) {
                Some(Ok(controller)) => (controller, None),
                Some(Err(error)) => {
                    tracing::error!(%error, "gallery source rejected");
                    (GalleryController::default(), Some(error))
                }
                None => (GalleryController::default(), None),
            };
        if let Some(category) = initial_category {
            controller.set_category(category);
        }
        tracing::info!(
            photos = controller.all_records().len(),
            categories = controller.categories().len(),
            filter = %controller.active_filter(),
            "gallery ready"
        );

        Self {
            i18n,
            controller,
            theme_mode: config.general.theme_mode,
            config,
            load_error,
            has_source,
            warning: None,
            config_dir,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.controller.current_display() {
            Some(display) => format!("{} - {app_name}", display.record.title()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            gallery: &self.config.gallery,
            theme_mode: self.theme_mode,
            load_error: self.load_error.as_ref(),
            has_source: self.has_source,
            warning: self.warning.as_deref(),
        })
    }
}
