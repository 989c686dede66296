// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery screen, localization and
//! settings, and routes every message through a single `update`.

pub mod config;
mod message;
pub mod paths;
pub mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::Shortcut;

use crate::gallery::{default_gallery, ArtLibrary, GalleryNavigator};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme, Vector};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    gallery: gallery::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("theme_mode", &self.theme.mode)
            .field("index", &self.gallery.navigator().current_index())
            .field("transform", self.gallery.transform())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function; flags are cheap to clone.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, &config::Config::default())
    }
}

impl App {
    /// Loads settings, assets and translations, then starts on the first piece.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!(config_dir = ?flags.config_dir, "{}", app.i18n.tr(&key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            pieces = app.gallery.navigator().count(),
            theme = ?app.theme.mode,
            "gallery ready"
        );

        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(lang: Option<String>, config: &config::Config) -> Self {
        let i18n = I18n::new(lang, config);
        let theme = AppTheme::new(config.general.theme_mode);

        let pieces = default_gallery();
        let (library, failures) = ArtLibrary::load(&pieces);
        for failure in &failures {
            tracing::warn!(asset = failure.asset_name(), error = %failure, "artwork unavailable");
        }
        if library.is_empty() {
            tracing::warn!("no artwork could be decoded");
        } else {
            tracing::debug!(decoded = library.len(), "artwork library loaded");
        }

        let gallery = gallery::State::new(GalleryNavigator::new(pieces), library, &config.viewer);

        Self {
            i18n,
            theme,
            gallery,
        }
    }

    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let title = self.gallery.navigator().current().title();
        format!("{title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let message = match message {
            Message::Gallery(message) => message,
            Message::Shortcut(shortcut) => self.shortcut_message(shortcut),
        };
        self.gallery.handle_message(message);
        Task::none()
    }

    fn shortcut_message(&self, shortcut: Shortcut) -> gallery::Message {
        match shortcut {
            Shortcut::Previous => gallery::Message::Previous,
            Shortcut::Next => gallery::Message::Next,
            Shortcut::ZoomIn => gallery::Message::ZoomIn,
            Shortcut::ZoomOut => gallery::Message::ZoomOut,
            Shortcut::ResetTransform => gallery::Message::ResetTransform,
            Shortcut::Pan { dx, dy } => {
                let step = self.gallery.keyboard_pan_step();
                gallery::Message::PanBy(Vector::new(f32::from(dx) * step, f32::from(dy) * step))
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            gallery: &self.gallery,
        })
    }
}
