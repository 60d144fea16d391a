// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the panel, localization
//! and configuration.
//!
//! The `App` struct wires together the export panel, the preview document
//! source and the theme, and translates runtime events into component
//! messages.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};
pub use subscription::InputScope;

use crate::config::{self, Config};
use crate::document::DocumentSource;
use crate::i18n::fluent::I18n;
use crate::ui::export_panel;
use crate::ui::preview;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
const MIN_WINDOW_WIDTH: f32 = 640.0;
const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    panel: export_panel::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("overlay_requested", &self.panel.overlay_requested())
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a reusable boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the preview document: CLI flag first, then `[preview] document`.
fn document_source(flags: &Flags, config: &Config) -> Option<DocumentSource> {
    flags
        .document
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.preview.document.clone())
        .map(DocumentSource::page_images)
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::with_config(&flags, &config, config_warning), Task::none())
    }

    /// Builds the application from already-loaded configuration.
    pub fn with_config(flags: &Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let source = document_source(flags, config);
        match &source {
            Some(source) => tracing::info!("Preview document: {}", source.locator()),
            None => tracing::info!("No preview document configured"),
        }

        let panel = export_panel::State::new(config, &i18n, source);

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            panel,
        }
    }

    #[must_use]
    pub fn panel(&self) -> &export_panel::State {
        &self.panel
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.panel.overlay_requested() {
            let preview = self.i18n.tr("preview-title");
            format!("{preview} - {app_name}")
        } else {
            app_name
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(InputScope::of(&self.panel));
        let tick_sub = subscription::create_tick_subscription(self.panel.is_animating());
        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(message) => self.panel.update(message).map(Message::Panel),
            Message::Tick(now) => self
                .panel
                .update(export_panel::Message::Preview(preview::Message::Tick(now)))
                .map(Message::Panel),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        export_panel::view(export_panel::ViewContext {
            state: &self.panel,
            i18n: &self.i18n,
        })
        .map(Message::Panel)
    }
}
