// SPDX-License-Identifier: MPL-2.0
//! Export panel state: the three settings, their menus, focus and the preview.

use super::focus::{FocusTarget, SettingId};
use super::options::SettingOptions;
use crate::config::Config;
use crate::document::DocumentSource;
use crate::domain::export::{Compression, ExportFormat, Resolution};
use crate::i18n::fluent::I18n;
use crate::ui::dropdown;
use crate::ui::keys::NavKey;
use crate::ui::measure;
use crate::ui::preview;
use iced::{Rectangle, Size, Task};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Selector(SettingId, dropdown::Message),
    PreviewPressed,
    /// Navigation key while no overlay is mounted.
    Key(NavKey),
    /// Pointer press that no control captured.
    PointerPressed,
    /// Bounds of a trigger whose menu is open; the menu floats below it.
    TriggerMeasured(SettingId, Rectangle),
    ViewportResized(Size),
    Preview(preview::Message),
}

#[derive(Debug)]
pub struct State {
    format: ExportFormat,
    resolution: Resolution,
    compression: Compression,
    options: SettingOptions,
    format_menu: dropdown::State,
    resolution_menu: dropdown::State,
    compression_menu: dropdown::State,
    focus: Option<FocusTarget>,
    preview: Option<preview::State>,
    next_session: u64,
    source: Option<DocumentSource>,
    menu_anchor: Option<(SettingId, Rectangle)>,
    viewport: Option<Size>,
}

impl State {
    pub fn new(config: &Config, i18n: &I18n, source: Option<DocumentSource>) -> Self {
        Self {
            format: config.export.format(),
            resolution: config.export.resolution(),
            compression: config.export.compression(),
            options: SettingOptions::localized(i18n),
            format_menu: dropdown::State::new(),
            resolution_menu: dropdown::State::new(),
            compression_menu: dropdown::State::new(),
            focus: None,
            preview: None,
            next_session: 1,
            source,
            menu_anchor: None,
            viewport: None,
        }
    }

    #[must_use]
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn compression(&self) -> Compression {
        self.compression
    }

    #[must_use]
    pub fn options(&self) -> &SettingOptions {
        &self.options
    }

    #[must_use]
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    #[must_use]
    pub fn menu(&self, setting: SettingId) -> &dropdown::State {
        match setting {
            SettingId::Format => &self.format_menu,
            SettingId::Resolution => &self.resolution_menu,
            SettingId::Compression => &self.compression_menu,
        }
    }

    #[must_use]
    pub fn preview(&self) -> Option<&preview::State> {
        self.preview.as_ref()
    }

    /// Whether the preview control can be activated.
    #[must_use]
    pub fn preview_enabled(&self) -> bool {
        self.format.is_paginated()
    }

    /// Whether the overlay is mounted, closing phase included.
    #[must_use]
    pub fn overlay_requested(&self) -> bool {
        self.preview.is_some()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.open_menu().is_some()
    }

    /// The setting whose menu is open, if any.
    #[must_use]
    pub fn open_menu(&self) -> Option<SettingId> {
        SettingId::ALL
            .into_iter()
            .find(|setting| self.menu(*setting).is_open())
    }

    /// Open menu together with its measured trigger bounds.
    #[must_use]
    pub fn menu_anchor(&self) -> Option<(SettingId, Rectangle)> {
        self.menu_anchor
            .filter(|(setting, _)| self.open_menu() == Some(*setting))
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.preview.as_ref().is_some_and(preview::State::is_animating)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let was_open = self.open_menu();
        let task = self.dispatch(message);
        match self.open_menu() {
            Some(setting) if was_open != Some(setting) => {
                Task::batch([task, self.measure_trigger(setting)])
            }
            Some(_) => task,
            None => {
                self.menu_anchor = None;
                task
            }
        }
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Selector(setting, message) => {
                if message == dropdown::Message::TriggerPressed {
                    self.close_menus_except(Some(setting), dropdown::Message::PointerOutside);
                    self.focus = Some(FocusTarget::Setting(setting));
                }
                self.update_selector(setting, message);
                Task::none()
            }
            Message::PreviewPressed => {
                self.close_menus_except(None, dropdown::Message::PointerOutside);
                self.focus = Some(FocusTarget::PreviewButton);
                self.open_preview()
            }
            Message::Key(key) => self.handle_key(key),
            Message::PointerPressed => {
                self.close_menus_except(None, dropdown::Message::PointerOutside);
                Task::none()
            }
            Message::TriggerMeasured(setting, bounds) => {
                if self.open_menu() == Some(setting) {
                    self.menu_anchor = Some((setting, bounds));
                }
                Task::none()
            }
            Message::ViewportResized(size) => {
                self.viewport = Some(size);
                let remeasure = match self.open_menu() {
                    Some(setting) => self.measure_trigger(setting),
                    None => Task::none(),
                };
                let layout = match self.preview.as_mut() {
                    Some(preview) => preview
                        .handle_message(preview::Message::LaidOut(size))
                        .1
                        .map(Message::Preview),
                    None => Task::none(),
                };
                Task::batch([remeasure, layout])
            }
            Message::Preview(message) => self.update_preview(message),
        }
    }

    fn handle_key(&mut self, key: NavKey) -> Task<Message> {
        if self.preview.is_some() {
            return self.update_preview(preview::Message::Key(key));
        }

        match (self.focus, key) {
            (Some(FocusTarget::Setting(setting)), _) => {
                self.update_selector(setting, dropdown::Message::Key(key));
                if matches!(key, NavKey::Tab | NavKey::BackTab) {
                    self.move_focus(key);
                }
                Task::none()
            }
            (Some(FocusTarget::PreviewButton), key) if key.is_activation() => {
                self.open_preview()
            }
            (_, NavKey::Tab | NavKey::BackTab) => {
                self.move_focus(key);
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn move_focus(&mut self, key: NavKey) {
        let target = if key == NavKey::BackTab {
            FocusTarget::previous(self.focus, self.preview_enabled())
        } else {
            FocusTarget::next(self.focus, self.preview_enabled())
        };
        self.close_menus_except(None, dropdown::Message::FocusLost);
        self.focus = Some(target);
    }

    fn close_menus_except(&mut self, keep: Option<SettingId>, reason: dropdown::Message) {
        for setting in SettingId::ALL {
            if Some(setting) != keep && self.menu(setting).is_open() {
                self.update_selector(setting, reason);
            }
        }
    }

    fn update_selector(&mut self, setting: SettingId, message: dropdown::Message) {
        match setting {
            SettingId::Format => {
                let event = self.format_menu.update(message, &self.options.format, Some(&self.format));
                if let Some(value) = self.settle(setting, event) {
                    self.format = value;
                }
            }
            SettingId::Resolution => {
                let event = self.resolution_menu.update(
                    message,
                    &self.options.resolution,
                    Some(&self.resolution),
                );
                if let Some(value) = self.settle(setting, event) {
                    self.resolution = value;
                }
            }
            SettingId::Compression => {
                let event = self.compression_menu.update(
                    message,
                    &self.options.compression,
                    Some(&self.compression),
                );
                if let Some(value) = self.settle(setting, event) {
                    self.compression = value;
                }
            }
        }
    }

    /// Applies the focus side of a selector event and returns a confirmed value.
    fn settle<V: std::fmt::Debug>(&mut self, setting: SettingId, event: dropdown::Event<V>) -> Option<V> {
        match event {
            dropdown::Event::None => None,
            dropdown::Event::Opened => {
                tracing::debug!(?setting, "Menu opened");
                None
            }
            dropdown::Event::Closed { refocus } => {
                tracing::debug!(?setting, refocus, "Menu closed");
                if refocus {
                    self.focus = Some(FocusTarget::Setting(setting));
                }
                None
            }
            dropdown::Event::Selected(value) => {
                tracing::info!(?setting, ?value, "Export setting changed");
                self.focus = Some(FocusTarget::Setting(setting));
                Some(value)
            }
        }
    }

    fn measure_trigger(&self, setting: SettingId) -> Task<Message> {
        measure::bounds_of(FocusTarget::Setting(setting).widget_id())
            .map(move |bounds| Message::TriggerMeasured(setting, bounds))
    }

    /// Pointer and keyboard activation both animate from the preview
    /// button's centre.
    fn open_preview(&mut self) -> Task<Message> {
        if !self.preview_enabled() || self.preview.is_some() {
            return Task::none();
        }

        let session = self.next_session;
        self.next_session += 1;

        let (preview, task) = preview::State::open(session, self.source.clone(), Instant::now());
        self.preview = Some(preview);

        let layout = match self.viewport {
            Some(size) => Task::done(preview::Message::LaidOut(size)),
            None => Task::none(),
        };
        let anchor = measure::bounds_of(FocusTarget::PreviewButton.widget_id())
            .map(preview::Message::AnchorMeasured);
        Task::batch([task, layout, anchor]).map(Message::Preview)
    }

    fn update_preview(&mut self, message: preview::Message) -> Task<Message> {
        let Some(preview) = self.preview.as_mut() else {
            return Task::none();
        };

        let (effect, task) = preview.handle_message(message);
        if effect == preview::Effect::Closed {
            self.preview = None;
            self.focus = Some(FocusTarget::PreviewButton);
        }
        task.map(Message::Preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CLOSE_GRACE_PERIOD;
    use std::time::Duration;

    fn panel() -> State {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        // Renderer tasks are never executed here, so the path need not exist.
        let source = DocumentSource::page_images("missing-document");
        State::new(&Config::default(), &i18n, Some(source))
    }

    fn select(panel: &mut State, setting: SettingId, message: dropdown::Message) {
        let _ = panel.update(Message::Selector(setting, message));
    }

    #[test]
    fn starts_with_defaults_and_pdf_preview_enabled() {
        let panel = panel();
        assert_eq!(panel.format(), ExportFormat::Pdf);
        assert_eq!(panel.resolution(), Resolution::High);
        assert_eq!(panel.compression(), Compression::Lossless);
        assert!(panel.preview_enabled());
        assert!(!panel.overlay_requested());
    }

    #[test]
    fn keyboard_selection_changes_format() {
        let mut panel = panel();
        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        assert!(panel.menu_open());

        let _ = panel.update(Message::Key(NavKey::Down));
        let _ = panel.update(Message::Key(NavKey::Enter));

        assert_eq!(panel.format(), ExportFormat::Png);
        assert!(!panel.menu_open());
        assert_eq!(panel.focus(), Some(FocusTarget::Setting(SettingId::Format)));
    }

    #[test]
    fn png_disables_preview_and_pdf_enables_it() {
        let mut panel = panel();
        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        select(&mut panel, SettingId::Format, dropdown::Message::OptionPressed(1));
        assert_eq!(panel.format(), ExportFormat::Png);
        assert!(!panel.preview_enabled());

        let _ = panel.update(Message::PreviewPressed);
        assert!(!panel.overlay_requested());

        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        select(&mut panel, SettingId::Format, dropdown::Message::OptionPressed(0));
        assert!(panel.preview_enabled());
    }

    #[test]
    fn opening_one_menu_closes_the_other() {
        let mut panel = panel();
        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        select(&mut panel, SettingId::Resolution, dropdown::Message::TriggerPressed);

        assert!(!panel.menu(SettingId::Format).is_open());
        assert!(panel.menu(SettingId::Resolution).is_open());
    }

    #[test]
    fn outside_press_closes_menu_without_change() {
        let mut panel = panel();
        select(&mut panel, SettingId::Compression, dropdown::Message::TriggerPressed);
        let _ = panel.update(Message::Key(NavKey::Down));
        let _ = panel.update(Message::PointerPressed);

        assert!(!panel.menu_open());
        assert_eq!(panel.compression(), Compression::Lossless);
    }

    #[test]
    fn escape_keeps_value_and_focus() {
        let mut panel = panel();
        select(&mut panel, SettingId::Resolution, dropdown::Message::TriggerPressed);
        let _ = panel.update(Message::Key(NavKey::Down));
        let _ = panel.update(Message::Key(NavKey::Escape));

        assert_eq!(panel.resolution(), Resolution::High);
        assert_eq!(panel.focus(), Some(FocusTarget::Setting(SettingId::Resolution)));
    }

    #[test]
    fn tab_closes_menu_and_moves_focus() {
        let mut panel = panel();
        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        let _ = panel.update(Message::Key(NavKey::Tab));

        assert!(!panel.menu_open());
        assert_eq!(panel.focus(), Some(FocusTarget::Setting(SettingId::Resolution)));
    }

    #[test]
    fn keyboard_activation_opens_preview() {
        let mut panel = panel();
        let _ = panel.update(Message::Key(NavKey::BackTab));
        assert_eq!(panel.focus(), Some(FocusTarget::PreviewButton));

        let _ = panel.update(Message::Key(NavKey::Enter));
        assert!(panel.overlay_requested());
    }

    #[test]
    fn overlay_suspends_panel_keys() {
        let mut panel = panel();
        let _ = panel.update(Message::PreviewPressed);
        assert!(panel.overlay_requested());

        let _ = panel.update(Message::Key(NavKey::Tab));
        assert_eq!(panel.focus(), Some(FocusTarget::PreviewButton));
        let _ = panel.update(Message::Key(NavKey::Right));
        assert_eq!(panel.preview().map(|p| p.page().get()), Some(2));
    }

    #[test]
    fn overlay_unmounts_after_grace_period() {
        let mut panel = panel();
        let _ = panel.update(Message::PreviewPressed);
        let _ = panel.update(Message::Preview(preview::Message::CloseRequested));

        assert!(panel.overlay_requested());
        assert!(panel.preview().is_some_and(|p| p.phase().is_closing()));

        let later = Instant::now() + CLOSE_GRACE_PERIOD + Duration::from_millis(10);
        let _ = panel.update(Message::Preview(preview::Message::Tick(later)));
        assert!(!panel.overlay_requested());

        // A late tick for the dismissed overlay is harmless.
        let _ = panel.update(Message::Preview(preview::Message::Tick(later)));
        assert!(!panel.overlay_requested());
    }

    #[test]
    fn reopening_uses_fresh_session_and_first_page() {
        let mut panel = panel();
        let _ = panel.update(Message::PreviewPressed);
        let first = panel.preview().map(preview::State::session);
        let _ = panel.update(Message::Key(NavKey::Right));
        let _ = panel.update(Message::Preview(preview::Message::CloseRequested));
        let later = Instant::now() + CLOSE_GRACE_PERIOD * 2;
        let _ = panel.update(Message::Preview(preview::Message::Tick(later)));

        let _ = panel.update(Message::PreviewPressed);
        let second = panel.preview().map(preview::State::session);
        assert_ne!(first, second);
        assert_eq!(panel.preview().map(|p| p.page().get()), Some(1));
    }

    fn button_bounds() -> Rectangle {
        Rectangle::new(iced::Point::new(640.0, 520.0), Size::new(110.0, 36.0))
    }

    /// Delivers what the runtime sends back after the overlay mounts.
    fn lay_out_overlay(panel: &mut State, viewport: Size) {
        let _ = panel.update(Message::Preview(preview::Message::LaidOut(viewport)));
        let _ = panel.update(Message::Preview(preview::Message::AnchorMeasured(
            button_bounds(),
        )));
    }

    #[test]
    fn keyboard_and_pointer_activation_share_button_origin() {
        let viewport = Size::new(1000.0, 800.0);

        let mut by_keyboard = panel();
        let _ = by_keyboard.update(Message::ViewportResized(viewport));
        let _ = by_keyboard.update(Message::Key(NavKey::BackTab));
        let _ = by_keyboard.update(Message::Key(NavKey::Enter));
        lay_out_overlay(&mut by_keyboard, viewport);

        let mut by_pointer = panel();
        let _ = by_pointer.update(Message::ViewportResized(viewport));
        let _ = by_pointer.update(Message::PreviewPressed);
        lay_out_overlay(&mut by_pointer, viewport);

        // Modal sits at (100, 60); the button centre is (695, 538).
        let expected = Some(iced::Vector::new(595.0, 478.0));
        assert_eq!(by_keyboard.preview().and_then(preview::State::origin), expected);
        assert_eq!(by_pointer.preview().and_then(preview::State::origin), expected);
    }

    #[test]
    fn open_menu_anchors_to_its_trigger() {
        let mut panel = panel();
        let trigger = Rectangle::new(iced::Point::new(300.0, 120.0), Size::new(180.0, 36.0));

        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        assert_eq!(panel.menu_anchor(), None);

        let _ = panel.update(Message::TriggerMeasured(SettingId::Resolution, trigger));
        assert_eq!(panel.menu_anchor(), None);

        let _ = panel.update(Message::TriggerMeasured(SettingId::Format, trigger));
        assert_eq!(panel.menu_anchor(), Some((SettingId::Format, trigger)));

        let _ = panel.update(Message::Key(NavKey::Escape));
        assert_eq!(panel.menu_anchor(), None);

        // A late measurement for a closed menu is dropped.
        let _ = panel.update(Message::TriggerMeasured(SettingId::Format, trigger));
        assert_eq!(panel.menu_anchor(), None);

        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        assert_eq!(panel.menu_anchor(), None);
    }

    #[test]
    fn switching_menus_drops_previous_anchor() {
        let mut panel = panel();
        let trigger = Rectangle::new(iced::Point::new(300.0, 120.0), Size::new(180.0, 36.0));

        select(&mut panel, SettingId::Format, dropdown::Message::TriggerPressed);
        let _ = panel.update(Message::TriggerMeasured(SettingId::Format, trigger));
        select(&mut panel, SettingId::Compression, dropdown::Message::TriggerPressed);

        assert_eq!(panel.open_menu(), Some(SettingId::Compression));
        assert_eq!(panel.menu_anchor(), None);
    }

    #[test]
    fn config_selects_initial_values() {
        let config: Config = toml::from_str(
            "[export]\nformat = \"png\"\nresolution = \"low\"\ncompression = \"none\"\n",
        )
        .expect("valid config");
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        let panel = State::new(&config, &i18n, None);

        assert_eq!(panel.format(), ExportFormat::Png);
        assert_eq!(panel.resolution(), Resolution::Low);
        assert_eq!(panel.compression(), Compression::Uncompressed);
        assert!(!panel.preview_enabled());
    }
}
