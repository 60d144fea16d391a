// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus ring over the panel's controls.

use iced::widget::Id;

/// One of the three export settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingId {
    Format,
    Resolution,
    Compression,
}

impl SettingId {
    pub const ALL: [SettingId; 3] = [
        SettingId::Format,
        SettingId::Resolution,
        SettingId::Compression,
    ];

    /// Localization key of the row label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SettingId::Format => "setting-format-label",
            SettingId::Resolution => "setting-resolution-label",
            SettingId::Compression => "setting-compression-label",
        }
    }

    /// Localization key of the row description.
    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            SettingId::Format => "setting-format-description",
            SettingId::Resolution => "setting-resolution-description",
            SettingId::Compression => "setting-compression-description",
        }
    }
}

/// Control holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Setting(SettingId),
    PreviewButton,
}

const ORDER: [FocusTarget; 4] = [
    FocusTarget::Setting(SettingId::Format),
    FocusTarget::Setting(SettingId::Resolution),
    FocusTarget::Setting(SettingId::Compression),
    FocusTarget::PreviewButton,
];

impl FocusTarget {
    /// Id of the container wrapping the control, used to measure its bounds.
    #[must_use]
    pub fn widget_id(self) -> Id {
        Id::new(match self {
            FocusTarget::Setting(SettingId::Format) => "export-format-trigger",
            FocusTarget::Setting(SettingId::Resolution) => "export-resolution-trigger",
            FocusTarget::Setting(SettingId::Compression) => "export-compression-trigger",
            FocusTarget::PreviewButton => "export-preview-button",
        })
    }

    fn is_enabled(self, preview_enabled: bool) -> bool {
        self != FocusTarget::PreviewButton || preview_enabled
    }

    /// Target reached by Tab, wrapping around and skipping disabled controls.
    #[must_use]
    pub fn next(current: Option<Self>, preview_enabled: bool) -> Self {
        let start = current
            .and_then(|target| ORDER.iter().position(|t| *t == target))
            .map_or(0, |index| index + 1);
        Self::walk(start, preview_enabled, |i| i + 1)
    }

    /// Target reached by Shift+Tab.
    #[must_use]
    pub fn previous(current: Option<Self>, preview_enabled: bool) -> Self {
        let start = current
            .and_then(|target| ORDER.iter().position(|t| *t == target))
            .map_or(ORDER.len() - 1, |index| index + ORDER.len() - 1);
        Self::walk(start, preview_enabled, |i| i + ORDER.len() - 1)
    }

    fn walk(start: usize, preview_enabled: bool, step: impl Fn(usize) -> usize) -> Self {
        let mut index = start % ORDER.len();
        // The three settings are always enabled, so this ends within two steps.
        while !ORDER[index].is_enabled(preview_enabled) {
            index = step(index) % ORDER.len();
        }
        ORDER[index]
    }
}
