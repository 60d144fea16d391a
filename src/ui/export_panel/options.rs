// SPDX-License-Identifier: MPL-2.0
//! Localized option lists for the three export settings.

use crate::domain::export::{Compression, ExportFormat, Resolution};
use crate::i18n::fluent::I18n;
use crate::ui::dropdown::SelectOption;

#[derive(Debug, Clone)]
pub struct SettingOptions {
    pub format: Vec<SelectOption<ExportFormat>>,
    pub resolution: Vec<SelectOption<Resolution>>,
    pub compression: Vec<SelectOption<Compression>>,
}

impl SettingOptions {
    #[must_use]
    pub fn localized(i18n: &I18n) -> Self {
        Self {
            format: ExportFormat::ALL
                .iter()
                .map(|format| SelectOption::new(*format, i18n.tr(format.label_key())))
                .collect(),
            resolution: Resolution::ALL
                .iter()
                .map(|resolution| {
                    let dpi = resolution.dpi().to_string();
                    SelectOption::new(
                        *resolution,
                        i18n.tr_with_args(resolution.label_key(), &[("dpi", &dpi)]),
                    )
                })
                .collect(),
            compression: Compression::ALL
                .iter()
                .map(|compression| SelectOption::new(*compression, i18n.tr(compression.label_key())))
                .collect(),
        }
    }
}
