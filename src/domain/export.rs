// SPDX-License-Identifier: MPL-2.0
//! Export setting value objects.
//!
//! Each setting is a closed enum so a selected value always names exactly one
//! entry of its option list. The string identifiers are the ones used in
//! `settings.toml`.

use std::fmt;
use std::str::FromStr;

/// Error returned when a setting identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSetting {
    pub setting: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {}", self.setting, self.value)
    }
}

impl std::error::Error for UnknownSetting {}

// =============================================================================
// File Format
// =============================================================================

/// Output file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Png,
    Jpg,
    Svg,
    WebP,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Pdf,
        ExportFormat::Png,
        ExportFormat::Jpg,
        ExportFormat::Svg,
        ExportFormat::WebP,
    ];

    /// Identifier used in configuration files.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Svg => "svg",
            ExportFormat::WebP => "webp",
        }
    }

    /// Returns the i18n key of the option label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "export-format-pdf",
            ExportFormat::Png => "export-format-png",
            ExportFormat::Jpg => "export-format-jpg",
            ExportFormat::Svg => "export-format-svg",
            ExportFormat::WebP => "export-format-webp",
        }
    }

    /// Whether the format produces a paginated document that can be previewed.
    #[must_use]
    pub fn is_paginated(self) -> bool {
        matches!(self, ExportFormat::Pdf)
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSetting {
                setting: "format",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Export quality expressed as a raster density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    #[default]
    High,
    Medium,
    Low,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::High, Resolution::Medium, Resolution::Low];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Resolution::High => "high",
            Resolution::Medium => "medium",
            Resolution::Low => "low",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Resolution::High => "export-resolution-high",
            Resolution::Medium => "export-resolution-medium",
            Resolution::Low => "export-resolution-low",
        }
    }

    /// Dots per inch rendered for this quality level.
    #[must_use]
    pub fn dpi(self) -> u32 {
        match self {
            Resolution::High => 300,
            Resolution::Medium => 150,
            Resolution::Low => 72,
        }
    }
}

impl FromStr for Resolution {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resolution| resolution.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSetting {
                setting: "resolution",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Compression
// =============================================================================

/// File size optimization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compression {
    #[default]
    Lossless,
    Lossy,
    /// Written as `none` in configuration files.
    Uncompressed,
}

impl Compression {
    pub const ALL: [Compression; 3] = [
        Compression::Lossless,
        Compression::Lossy,
        Compression::Uncompressed,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Compression::Lossless => "lossless",
            Compression::Lossy => "lossy",
            Compression::Uncompressed => "none",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Compression::Lossless => "export-compression-lossless",
            Compression::Lossy => "export-compression-lossy",
            Compression::Uncompressed => "export-compression-none",
        }
    }
}

impl FromStr for Compression {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|compression| compression.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSetting {
                setting: "compression",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pdf_is_paginated() {
        let paginated: Vec<_> = ExportFormat::ALL
            .into_iter()
            .filter(|format| format.is_paginated())
            .collect();
        assert_eq!(paginated, vec![ExportFormat::Pdf]);
    }

    #[test]
    fn ids_are_unique_per_setting() {
        use std::collections::HashSet;

        let formats: HashSet<_> = ExportFormat::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(formats.len(), ExportFormat::ALL.len());
        let resolutions: HashSet<_> = Resolution::ALL.iter().map(|r| r.id()).collect();
        assert_eq!(resolutions.len(), Resolution::ALL.len());
        let compressions: HashSet<_> = Compression::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(compressions.len(), Compression::ALL.len());
    }

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("WebP".parse::<ExportFormat>(), Ok(ExportFormat::WebP));
        assert_eq!(" medium ".parse::<Resolution>(), Ok(Resolution::Medium));
        assert_eq!("none".parse::<Compression>(), Ok(Compression::Uncompressed));
    }

    #[test]
    fn unknown_identifier_names_the_setting() {
        let err = "tga".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err.setting, "format");
        assert_eq!(err.to_string(), "unknown format value: tga");
    }

    #[test]
    fn defaults_match_initial_panel_values() {
        assert_eq!(ExportFormat::default(), ExportFormat::Pdf);
        assert_eq!(Resolution::default(), Resolution::High);
        assert_eq!(Compression::default(), Compression::Lossless);
    }

    #[test]
    fn resolution_dpi_decreases_with_quality() {
        assert!(Resolution::High.dpi() > Resolution::Medium.dpi());
        assert!(Resolution::Medium.dpi() > Resolution::Low.dpi());
    }
}
