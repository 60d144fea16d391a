// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::export_panel;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(export_panel::Message),
    /// Animation tick while the preview opens or closes.
    Tick(Instant),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `EXPORT_OPTIONS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Document shown by the preview, overriding `[preview] document`.
    pub document: Option<String>,
}
