// SPDX-License-Identifier: MPL-2.0
//! `export_options` is an export settings panel built with the Iced GUI
//! framework.
//!
//! Three keyboard-navigable selectors choose the output format, resolution
//! and compression. For paginated formats a modal preview pages through a
//! rendered document with zoom. Strings are localized with Fluent and the
//! initial settings come from an optional `settings.toml`.

pub mod app;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
