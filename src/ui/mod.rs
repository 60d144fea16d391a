// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`export_panel`] - Export settings panel and focus ring
//! - [`preview`] - Modal document preview with paging and zoom
//!
//! # Shared Infrastructure
//!
//! - [`dropdown`] - Single-choice selector with keyboard navigation
//! - [`keys`] - Reduction of keyboard events to navigation keys
//! - [`measure`] - Widget bounds lookup by id
//! - [`state`] - Range-checked page and zoom values
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod dropdown;
pub mod export_panel;
pub mod keys;
pub mod measure;
pub mod preview;
pub mod state;
pub mod styles;
pub mod theming;
