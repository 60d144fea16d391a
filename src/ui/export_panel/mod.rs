// SPDX-License-Identifier: MPL-2.0
//! Export settings panel.
//!
//! Owns the selected format, resolution and compression, one selector per
//! setting, the keyboard focus ring, and the preview overlay while mounted.
//! The preview is only available for paginated formats.

mod component;
mod focus;
mod options;
mod view;

pub use component::{Message, State};
pub use focus::{FocusTarget, SettingId};
pub use options::SettingOptions;
pub use view::{view, ViewContext};
