// SPDX-License-Identifier: MPL-2.0
//! Modal preview of the exported document.
//!
//! The overlay pages through a document one rendered page at a time and can
//! zoom between 50% and 200%. The close control, a backdrop press and Escape
//! all start the same grace period; once it elapses the overlay reports
//! [`Effect::Closed`] and its owner drops it.

mod component;
mod geometry;
mod lifecycle;
mod view;

pub use component::{DocumentStatus, Effect, Message, PageView, State};
pub use lifecycle::{GraceTimer, Phase};
pub use view::{view, ViewContext};
