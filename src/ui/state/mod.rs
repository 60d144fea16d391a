// SPDX-License-Identifier: MPL-2.0
//! Range-checked value types shared by the preview widgets.

pub mod page;
pub mod zoom;

pub use page::PageNumber;
pub use zoom::ZoomScale;
