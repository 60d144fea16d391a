// SPDX-License-Identifier: MPL-2.0
//! One-based page position inside a previewed document.

use std::fmt;
use std::num::NonZeroU32;

/// Current page, always at least 1.
///
/// The upper bound depends on the document, which may not be known yet, so
/// it is passed to the operations that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page number; zero becomes the first page.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(NonZeroU32::new(page).unwrap_or(NonZeroU32::MIN))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based index for renderers.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Whether a following page may exist. An unknown count never blocks.
    #[must_use]
    pub fn has_next(self, count: Option<NonZeroU32>) -> bool {
        count.is_none_or(|count| self.0 < count)
    }

    #[must_use]
    pub fn has_previous(self) -> bool {
        self.0 > NonZeroU32::MIN
    }

    /// Next page, or `self` when already on the last known page.
    #[must_use]
    pub fn next(self, count: Option<NonZeroU32>) -> Self {
        if self.has_next(count) {
            Self(self.0.saturating_add(1))
        } else {
            self
        }
    }

    /// Previous page, or `self` on the first page.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::new(self.0.get() - 1)
    }

    /// Pulls the page back inside a freshly learned count.
    #[must_use]
    pub fn clamp_to(self, count: NonZeroU32) -> Self {
        Self(self.0.min(count))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
