// SPDX-License-Identifier: MPL-2.0
//! Preview zoom factor.

use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_STEP_FACTOR};

/// Zoom factor, guaranteed to be within the valid range (0.5–2.0).
///
/// Stepping past either bound is a no-op, so callers never clamp.
///
/// # Example
///
/// ```
/// use export_options::ui::state::ZoomScale;
///
/// let zoom = ZoomScale::default().zoom_in().zoom_in();
/// assert_eq!(zoom.percent(), 150);
/// assert_eq!(ZoomScale::new(9.0).value(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whole percentage shown to the user (1.25 → 125).
    #[must_use]
    pub fn percent(self) -> u32 {
        // Range is bounded to [50, 200], the cast cannot truncate.
        (self.0 * 100.0).round() as u32
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP_FACTOR)
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP_FACTOR)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}
