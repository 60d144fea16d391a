// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Preview zoom factor bounds and step
//! - **Overlay**: Preview overlay animation timings and geometry
//! - **Localization**: Fallback locale

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied when the preview opens (1.0 = natural page size).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 2.0;

/// Amount added or removed by a single zoom in/out step.
pub const ZOOM_STEP_FACTOR: f32 = 0.25;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Time the preview stays mounted after a close request so its exit
/// animation can play.
pub const CLOSE_GRACE_PERIOD: Duration = Duration::from_millis(200);

/// Duration of the preview entrance animation.
pub const OPEN_ANIMATION: Duration = Duration::from_millis(200);

/// Interval of the animation tick while the preview opens or closes.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Fraction of the window width used by the preview modal.
pub const MODAL_WIDTH_RATIO: f32 = 0.8;

/// Fraction of the window height used by the preview modal.
pub const MODAL_HEIGHT_RATIO: f32 = 0.85;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(MIN_ZOOM_FACTOR < DEFAULT_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR < MAX_ZOOM_FACTOR);
    assert!(ZOOM_STEP_FACTOR > 0.0);
    assert!(MODAL_WIDTH_RATIO > 0.0 && MODAL_WIDTH_RATIO <= 1.0);
    assert!(MODAL_HEIGHT_RATIO > 0.0 && MODAL_HEIGHT_RATIO <= 1.0);
};
