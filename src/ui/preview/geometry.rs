// SPDX-License-Identifier: MPL-2.0
//! Modal placement and the scale animation around its transform origin.

use crate::config::{MODAL_HEIGHT_RATIO, MODAL_WIDTH_RATIO};
use iced::{Point, Rectangle, Size, Vector};

/// Scale of the modal at the very start of the entrance animation.
const MIN_SCALE: f32 = 0.1;

/// Centered modal bounds for the given viewport.
#[must_use]
pub fn modal_bounds(viewport: Size) -> Rectangle {
    let size = Size::new(
        viewport.width * MODAL_WIDTH_RATIO,
        viewport.height * MODAL_HEIGHT_RATIO,
    );
    Rectangle::new(
        Point::new(
            (viewport.width - size.width) / 2.0,
            (viewport.height - size.height) / 2.0,
        ),
        size,
    )
}

/// Transform origin as an offset from the modal's top-left corner.
///
/// `anchor` is the centre of the control that invoked the preview; until it
/// is known the origin is the modal centre. The offset may lie outside the
/// modal.
#[must_use]
pub fn transform_origin(anchor: Option<Point>, modal: Rectangle) -> Vector {
    let point = anchor.unwrap_or_else(|| modal.center());
    Vector::new(point.x - modal.x, point.y - modal.y)
}

/// Cubic ease-out of a linear progress value.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Modal bounds at `reveal` (0 hidden, 1 fully shown), scaled around `origin`.
#[must_use]
pub fn revealed_bounds(modal: Rectangle, origin: Vector, reveal: f32) -> Rectangle {
    let scale = MIN_SCALE + (1.0 - MIN_SCALE) * reveal.clamp(0.0, 1.0);
    let pivot = Point::new(modal.x + origin.x, modal.y + origin.y);

    Rectangle {
        x: pivot.x + (modal.x - pivot.x) * scale,
        y: pivot.y + (modal.y - pivot.y) * scale,
        width: modal.width * scale,
        height: modal.height * scale,
    }
}
