// SPDX-License-Identifier: MPL-2.0
//! Querying the on-screen bounds of a widget by [`Id`].
//!
//! Only widgets that report their id to operations can be found; wrap the
//! target in a `container(..).id(..)`.

use iced::advanced::widget::operation::{Operation, Outcome};
use iced::advanced::widget::{self, Id};
use iced::{Rectangle, Task};

/// Finds the bounds of the first container carrying `target`.
#[derive(Debug)]
pub struct FindBounds {
    target: Id,
    found: Option<Rectangle>,
}

impl FindBounds {
    #[must_use]
    pub fn new(target: Id) -> Self {
        Self {
            target,
            found: None,
        }
    }
}

impl Operation<Rectangle> for FindBounds {
    fn traverse(&mut self, operate: &mut dyn FnMut(&mut dyn Operation<Rectangle>)) {
        if self.found.is_none() {
            operate(self);
        }
    }

    fn container(&mut self, id: Option<&Id>, bounds: Rectangle) {
        if self.found.is_none() && id == Some(&self.target) {
            self.found = Some(bounds);
        }
    }

    fn finish(&self) -> Outcome<Rectangle> {
        match self.found {
            Some(bounds) => Outcome::Some(bounds),
            None => Outcome::None,
        }
    }
}

/// Task yielding the bounds of the widget with `id` after the next layout.
///
/// Produces nothing when no such widget is in the tree.
pub fn bounds_of(id: Id) -> Task<Rectangle> {
    widget::operate(FindBounds::new(id))
}
