// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking for click and drag recognition.

use canopy_tree::NodeId;
use kurbo::Point;

use crate::event::PointerButton;

/// An active pointer press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Press {
    /// Node under the pointer at press time; the drag candidate.
    pub(crate) target: Option<NodeId>,
    /// Nothing was hit at press time, so a drag belongs to the scene.
    pub(crate) on_background: bool,
    /// Pointer position at press time.
    pub(crate) down_position: Point,
    /// Button that was pressed.
    pub(crate) button: PointerButton,
    /// True once movement exceeded the drag threshold.
    pub(crate) distance_exceeded: bool,
}

impl Press {
    pub(crate) fn new(target: Option<NodeId>, position: Point, button: PointerButton) -> Self {
        Self {
            target,
            on_background: target.is_none(),
            down_position: position,
            button,
            distance_exceeded: false,
        }
    }

    /// Record movement; returns `true` the first time it passes `threshold`.
    pub(crate) fn on_move(&mut self, position: Point, threshold: f64) -> bool {
        if self.distance_exceeded {
            return false;
        }
        if self.down_position.distance(position) > threshold {
            self.distance_exceeded = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_crossed_once() {
        let mut press = Press::new(None, Point::new(10.0, 10.0), PointerButton::Primary);
        assert!(!press.on_move(Point::new(13.0, 14.0), 5.0), "exactly 5px away");
        assert!(press.on_move(Point::new(20.0, 10.0), 5.0));
        assert!(!press.on_move(Point::new(40.0, 10.0), 5.0));
        assert!(press.distance_exceeded);
    }
}
