// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Current cable lengths of the rig.

use crate::geometry::{Anchor, PerAnchor, Point, Workspace};
use crate::kinematics;

/// The four cable lengths, one per [`Anchor`].
///
/// A `RigState` is a value: [`move_to`](Self::move_to) returns a new state instead of mutating
/// this one, so all four lengths always come from the same target point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RigState {
    lengths: PerAnchor<f64>,
}

impl RigState {
    /// State for carriage position `p`.
    #[must_use]
    pub fn move_to(&self, p: Point, workspace: &Workspace) -> RigState {
        RigState {
            lengths: kinematics::cable_lengths(p, workspace),
        }
    }

    #[inline]
    pub fn length(&self, anchor: Anchor) -> f64 {
        self.lengths[anchor]
    }

    #[inline]
    pub fn lengths(&self) -> &PerAnchor<f64> {
        &self.lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let rig = RigState::default();
        for a in Anchor::ALL {
            assert_eq!(rig.length(a), 0.0);
        }
    }

    #[test]
    fn move_to_corners() {
        let ws = Workspace::new(1000, 500);
        let rig = RigState::default().move_to(Point::new(0, 0), &ws);
        assert_eq!(rig.length(Anchor::LeftTop), 0.0);
        assert_eq!(rig.length(Anchor::LeftBottom), 1000.0);
        assert_eq!(rig.length(Anchor::RightTop), 500.0);
        assert!((rig.length(Anchor::RightBottom) - 1118.034).abs() < 1e-3);

        let rig = rig.move_to(Point::new(500, 1000), &ws);
        assert_eq!(rig.length(Anchor::RightBottom), 0.0);
    }

    #[test]
    fn move_to_leaves_previous_state_untouched() {
        let ws = Workspace::new(800, 600);
        let first = RigState::default().move_to(Point::new(100, 200), &ws);
        let snapshot = *first.lengths();

        let second = first.move_to(Point::new(550, 20), &ws);
        assert_eq!(*first.lengths(), snapshot);
        assert_ne!(*second.lengths(), snapshot);

        // Independent of the starting state.
        let fresh = RigState::default().move_to(Point::new(550, 20), &ws);
        assert_eq!(fresh, second);
    }
}
