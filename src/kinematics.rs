// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Inverse kinematics: carriage position to cable lengths.
//!
//! Each cable runs straight from its corner anchor to the carriage, so every length is the
//! hypotenuse of the right triangle formed by the horizontal and vertical offsets between the two.
//! Offsets are taken as integers but all arithmetic is done in `f64` so repeated target updates do
//! not accumulate truncation error.
//!
//! Uses `libm` so the same code runs on the MCU (no `std` float intrinsics) and on the host.

use crate::geometry::{PerAnchor, Point, Workspace};

/// `sqrt(a² + b²)` in double precision.
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    libm::sqrt(a * a + b * b)
}

///
/// Computes the length of every cable for a carriage at `p`.
///
/// # Parameters:
/// - `p`: Target point, relative to the top-left anchor. Points outside the workspace are
///   accepted and still give non-negative lengths.
/// - `workspace`: The rig's work area
///
/// # Returns:
/// - One length per anchor, all derived from the same `(p, workspace)` pair
///
pub fn cable_lengths(p: Point, workspace: &Workspace) -> PerAnchor<f64> {
    let x = p.x as f64;
    let y = p.y as f64;
    let rest_x = workspace.width() as f64 - x;
    let rest_y = workspace.height() as f64 - y;

    PerAnchor::new(
        hypotenuse(x, y),
        hypotenuse(x, rest_y),
        hypotenuse(rest_x, y),
        hypotenuse(rest_x, rest_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Anchor;

    fn cable_length(anchor: Anchor, p: Point, ws: &Workspace) -> f64 {
        cable_lengths(p, ws)[anchor]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hypotenuse_basic() {
        assert!(close(hypotenuse(3.0, 4.0), 5.0));
        assert!(close(hypotenuse(0.0, 0.0), 0.0));
        assert!(close(hypotenuse(-3.0, 4.0), 5.0));
    }

    #[test]
    fn matches_closed_form() {
        let ws = Workspace::new(730, 1210);
        for &(x, y) in &[(0, 0), (17, 42), (605, 365), (1210, 730), (999, 1)] {
            let l = cable_lengths(Point::new(x, y), &ws);
            let (x, y) = (x as f64, y as f64);
            let (w, h) = (1210.0, 730.0);
            assert!(close(l[Anchor::LeftTop], (x * x + y * y).sqrt()));
            assert!(close(l[Anchor::LeftBottom], (x * x + (h - y) * (h - y)).sqrt()));
            assert!(close(l[Anchor::RightTop], ((w - x) * (w - x) + y * y).sqrt()));
            assert!(close(
                l[Anchor::RightBottom],
                ((w - x) * (w - x) + (h - y) * (h - y)).sqrt()
            ));
        }
    }

    #[test]
    fn anchors_have_zero_length_at_their_corner() {
        let ws = Workspace::new(1000, 500);
        assert!(close(cable_length(Anchor::LeftTop, Point::new(0, 0), &ws), 0.0));
        assert!(close(cable_length(Anchor::LeftBottom, Point::new(0, 1000), &ws), 0.0));
        assert!(close(cable_length(Anchor::RightTop, Point::new(500, 0), &ws), 0.0));
        assert!(close(cable_length(Anchor::RightBottom, Point::new(500, 1000), &ws), 0.0));
    }

    #[test]
    fn top_left_corner_of_tall_workspace() {
        let l = cable_lengths(Point::new(0, 0), &Workspace::new(1000, 500));
        assert!(close(l[Anchor::LeftTop], 0.0));
        assert!(close(l[Anchor::LeftBottom], 1000.0));
        assert!(close(l[Anchor::RightTop], 500.0));
        assert!((l[Anchor::RightBottom] - 1118.03).abs() < 0.01);
    }

    #[test]
    fn degenerate_workspace_is_straight_line() {
        // Zero height: both cables on a side coincide.
        let ws = Workspace::new(0, 100);
        let l = cable_lengths(Point::new(30, 0), &ws);
        assert!(close(l[Anchor::LeftTop], 30.0));
        assert!(close(l[Anchor::LeftBottom], 30.0));
        assert!(close(l[Anchor::RightTop], 70.0));
        assert!(close(l[Anchor::RightBottom], 70.0));
    }

    #[test]
    fn out_of_bounds_points_are_non_negative() {
        let ws = Workspace::new(100, 100);
        for &(x, y) in &[(-50, -50), (250, 10), (i32::MIN, i32::MAX)] {
            let l = cable_lengths(Point::new(x, y), &ws);
            for (_, len) in l.iter() {
                assert!(*len >= 0.0 && len.is_finite());
            }
        }
    }
}
