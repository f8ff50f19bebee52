// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Workspace model for the four-anchor rig.
//!
//! All lengths are in "points", the integer length unit derived from the physical anchor spacing
//! and [`POINTS_PER_MILLIMETER`](crate::config::POINTS_PER_MILLIMETER). The origin is the
//! top-left anchor; `x` grows to the right and `y` grows downwards.

use core::ops::{Index, IndexMut};

/// Rectangular work area spanned by the four anchors.
///
/// Built once at startup from [`config`](crate::config) and never changed afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    height: u32,
    width: u32,
}

impl Workspace {
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// True if `p` lies inside `[0, width] × [0, height]`.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x as i64 <= self.width as i64 && p.y as i64 <= self.height as i64
    }
}

/// Carriage target, relative to the top-left anchor.
///
/// Not bounds-checked; see [`Workspace::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Corner winch positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anchor {
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl Anchor {
    /// All anchors in ordinal order. Multi-axis work is always done in this order.
    pub const ALL: [Anchor; 4] = [
        Anchor::LeftTop,
        Anchor::LeftBottom,
        Anchor::RightTop,
        Anchor::RightBottom,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Anchor::LeftTop => 0,
            Anchor::LeftBottom => 1,
            Anchor::RightTop => 2,
            Anchor::RightBottom => 3,
        }
    }

    /// Two-letter tag used on the serial line.
    pub const fn tag(self) -> &'static str {
        match self {
            Anchor::LeftTop => "LT",
            Anchor::LeftBottom => "LB",
            Anchor::RightTop => "RT",
            Anchor::RightBottom => "RB",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.tag() == tag)
    }
}

/// One value per anchor, stored in a fixed array indexed by [`Anchor::index`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PerAnchor<T> {
    values: [T; 4],
}

impl<T> PerAnchor<T> {
    pub const fn new(left_top: T, left_bottom: T, right_top: T, right_bottom: T) -> Self {
        Self {
            values: [left_top, left_bottom, right_top, right_bottom],
        }
    }

    pub fn from_fn(mut f: impl FnMut(Anchor) -> T) -> Self {
        Self {
            values: Anchor::ALL.map(&mut f),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerAnchor<U> {
        PerAnchor {
            values: self.values.map(f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Anchor, &T)> {
        Anchor::ALL.into_iter().zip(self.values.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Anchor, &mut T)> {
        Anchor::ALL.into_iter().zip(self.values.iter_mut())
    }
}

impl<T> Index<Anchor> for PerAnchor<T> {
    type Output = T;

    #[inline]
    fn index(&self, anchor: Anchor) -> &T {
        &self.values[anchor.index()]
    }
}

impl<T> IndexMut<Anchor> for PerAnchor<T> {
    #[inline]
    fn index_mut(&mut self, anchor: Anchor) -> &mut T {
        &mut self.values[anchor.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_order_matches_index() {
        for (i, a) in Anchor::ALL.into_iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }

    #[test]
    fn anchor_tags_round_trip() {
        for a in Anchor::ALL {
            assert_eq!(Anchor::from_tag(a.tag()), Some(a));
        }
        assert_eq!(Anchor::from_tag("lt"), None);
        assert_eq!(Anchor::from_tag("XX"), None);
    }

    #[test]
    fn per_anchor_indexing() {
        let mut v = PerAnchor::new(1, 2, 3, 4);
        assert_eq!(v[Anchor::LeftBottom], 2);
        assert_eq!(v[Anchor::RightBottom], 4);

        v[Anchor::RightTop] = 30;
        assert_eq!(v[Anchor::RightTop], 30);

        let tags = PerAnchor::from_fn(Anchor::tag);
        assert_eq!(tags[Anchor::LeftTop], "LT");

        let doubled = v.map(|x| x * 2);
        assert_eq!(doubled, PerAnchor::new(2, 4, 60, 8));
    }

    #[test]
    fn workspace_contains_edges() {
        let ws = Workspace::new(1000, 500);
        assert_eq!(ws.height(), 1000);
        assert_eq!(ws.width(), 500);
        assert!(ws.contains(Point::new(0, 0)));
        assert!(ws.contains(Point::new(500, 1000)));
        assert!(!ws.contains(Point::new(501, 10)));
        assert!(!ws.contains(Point::new(-1, 10)));
    }
}
