#![forbid(unsafe_code)]

//! Rectangles, sizes, and margins in terminal-cell coordinates.
//!
//! All types here are plain `Copy` value types with no interior state.
//! Coordinates are 0-indexed with the origin at the top-left, and a
//! [`Rect`] covers the half-open region `[x, x+width) x [y, y+height)`.

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle used for layout regions and hit testing.
///
/// Zero width or height is valid and denotes an empty region; an empty
/// rectangle contains no points, not even its own origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a rectangle from its corner and dimensions.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    ///
    /// Typically used for the full terminal frame.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// The rectangle's dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge (inclusive).
    #[inline]
    pub const fn left(&self) -> u16 {
        self.x
    }

    /// Top edge (inclusive).
    #[inline]
    pub const fn top(&self) -> u16 {
        self.y
    }

    /// Right edge (exclusive), saturating at `u16::MAX`.
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive), saturating at `u16::MAX`.
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Number of cells covered.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Whether the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Hit test: whether the cell at `(x, y)` lies inside the rectangle.
    ///
    /// Left/top edges are inclusive, right/bottom edges exclusive.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The overlapping region with `other`, or `None` if they are disjoint.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// The overlapping region with `other`; empty if they are disjoint.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Shrink the rectangle by a margin on each side.
    ///
    /// Width and height clamp to zero when the margin exceeds them.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self
                .width
                .saturating_sub(margin.left)
                .saturating_sub(margin.right),
            height: self
                .height
                .saturating_sub(margin.top)
                .saturating_sub(margin.bottom),
        }
    }
}

/// Per-side cell counts for margins and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// The same value on every side.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Left and right only.
    pub const fn horizontal(val: u16) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Top and bottom only.
    pub const fn vertical(val: u16) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Explicit values, clockwise from the top.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combined left + right margin.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Combined top + bottom margin.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<u16> for Sides {
    fn from(val: u16) -> Self {
        Self::all(val)
    }
}

impl From<(u16, u16)> for Sides {
    fn from((vertical, horizontal): (u16, u16)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides, Size};
    use proptest::prelude::*;

    #[test]
    fn contains_boundary() {
        let r = Rect::new(0, 0, 5, 5);
        assert!(r.contains(0, 0));
        assert!(r.contains(4, 4));
        assert!(!r.contains(5, 4));
        assert!(!r.contains(4, 5));
    }

    #[test]
    fn contains_offset_rect() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(5, 5, 0, 0);
        assert!(!r.contains(5, 5));
    }

    #[test]
    fn from_size_sits_at_origin() {
        let r = Rect::from_size(Size::new(80, 24));
        assert_eq!(r, Rect::new(0, 0, 80, 24));
        assert_eq!(r.size(), Size::new(80, 24));
    }

    #[test]
    fn edges_saturate_near_max() {
        let r = Rect::new(u16::MAX - 5, u16::MAX - 3, 100, 100);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
    }

    #[test]
    fn area_and_is_empty() {
        assert_eq!(Rect::new(0, 0, 10, 20).area(), 200);
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(Rect::new(5, 5, 10, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn intersection_of_overlap() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));
        assert_eq!(a.intersection_opt(&b), Some(Rect::new(2, 2, 2, 2)));
    }

    #[test]
    fn intersection_of_adjacent_is_empty() {
        // Shared edge only; right edge is exclusive.
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 0, 5, 5);
        assert!(a.intersection(&b).is_empty());
        assert_eq!(a.intersection_opt(&b), None);
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(3, 3, 5, 5);
        assert_eq!(a.union(&b), Rect::new(0, 0, 8, 8));

        let outer = Rect::new(0, 0, 10, 10);
        let inner = Rect::new(2, 2, 3, 3);
        assert_eq!(outer.union(&inner), outer);
    }

    #[test]
    fn inner_applies_margin() {
        let r = Rect::new(0, 0, 20, 20);
        let inner = r.inner(Sides::new(2, 3, 4, 5));
        assert_eq!(inner, Rect::new(5, 2, 12, 14));
    }

    #[test]
    fn inner_clamps_oversized_margin() {
        let r = Rect::new(0, 0, 10, 10);
        let inner = r.inner(Sides::all(20));
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }

    #[test]
    fn sides_constructors() {
        assert_eq!(Sides::all(3), Sides::from(3));
        assert_eq!(Sides::horizontal(2), Sides::new(0, 2, 0, 2));
        assert_eq!(Sides::vertical(4), Sides::new(4, 0, 4, 0));
        assert_eq!(Sides::from((1, 2)), Sides::new(1, 2, 1, 2));
    }

    #[test]
    fn sides_sums_saturate() {
        let s = Sides::new(u16::MAX, 0, u16::MAX, 0);
        assert_eq!(s.vertical_sum(), u16::MAX);
        assert_eq!(Sides::new(1, 2, 3, 4).horizontal_sum(), 6);
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (0..500u16, 0..500u16, 0..300u16, 0..300u16)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn contains_agrees_with_intersection(r in arb_rect(), x in 0..900u16, y in 0..900u16) {
            let point = Rect::new(x, y, 1, 1);
            prop_assert_eq!(r.contains(x, y), !r.intersection(&point).is_empty());
        }

        #[test]
        fn intersection_is_within_both(a in arb_rect(), b in arb_rect()) {
            if let Some(i) = a.intersection_opt(&b) {
                prop_assert!(i.x >= a.x && i.right() <= a.right());
                prop_assert!(i.x >= b.x && i.right() <= b.right());
                prop_assert!(i.y >= a.y && i.bottom() <= a.bottom());
                prop_assert!(i.y >= b.y && i.bottom() <= b.bottom());
                prop_assert!(!i.is_empty());
            }
        }

        #[test]
        fn union_contains_both(a in arb_rect(), b in arb_rect()) {
            let u = a.union(&b);
            prop_assert!(u.x <= a.x && u.right() >= a.right());
            prop_assert!(u.x <= b.x && u.right() >= b.right());
            prop_assert!(u.y <= a.y && u.bottom() >= a.bottom());
            prop_assert!(u.y <= b.y && u.bottom() >= b.bottom());
        }
    }
}
