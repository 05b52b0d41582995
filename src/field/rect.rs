//! Point and Rect: coordinate primitives for marking the field.

/// A cell coordinate on the field.
///
/// Coordinates are signed so that out-of-range input (including negative
/// values typed at the prompt) can be represented and rejected by the
/// field instead of being silently wrapped.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate (column of the land matrix).
    pub x: i32,
    /// Y coordinate (row of the land matrix).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Offset the point by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle with inclusive bounds on both axes.
///
/// Always normalized: `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Rect {
    /// Build a rectangle from any two opposite corners, in any order.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Check that `bottom` lies below and to the left of `top`, or on the
    /// same row/column.
    #[inline]
    pub const fn is_bottom_left_to_top_right(bottom: Point, top: Point) -> bool {
        bottom.x <= top.x && bottom.y <= top.y
    }

    /// Corner with the smallest coordinates.
    #[inline]
    pub const fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Corner with the largest coordinates.
    #[inline]
    pub const fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Inclusive x range.
    #[inline]
    pub fn xs(&self) -> std::ops::RangeInclusive<i32> {
        self.min_x..=self.max_x
    }

    /// Inclusive y range.
    #[inline]
    pub fn ys(&self) -> std::ops::RangeInclusive<i32> {
        self.min_y..=self.max_y
    }

    /// Number of cells covered.
    #[inline]
    pub const fn area(&self) -> u64 {
        let w = (self.max_x as i64 - self.min_x as i64 + 1) as u64;
        let h = (self.max_y as i64 - self.min_y as i64 + 1) as u64;
        w * h
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Check if this rectangle overlaps another.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {})-({}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_normalizes_corners() {
        let a = Rect::from_corners(Point::new(28, 2), Point::new(20, 7));
        assert_eq!(a.min(), Point::new(20, 2));
        assert_eq!(a.max(), Point::new(28, 7));

        let b = Rect::from_corners(Point::new(20, 7), Point::new(28, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rect_area() {
        assert_eq!(Rect::from_corners(Point::ORIGIN, Point::ORIGIN).area(), 1);
        assert_eq!(
            Rect::from_corners(Point::new(0, 292), Point::new(399, 307)).area(),
            400 * 16
        );
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let r = Rect::from_corners(Point::new(1, 16), Point::new(16, 25));
        assert!(r.contains(Point::new(1, 16)));
        assert!(r.contains(Point::new(16, 25)));
        assert!(!r.contains(Point::new(0, 16)));
        assert!(!r.contains(Point::new(16, 26)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::from_corners(Point::new(3, 4), Point::new(8, 29));
        let b = Rect::from_corners(Point::new(1, 25), Point::new(16, 16));
        let c = Rect::from_corners(Point::new(28, 2), Point::new(20, 7));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_orientation_check() {
        assert!(Rect::is_bottom_left_to_top_right(Point::new(0, 0), Point::new(0, 0)));
        assert!(Rect::is_bottom_left_to_top_right(Point::new(48, 192), Point::new(351, 207)));
        assert!(!Rect::is_bottom_left_to_top_right(Point::new(28, 2), Point::new(20, 7)));
        assert!(!Rect::is_bottom_left_to_top_right(Point::new(1, 25), Point::new(16, 16)));
    }
}
