use crate::math::vector2::Vector2;

/// An axis-aligned rectangle described by its top-left corner and a
/// non-negative size.
///
/// A negative width or height trips a debug assertion; release builds do
/// not check.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Rectangle {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "rectangle size must be non-negative, got {}x{}",
            width,
            height
        );

        Rectangle {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_position(position: Vector2, width: f32, height: f32) -> Rectangle {
        Rectangle::new(position.x, position.y, width, height)
    }

    pub fn from_size(position: Vector2, size: Vector2) -> Rectangle {
        Rectangle::new(position.x, position.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Non-strict separation test: rectangles that merely touch along an
    /// edge still count as intersecting.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        if other.right() < self.left {
            return false;
        }
        if self.right() < other.left {
            return false;
        }
        if other.bottom() < self.top {
            return false;
        }
        if self.bottom() < other.top {
            return false;
        }
        true
    }

    /// Edge-inclusive containment, defined as intersection with the
    /// zero-size rectangle at `position`.
    pub fn contains(&self, position: Vector2) -> bool {
        self.intersects(&Rectangle::from_position(position, 0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_edges() {
        let r = Rectangle::new(2.0, 3.0, 10.0, 20.0);

        assert_eq!(r.right(), 12.0);
        assert_eq!(r.bottom(), 23.0);
    }

    #[test]
    fn constructors_agree() {
        let a = Rectangle::new(1.0, 2.0, 3.0, 4.0);
        let b = Rectangle::from_position(Vector2::new(1.0, 2.0), 3.0, 4.0);
        let c = Rectangle::from_size(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));

        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn overlapping_rectangles_intersect() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edge_counts_as_intersection() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(10.0, 0.0, 5.0, 5.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_rectangles_do_not_intersect() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(11.0, 0.0, 5.0, 5.0);

        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn vertical_separation() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(0.0, 10.5, 10.0, 10.0);

        assert!(!a.intersects(&b));
    }

    #[test]
    fn containment_is_edge_inclusive() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);

        assert!(r.contains(Vector2::new(10.0, 5.0)));
        assert!(r.contains(Vector2::new(0.0, 0.0)));
        assert!(r.contains(Vector2::new(5.0, 5.0)));
        assert!(!r.contains(Vector2::new(10.01, 5.0)));
        assert!(!r.contains(Vector2::new(-0.01, 5.0)));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn negative_width_trips_assertion() {
        let _ = Rectangle::new(0.0, 0.0, -1.0, 5.0);
    }
}
