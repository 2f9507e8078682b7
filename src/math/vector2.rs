use auto_ops::*;

impl_op_ex!(+|a: &Vector2, b: &Vector2| -> Vector2 {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_op_ex!(+=|a: &mut Vector2, b: &Vector2| {
    a.x += b.x;
    a.y += b.y;
});

impl_op_ex!(-|a: &Vector2, b: &Vector2| -> Vector2 {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_op_ex!(-=|a: &mut Vector2, b: &Vector2| {
    a.x -= b.x;
    a.y -= b.y;
});

/// A 2D vector, used for positions, sizes and texture coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    pub const fn zero() -> Vector2 {
        Vector2::new(0.0, 0.0)
    }

    pub const fn one() -> Vector2 {
        Vector2::new(1.0, 1.0)
    }

    pub fn inverse(&self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);

        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vector2::new(4.0, 1.0));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn inverse_negates_components() {
        assert_eq!(Vector2::new(2.0, -3.0).inverse(), Vector2::new(-2.0, 3.0));
    }
}
