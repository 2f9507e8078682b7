use auto_ops::*;

impl_op_ex!(+|a: &Vector3, b: &Vector3| -> Vector3 {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_op_ex!(+=|a: &mut Vector3, b: &Vector3| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op_ex!(-|a: &Vector3, b: &Vector3| -> Vector3 {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_op_ex!(-=|a: &mut Vector3, b: &Vector3| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

/// A 3D vector, used for positions, Euler angles and scale factors.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    pub const fn zero() -> Vector3 {
        Vector3::new(0.0, 0.0, 0.0)
    }

    pub const fn one() -> Vector3 {
        Vector3::new(1.0, 1.0, 1.0)
    }

    pub fn inverse(&self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let diff = self - other;
        f32::sqrt(diff.x * diff.x + diff.y * diff.y + diff.z * diff.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_points() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 4.0, 0.0);

        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn component_wise_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -2.0, 1.0);

        assert_eq!(a + b, Vector3::new(1.5, 0.0, 4.0));
        assert_eq!(a - b, Vector3::new(0.5, 4.0, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vector3::new(1.5, 0.0, 4.0));
    }
}
