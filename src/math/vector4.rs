use std::ops::{Index, IndexMut};

use auto_ops::*;

impl_op_ex!(+|a: &Vector4, b: &Vector4| -> Vector4 {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_op_ex!(+=|a: &mut Vector4, b: &Vector4| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_op_ex!(-|a: &Vector4, b: &Vector4| -> Vector4 {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_op_ex!(-=|a: &mut Vector4, b: &Vector4| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

/// A 4-component vector, the row type of [`Matrix4`](crate::math::Matrix4)
/// and the homogeneous form of a 3D point.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
        Vector4 { x, y, z, w }
    }

    pub const fn zero() -> Vector4 {
        Vector4::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    /// Panics if `index` is not in `[0, 3]`.
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 component index {} out of range", index),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 component index {} out of range", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_maps_to_components() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);

        v[2] = 9.0;
        assert_eq!(v.z, 9.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let v = Vector4::zero();
        let _ = v[4];
    }

    #[test]
    fn to_array_is_component_order() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn component_wise_ops() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(4.0, 3.0, 2.0, 1.0);

        assert_eq!(a + b, Vector4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - b, Vector4::new(-3.0, -1.0, 1.0, 3.0));
    }
}
