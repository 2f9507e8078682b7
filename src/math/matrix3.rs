use std::ops::{Index, IndexMut};

use crate::math::vector3::Vector3;

/// A 3x3 matrix stored as three rows.
///
/// Mainly a carrier for pure rotations; convert into a
/// [`Matrix4`](crate::math::Matrix4) to embed it into homogeneous form.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3 {
    rows: [Vector3; 3],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3 {
        rows: [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ],
    };

    pub const fn from_rows(r0: Vector3, r1: Vector3, r2: Vector3) -> Matrix3 {
        Matrix3 { rows: [r0, r1, r2] }
    }

    /// Rotation around the z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Matrix3 {
        let c = angle.cos();
        let s = angle.sin();

        Matrix3::from_rows(
            Vector3::new(c, -s, 0.0),
            Vector3::new(s, c, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }
}

impl Index<usize> for Matrix3 {
    type Output = Vector3;

    /// Panics if `index` is not in `[0, 2]`.
    fn index(&self, index: usize) -> &Vector3 {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, index: usize) -> &mut Vector3 {
        &mut self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn identity_rows() {
        let m = Matrix3::IDENTITY;

        assert_eq!(m[0], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(m[1], Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(m[2], Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let m = Matrix3::rotation_z(std::f32::consts::FRAC_PI_2);

        // x axis rotates onto the y axis
        assert!(approx_eq(m[0].x, 0.0));
        assert!(approx_eq(m[1].x, 1.0));
        assert!(approx_eq(m[2].z, 1.0));
    }

    #[test]
    #[should_panic]
    fn out_of_range_row_panics() {
        let _ = Matrix3::IDENTITY[3];
    }
}
