#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

use std::ops::{Index, IndexMut};

use auto_ops::*;

use crate::math::matrix3::Matrix3;
use crate::math::vector3::Vector3;
use crate::math::vector4::Vector4;

// Standard row-by-column product: out[i][j] = sum_k a[i][k] * b[k][j].
impl_op_ex!(*|a: &Matrix4, b: &Matrix4| -> Matrix4 {
    let mut m = Matrix4::IDENTITY;

    for i in 0..4 {
        for j in 0..4 {
            m.rows[i][j] = a.rows[i][0] * b.rows[0][j]
                + a.rows[i][1] * b.rows[1][j]
                + a.rows[i][2] * b.rows[2][j]
                + a.rows[i][3] * b.rows[3][j];
        }
    }

    m
});

impl_op_ex!(*= |a: &mut Matrix4, b: &Matrix4| {
    *a = *a * b;
});

// Matrix-vector product with the vector treated as a column:
// out[i] = sum_k m[i][k] * v[k].
impl_op_ex!(*|v: &Vector4, m: &Matrix4| -> Vector4 {
    Vector4::new(
        m.rows[0][0] * v.x + m.rows[0][1] * v.y + m.rows[0][2] * v.z + m.rows[0][3] * v.w,
        m.rows[1][0] * v.x + m.rows[1][1] * v.y + m.rows[1][2] * v.z + m.rows[1][3] * v.w,
        m.rows[2][0] * v.x + m.rows[2][1] * v.y + m.rows[2][2] * v.z + m.rows[2][3] * v.w,
        m.rows[3][0] * v.x + m.rows[3][1] * v.y + m.rows[3][2] * v.z + m.rows[3][3] * v.w,
    )
});

impl_op_ex!(*= |v: &mut Vector4, m: &Matrix4| {
    *v = *v * m;
});

/// A 4x4 transform matrix stored as four rows, row-major.
///
/// Vectors are treated as columns, so combined transforms read
/// right-to-left: `translation * rotation * scale` scales first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4 {
    rows: [Vector4; 4],
}

impl Default for Matrix4 {
    fn default() -> Matrix4 {
        Matrix4::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Matrix4 = Matrix4 {
        rows: [
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    /// Builds a matrix from 16 scalars in row-major order,
    /// four consecutive scalars per row.
    pub fn from_array(elements: [f32; 16]) -> Matrix4 {
        let e = elements;
        Matrix4 {
            rows: [
                Vector4::new(e[0], e[1], e[2], e[3]),
                Vector4::new(e[4], e[5], e[6], e[7]),
                Vector4::new(e[8], e[9], e[10], e[11]),
                Vector4::new(e[12], e[13], e[14], e[15]),
            ],
        }
    }

    pub const fn from_rows(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Matrix4 {
        Matrix4 {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Flattens the matrix to 16 scalars in row-major order, the shape
    /// expected by the uniform-upload path.
    pub fn to_array(&self) -> [f32; 16] {
        let r = &self.rows;
        [
            r[0].x, r[0].y, r[0].z, r[0].w, r[1].x, r[1].y, r[1].z, r[1].w, r[2].x, r[2].y,
            r[2].z, r[2].w, r[3].x, r[3].y, r[3].z, r[3].w,
        ]
    }

    pub fn orthographic(
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Matrix4 {
        let mut m = Matrix4::IDENTITY;

        let r_plus_l = right + left;
        let r_minus_l = right - left;
        let t_plus_b = top + bottom;
        let t_minus_b = top - bottom;
        let f_plus_n = far_clip + near_clip;
        let f_minus_n = far_clip - near_clip;

        m.rows[0][0] = 2.0 / r_minus_l;
        m.rows[1][1] = 2.0 / t_minus_b;
        m.rows[2][2] = -2.0 / f_minus_n;
        m.rows[0][3] = -(r_plus_l / r_minus_l);
        m.rows[1][3] = -(t_plus_b / t_minus_b);
        m.rows[2][3] = -(f_plus_n / f_minus_n);

        m
    }

    pub fn translation(position: Vector3) -> Matrix4 {
        let mut m = Matrix4::IDENTITY;

        m.rows[0][3] = position.x;
        m.rows[1][3] = position.y;
        m.rows[2][3] = position.z;

        m
    }

    pub fn rotation_x(angle: f32) -> Matrix4 {
        let mut m = Matrix4::IDENTITY;

        let c = angle.cos();
        let s = angle.sin();

        m.rows[1][1] = c;
        m.rows[1][2] = -s;
        m.rows[2][1] = s;
        m.rows[2][2] = c;

        m
    }

    pub fn rotation_y(angle: f32) -> Matrix4 {
        let mut m = Matrix4::IDENTITY;

        let c = angle.cos();
        let s = angle.sin();

        m.rows[0][0] = c;
        m.rows[0][2] = s;
        m.rows[2][0] = -s;
        m.rows[2][2] = c;

        m
    }

    pub fn rotation_z(angle: f32) -> Matrix4 {
        let mut m = Matrix4::IDENTITY;

        let c = angle.cos();
        let s = angle.sin();

        m.rows[0][0] = c;
        m.rows[0][1] = -s;
        m.rows[1][0] = s;
        m.rows[1][1] = c;

        m
    }

    /// Combined rotation from Euler angles in radians, applied x, then y,
    /// then z.
    pub fn rotation(angle: Vector3) -> Matrix4 {
        let rx = Matrix4::rotation_x(angle.x);
        let ry = Matrix4::rotation_y(angle.y);
        let rz = Matrix4::rotation_z(angle.z);

        rz * ry * rx
    }

    pub fn scale(scale: Vector3) -> Matrix4 {
        let mut m = Matrix4::IDENTITY;

        m.rows[0][0] = scale.x;
        m.rows[1][1] = scale.y;
        m.rows[2][2] = scale.z;

        m
    }
}

/// Embeds a linear transform into homogeneous form: the 3x3 block lands
/// in the top-left corner, the last row and column become (0,0,0,1).
impl From<Matrix3> for Matrix4 {
    fn from(mat3: Matrix3) -> Matrix4 {
        Matrix4 {
            rows: [
                Vector4::new(mat3[0].x, mat3[0].y, mat3[0].z, 0.0),
                Vector4::new(mat3[1].x, mat3[1].y, mat3[1].z, 0.0),
                Vector4::new(mat3[2].x, mat3[2].y, mat3[2].z, 0.0),
                Vector4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;

    /// Panics if `index` is not in `[0, 3]`.
    fn index(&self, index: usize) -> &Vector4 {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_matrix_eq(a: &Matrix4, b: &Matrix4) {
        let (a, b) = (a.to_array(), b.to_array());
        for i in 0..16 {
            assert!(
                (a[i] - b[i]).abs() < TOLERANCE,
                "element {} differs: {} vs {}",
                i,
                a[i],
                b[i]
            );
        }
    }

    fn sample_matrix() -> Matrix4 {
        Matrix4::from_array([
            2.0, 3.0, 5.0, 7.0, 11.0, 13.0, 17.0, 19.0, 23.0, 29.0, 31.0, 37.0, 41.0, 43.0, 47.0,
            53.0,
        ])
    }

    #[test]
    fn identity_times_identity() {
        assert_matrix_eq(&(Matrix4::IDENTITY * Matrix4::IDENTITY), &Matrix4::IDENTITY);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = sample_matrix();

        assert_matrix_eq(&(Matrix4::IDENTITY * m), &m);
        assert_matrix_eq(&(m * Matrix4::IDENTITY), &m);
    }

    #[test]
    fn multiplication_is_associative() {
        let a = sample_matrix();
        let b = Matrix4::rotation_z(0.7) * Matrix4::translation(Vector3::new(3.0, -2.0, 1.0));
        let c = Matrix4::scale(Vector3::new(2.0, 0.5, 4.0));

        assert_matrix_eq(&((a * b) * c), &(a * (b * c)));
    }

    #[test]
    fn mul_assign_matches_mul() {
        let a = sample_matrix();
        let b = Matrix4::rotation_x(1.2);

        let mut c = a;
        c *= b;
        assert_matrix_eq(&c, &(a * b));
    }

    #[test]
    fn vector_times_identity_is_unchanged() {
        let v = Vector4::new(1.5, -2.0, 3.25, 1.0);

        assert_eq!(v * Matrix4::IDENTITY, v);

        let mut w = v;
        w *= Matrix4::IDENTITY;
        assert_eq!(w, v);
    }

    #[test]
    fn from_array_is_row_major() {
        let m = Matrix4::from_array([
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ]);

        assert_eq!(m, Matrix4::IDENTITY);
        assert_eq!(m[1][2], 0.0);
    }

    #[test]
    fn to_array_round_trips_from_array() {
        let elements: [f32; 16] = std::array::from_fn(|i| i as f32);
        assert_eq!(Matrix4::from_array(elements).to_array(), elements);
    }

    #[test]
    fn matrix3_embedding_is_homogeneous() {
        let m = Matrix4::from(Matrix3::rotation_z(0.3));

        assert_eq!(m[3], Vector4::new(0.0, 0.0, 0.0, 1.0));
        for row in 0..3 {
            assert_eq!(m[row][3], 0.0);
        }
    }

    #[test]
    fn embedded_rotation_matches_native_rotation() {
        let embedded = Matrix4::from(Matrix3::rotation_z(0.3));
        assert_matrix_eq(&embedded, &Matrix4::rotation_z(0.3));
    }

    #[test]
    fn translation_moves_a_point() {
        let m = Matrix4::translation(Vector3::new(10.0, -5.0, 2.0));
        let p = Vector4::new(1.0, 2.0, 3.0, 1.0);

        assert_eq!(p * m, Vector4::new(11.0, -3.0, 5.0, 1.0));
    }

    #[test]
    fn rotation_z_quarter_turn_maps_x_to_y() {
        let m = Matrix4::rotation_z(std::f32::consts::FRAC_PI_2);
        let v = Vector4::new(1.0, 0.0, 0.0, 0.0) * m;

        assert!(v.x.abs() < TOLERANCE);
        assert!((v.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn scale_stretches_components() {
        let m = Matrix4::scale(Vector3::new(2.0, 3.0, 4.0));
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0) * m;

        assert_eq!(v, Vector4::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn orthographic_maps_viewport_corners() {
        let m = Matrix4::orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);

        let bottom_left = Vector4::new(0.0, 0.0, 0.0, 1.0) * m;
        assert!((bottom_left.x + 1.0).abs() < TOLERANCE);
        assert!((bottom_left.y + 1.0).abs() < TOLERANCE);

        let top_right = Vector4::new(800.0, 600.0, 0.0, 1.0) * m;
        assert!((top_right.x - 1.0).abs() < TOLERANCE);
        assert!((top_right.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    #[should_panic]
    fn out_of_range_row_panics() {
        let _ = Matrix4::IDENTITY[4];
    }
}
