use crate::math::matrix4::Matrix4;
use crate::math::vector3::Vector3;

/// Position, Euler rotation (degrees) and per-axis scale of an object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: Vector3::one(),
        }
    }
}

impl Transform {
    pub fn new(position: Vector3, rotation: Vector3, scale: Vector3) -> Transform {
        Transform {
            position,
            rotation,
            scale,
        }
    }

    /// Combined model matrix: scale, then rotation, then translation.
    pub fn get_transformation_matrix(&self) -> Matrix4 {
        let translation = Matrix4::translation(self.position);
        let rotation = Matrix4::rotation(Vector3::new(
            self.rotation.x.to_radians(),
            self.rotation.y.to_radians(),
            self.rotation.z.to_radians(),
        ));
        let scale = Matrix4::scale(self.scale);

        translation * rotation * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector4::Vector4;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn default_is_identity() {
        let m = Transform::default().get_transformation_matrix();
        assert_eq!(m, Matrix4::IDENTITY);
    }

    #[test]
    fn scale_applies_before_translation() {
        let transform = Transform::new(
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::zero(),
            Vector3::new(2.0, 2.0, 2.0),
        );

        let p = Vector4::new(1.0, 1.0, 0.0, 1.0) * transform.get_transformation_matrix();

        assert!((p.x - 12.0).abs() < TOLERANCE);
        assert!((p.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn rotation_is_in_degrees() {
        let transform = Transform::new(
            Vector3::zero(),
            Vector3::new(0.0, 0.0, 90.0),
            Vector3::one(),
        );

        let p = Vector4::new(1.0, 0.0, 0.0, 1.0) * transform.get_transformation_matrix();

        assert!(p.x.abs() < TOLERANCE);
        assert!((p.y - 1.0).abs() < TOLERANCE);
    }
}
