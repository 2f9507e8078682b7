//! Value-type linear algebra and geometry used across the engine.

mod matrix3;
mod matrix4;
mod rectangle;
mod transform;
mod vector2;
mod vector3;
mod vector4;

pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use rectangle::Rectangle;
pub use transform::Transform;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
