use crate::math::{Vector2, Vector3};

/// A textured vertex as laid out in the interleaved buffer: three
/// position floats followed by two texture-coordinate floats.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vector3,
    pub tex_coord: Vector2,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Vertex {
        Vertex {
            position: Vector3::new(x, y, z),
            tex_coord: Vector2::new(u, v),
        }
    }

    pub fn to_array(&self) -> [f32; 5] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.tex_coord.x,
            self.tex_coord.y,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_position_then_tex_coord() {
        let v = Vertex::new(1.0, 2.0, 3.0, 0.5, 0.25);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 0.5, 0.25]);
    }
}
