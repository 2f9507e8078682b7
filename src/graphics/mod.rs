//! Window lifecycle and the drawing primitives built on top of the GL
//! helpers.

mod color;
mod vertex;
mod window;

pub use color::Color;
pub use vertex::Vertex;
pub use window::{Graphics, GraphicsError, WindowSettings};
