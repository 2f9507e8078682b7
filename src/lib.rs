//! ember is a small utility layer for 2D games: value-type matrix and
//! rectangle math plus a thin object wrapper over OpenGL windowing,
//! shaders, buffers and textures.
//!
//! ## Example
//! ```no_run
//! use ember::graphics::{Graphics, WindowSettings};
//!
//! let mut graphics = Graphics::new().unwrap();
//! graphics.create_window(WindowSettings::default()).unwrap();
//!
//! graphics.clear(0.0, 0.0, 0.0, 1.0);
//! graphics.swap_buffers();
//! ```

pub mod assets;
pub mod engine;
pub mod gl_utilities;
pub mod graphics;
pub mod math;
