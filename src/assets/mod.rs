//! Asset decoding for the graphics layer.

pub mod image_loader;
