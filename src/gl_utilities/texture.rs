use fnv::FnvHashMap;
use log::debug;

use crate::assets::image_loader;
use crate::gl_utilities::gl_call;
use crate::gl_utilities::types::{
    DataType, ImageFormat, PixelStoreParam, TexUnit, TextureKind, TextureParam,
};

const LEVEL: i32 = 0;

/// A texture resident on the GPU.
pub struct TextureHandle {
    pub texture_id: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, PartialEq)]
pub enum LoadError {
    AlreadyLoaded,
    NotLoaded,
    Decode(String),
}

/// Named registry of GPU textures loaded from image files.
#[derive(Default)]
pub struct TextureManager {
    textures: FnvHashMap<String, TextureHandle>,
}

impl TextureManager {
    /// Decodes the image at `path` and uploads it as an RGBA texture
    /// registered under `name`.
    pub fn load(&mut self, name: &str, path: &str) -> Result<&TextureHandle, LoadError> {
        if self.textures.contains_key(name) {
            return Err(LoadError::AlreadyLoaded);
        }

        let img = image_loader::load(path).map_err(LoadError::Decode)?;
        let texture_id = Self::generate_texture(img.width, img.height, &img.data);
        debug!("loaded texture {} from {}", name, path);

        self.textures.insert(
            String::from(name),
            TextureHandle {
                texture_id,
                width: img.width,
                height: img.height,
            },
        );

        Ok(&self.textures[name])
    }

    pub fn unload(&mut self, name: &str) -> Result<(), LoadError> {
        match self.textures.remove(name) {
            Some(handle) => {
                gl_call::delete_textures(&[handle.texture_id]);
                Ok(())
            }
            None => Err(LoadError::NotLoaded),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TextureHandle> {
        self.textures.get(name)
    }

    /// Binds `texture_id` to texture unit 0.
    pub fn activate(&self, texture_id: u32) {
        gl_call::set_active_tex_unit(TexUnit(0));
        gl_call::bind_texture(TextureKind::Texture2d, texture_id);
    }

    fn generate_texture(width: u32, height: u32, data: &[u8]) -> u32 {
        let texture_id = gl_call::generate_textures(1)[0];
        gl_call::bind_texture(TextureKind::Texture2d, texture_id);

        // RGBA rows are tightly packed
        gl_call::set_pixel_store(PixelStoreParam::UnpackAlignment, 1);

        gl_call::set_texture_image_2d(
            TextureKind::Texture2d,
            LEVEL,
            ImageFormat::Rgba,
            width as usize,
            height as usize,
            ImageFormat::Rgba,
            DataType::UnsignedByte,
            data,
        );

        unsafe {
            gl::GenerateMipmap(TextureKind::Texture2d.gl_value());
        }

        gl_call::set_texture_parameter(
            TextureKind::Texture2d,
            TextureParam::MinFilter,
            gl::LINEAR as i32,
        );
        gl_call::set_texture_parameter(
            TextureKind::Texture2d,
            TextureParam::MagFilter,
            gl::LINEAR as i32,
        );

        gl_call::bind_texture(TextureKind::Texture2d, 0);

        texture_id
    }
}
