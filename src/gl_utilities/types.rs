//! Translation tables between engine-side enums and raw `GLenum` values.

use gl::types::GLenum;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    pub fn gl_value(self) -> GLenum {
        match self {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DataType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Float,
    Double,
}

impl DataType {
    pub fn gl_value(self) -> GLenum {
        match self {
            DataType::Byte => gl::BYTE,
            DataType::UnsignedByte => gl::UNSIGNED_BYTE,
            DataType::Short => gl::SHORT,
            DataType::UnsignedShort => gl::UNSIGNED_SHORT,
            DataType::Int => gl::INT,
            DataType::UnsignedInt => gl::UNSIGNED_INT,
            DataType::Float => gl::FLOAT,
            DataType::Double => gl::DOUBLE,
        }
    }

    pub fn size_in_bytes(self) -> usize {
        match self {
            DataType::Byte | DataType::UnsignedByte => 1,
            DataType::Short | DataType::UnsignedShort => 2,
            DataType::Int | DataType::UnsignedInt | DataType::Float => 4,
            DataType::Double => 8,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BufferType {
    Array,
    CopyRead,
    CopyWrite,
    ElementArray,
    PixelPack,
    PixelUnpack,
    Texture,
    TransformFeedback,
    Uniform,
}

impl BufferType {
    pub fn gl_value(self) -> GLenum {
        match self {
            BufferType::Array => gl::ARRAY_BUFFER,
            BufferType::CopyRead => gl::COPY_READ_BUFFER,
            BufferType::CopyWrite => gl::COPY_WRITE_BUFFER,
            BufferType::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
            BufferType::PixelPack => gl::PIXEL_PACK_BUFFER,
            BufferType::PixelUnpack => gl::PIXEL_UNPACK_BUFFER,
            BufferType::Texture => gl::TEXTURE_BUFFER,
            BufferType::TransformFeedback => gl::TRANSFORM_FEEDBACK_BUFFER,
            BufferType::Uniform => gl::UNIFORM_BUFFER,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UsageType {
    StreamDraw,
    StreamRead,
    StreamCopy,
    StaticDraw,
    StaticRead,
    StaticCopy,
    DynamicDraw,
    DynamicRead,
    DynamicCopy,
}

impl UsageType {
    pub fn gl_value(self) -> GLenum {
        match self {
            UsageType::StreamDraw => gl::STREAM_DRAW,
            UsageType::StreamRead => gl::STREAM_READ,
            UsageType::StreamCopy => gl::STREAM_COPY,
            UsageType::StaticDraw => gl::STATIC_DRAW,
            UsageType::StaticRead => gl::STATIC_READ,
            UsageType::StaticCopy => gl::STATIC_COPY,
            UsageType::DynamicDraw => gl::DYNAMIC_DRAW,
            UsageType::DynamicRead => gl::DYNAMIC_READ,
            UsageType::DynamicCopy => gl::DYNAMIC_COPY,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelStoreParam {
    PackSwapBytes,
    PackLsbFirst,
    PackRowLength,
    PackImageHeight,
    PackSkipPixels,
    PackSkipRows,
    PackSkipImages,
    PackAlignment,
    UnpackSwapBytes,
    UnpackLsbFirst,
    UnpackRowLength,
    UnpackImageHeight,
    UnpackSkipPixels,
    UnpackSkipRows,
    UnpackSkipImages,
    UnpackAlignment,
}

impl PixelStoreParam {
    pub fn gl_value(self) -> GLenum {
        match self {
            PixelStoreParam::PackSwapBytes => gl::PACK_SWAP_BYTES,
            PixelStoreParam::PackLsbFirst => gl::PACK_LSB_FIRST,
            PixelStoreParam::PackRowLength => gl::PACK_ROW_LENGTH,
            PixelStoreParam::PackImageHeight => gl::PACK_IMAGE_HEIGHT,
            PixelStoreParam::PackSkipPixels => gl::PACK_SKIP_PIXELS,
            PixelStoreParam::PackSkipRows => gl::PACK_SKIP_ROWS,
            PixelStoreParam::PackSkipImages => gl::PACK_SKIP_IMAGES,
            PixelStoreParam::PackAlignment => gl::PACK_ALIGNMENT,
            PixelStoreParam::UnpackSwapBytes => gl::UNPACK_SWAP_BYTES,
            PixelStoreParam::UnpackLsbFirst => gl::UNPACK_LSB_FIRST,
            PixelStoreParam::UnpackRowLength => gl::UNPACK_ROW_LENGTH,
            PixelStoreParam::UnpackImageHeight => gl::UNPACK_IMAGE_HEIGHT,
            PixelStoreParam::UnpackSkipPixels => gl::UNPACK_SKIP_PIXELS,
            PixelStoreParam::UnpackSkipRows => gl::UNPACK_SKIP_ROWS,
            PixelStoreParam::UnpackSkipImages => gl::UNPACK_SKIP_IMAGES,
            PixelStoreParam::UnpackAlignment => gl::UNPACK_ALIGNMENT,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TextureKind {
    Texture1d,
    Texture2d,
    Texture3d,
    Texture1dArray,
    Texture2dArray,
    Rectangle,
    CubeMap,
    Multisample2d,
    Multisample2dArray,
}

impl TextureKind {
    pub fn gl_value(self) -> GLenum {
        match self {
            TextureKind::Texture1d => gl::TEXTURE_1D,
            TextureKind::Texture2d => gl::TEXTURE_2D,
            TextureKind::Texture3d => gl::TEXTURE_3D,
            TextureKind::Texture1dArray => gl::TEXTURE_1D_ARRAY,
            TextureKind::Texture2dArray => gl::TEXTURE_2D_ARRAY,
            TextureKind::Rectangle => gl::TEXTURE_RECTANGLE,
            TextureKind::CubeMap => gl::TEXTURE_CUBE_MAP,
            TextureKind::Multisample2d => gl::TEXTURE_2D_MULTISAMPLE,
            TextureKind::Multisample2dArray => gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    Rgb,
    Rgba,
}

impl ImageFormat {
    pub fn gl_value(self) -> GLenum {
        match self {
            ImageFormat::Rgb => gl::RGB,
            ImageFormat::Rgba => gl::RGBA,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TextureParam {
    BaseLevel,
    CompareFunc,
    CompareMode,
    LodBias,
    MinFilter,
    MagFilter,
    MinLod,
    MaxLod,
    MaxLevel,
    SwizzleR,
    SwizzleG,
    SwizzleB,
    SwizzleA,
    WrapS,
    WrapT,
    WrapR,
}

impl TextureParam {
    pub fn gl_value(self) -> GLenum {
        match self {
            TextureParam::BaseLevel => gl::TEXTURE_BASE_LEVEL,
            TextureParam::CompareFunc => gl::TEXTURE_COMPARE_FUNC,
            TextureParam::CompareMode => gl::TEXTURE_COMPARE_MODE,
            TextureParam::LodBias => gl::TEXTURE_LOD_BIAS,
            TextureParam::MinFilter => gl::TEXTURE_MIN_FILTER,
            TextureParam::MagFilter => gl::TEXTURE_MAG_FILTER,
            TextureParam::MinLod => gl::TEXTURE_MIN_LOD,
            TextureParam::MaxLod => gl::TEXTURE_MAX_LOD,
            TextureParam::MaxLevel => gl::TEXTURE_MAX_LEVEL,
            TextureParam::SwizzleR => gl::TEXTURE_SWIZZLE_R,
            TextureParam::SwizzleG => gl::TEXTURE_SWIZZLE_G,
            TextureParam::SwizzleB => gl::TEXTURE_SWIZZLE_B,
            TextureParam::SwizzleA => gl::TEXTURE_SWIZZLE_A,
            TextureParam::WrapS => gl::TEXTURE_WRAP_S,
            TextureParam::WrapT => gl::TEXTURE_WRAP_T,
            TextureParam::WrapR => gl::TEXTURE_WRAP_R,
        }
    }
}

/// A texture image unit index; unit 0 maps to `GL_TEXTURE0`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TexUnit(pub u32);

impl TexUnit {
    pub fn gl_value(self) -> GLenum {
        gl::TEXTURE0 + self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_types_map_to_gl_constants() {
        assert_eq!(ShaderType::Vertex.gl_value(), gl::VERTEX_SHADER);
        assert_eq!(ShaderType::Fragment.gl_value(), gl::FRAGMENT_SHADER);
    }

    #[test]
    fn data_type_sizes() {
        assert_eq!(DataType::UnsignedByte.size_in_bytes(), 1);
        assert_eq!(DataType::Float.size_in_bytes(), 4);
        assert_eq!(DataType::Double.size_in_bytes(), 8);
    }

    #[test]
    fn buffer_and_usage_spot_checks() {
        assert_eq!(BufferType::Array.gl_value(), gl::ARRAY_BUFFER);
        assert_eq!(BufferType::Uniform.gl_value(), gl::UNIFORM_BUFFER);
        assert_eq!(UsageType::StaticDraw.gl_value(), gl::STATIC_DRAW);
        assert_eq!(UsageType::DynamicCopy.gl_value(), gl::DYNAMIC_COPY);
    }

    #[test]
    fn texture_tables_spot_checks() {
        assert_eq!(TextureKind::Texture2d.gl_value(), gl::TEXTURE_2D);
        assert_eq!(TextureKind::CubeMap.gl_value(), gl::TEXTURE_CUBE_MAP);
        assert_eq!(ImageFormat::Rgba.gl_value(), gl::RGBA);
        assert_eq!(TextureParam::MinFilter.gl_value(), gl::TEXTURE_MIN_FILTER);
        assert_eq!(
            PixelStoreParam::UnpackAlignment.gl_value(),
            gl::UNPACK_ALIGNMENT
        );
    }

    #[test]
    fn tex_units_start_at_texture0() {
        assert_eq!(TexUnit(0).gl_value(), gl::TEXTURE0);
        assert_eq!(TexUnit(3).gl_value(), gl::TEXTURE0 + 3);
    }
}
