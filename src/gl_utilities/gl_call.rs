//! Thin 1:1 delegation onto the raw OpenGL entry points.
//!
//! Every function here assumes a current GL context on the calling
//! thread. State setters are infallible pass-throughs; shader compile
//! and link report failure through their return value and route the
//! driver's info log to the error log.

use std::ffi::CString;

use log::error;

use crate::gl_utilities::create_whitespace_cstring_with_len;
use crate::gl_utilities::types::{
    BufferType, DataType, ImageFormat, PixelStoreParam, ShaderType, TexUnit, TextureKind,
    TextureParam, UsageType,
};
use crate::math::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

pub fn create_shader_program() -> u32 {
    unsafe { gl::CreateProgram() }
}

/// Compiles `source` as a shader of the given type and attaches it to
/// `program`. The shader object itself is flagged for deletion right
/// away; it dies with the program. Returns `false` on compile failure.
pub fn create_shader(shader_type: ShaderType, program: u32, source: &str) -> bool {
    let source = match CString::new(source) {
        Ok(source) => source,
        Err(_) => return false,
    };

    let shader = unsafe { gl::CreateShader(shader_type.gl_value()) };

    unsafe {
        gl::ShaderSource(shader, 1, &source.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);
    }

    let mut success: gl::types::GLint = 1;
    unsafe {
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        error!("shader compilation failed: {}", shader_info_log(shader));
        unsafe {
            gl::DeleteShader(shader);
        }
        return false;
    }

    unsafe {
        gl::AttachShader(program, shader);
        gl::DeleteShader(shader);
    }

    true
}

/// Links `program`. On failure the program is destroyed and `false` is
/// returned.
pub fn link_shader_program(program: u32) -> bool {
    unsafe {
        gl::LinkProgram(program);
    }

    let mut success: gl::types::GLint = 1;
    unsafe {
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    }

    if success == 0 {
        error!("program link failed: {}", program_info_log(program));
        destroy_shader_program(program);
        return false;
    }

    true
}

pub fn bind_program(program: u32) {
    if program != 0 {
        unsafe {
            gl::UseProgram(program);
        }
    }
}

pub fn destroy_shader_program(program: u32) {
    unsafe {
        gl::DeleteProgram(program);
    }
}

pub fn get_uniform_location(program: u32, name: &str) -> i32 {
    let name = CString::new(name).expect("uniform name contains a nul byte");
    unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
}

pub fn get_attribute_location(program: u32, name: &str) -> i32 {
    let name = CString::new(name).expect("attribute name contains a nul byte");
    unsafe { gl::GetAttribLocation(program, name.as_ptr()) }
}

pub fn set_uniform_1f(location: i32, x: f32) {
    unsafe {
        gl::Uniform1f(location, x);
    }
}

pub fn set_uniform_2f(location: i32, x: f32, y: f32) {
    unsafe {
        gl::Uniform2f(location, x, y);
    }
}

pub fn set_uniform_3f(location: i32, x: f32, y: f32, z: f32) {
    unsafe {
        gl::Uniform3f(location, x, y, z);
    }
}

pub fn set_uniform_4f(location: i32, x: f32, y: f32, z: f32, w: f32) {
    unsafe {
        gl::Uniform4f(location, x, y, z, w);
    }
}

pub fn set_uniform_vector2(location: i32, vector: &Vector2) {
    set_uniform_2f(location, vector.x, vector.y);
}

pub fn set_uniform_vector3(location: i32, vector: &Vector3) {
    set_uniform_3f(location, vector.x, vector.y, vector.z);
}

pub fn set_uniform_vector4(location: i32, vector: &Vector4) {
    set_uniform_4f(location, vector.x, vector.y, vector.z, vector.w);
}

pub fn set_uniform_matrix3(location: i32, matrix: &Matrix3) {
    let elements = [
        matrix[0].x,
        matrix[0].y,
        matrix[0].z,
        matrix[1].x,
        matrix[1].y,
        matrix[1].z,
        matrix[2].x,
        matrix[2].y,
        matrix[2].z,
    ];
    unsafe {
        gl::UniformMatrix3fv(location, 1, gl::FALSE, elements.as_ptr());
    }
}

pub fn set_uniform_matrix4(location: i32, matrix: &Matrix4) {
    let elements = matrix.to_array();
    unsafe {
        gl::UniformMatrix4fv(location, 1, gl::FALSE, elements.as_ptr());
    }
}

pub fn enable_vertex_attrib_array(location: u32) {
    unsafe {
        gl::EnableVertexAttribArray(location);
    }
}

pub fn disable_vertex_attrib_array(location: u32) {
    unsafe {
        gl::DisableVertexAttribArray(location);
    }
}

pub fn set_vertex_attrib_pointer(
    location: u32,
    size: i32,
    data_type: DataType,
    normalized: bool,
    stride: i32,
    offset: usize,
) {
    unsafe {
        gl::VertexAttribPointer(
            location,
            size,
            data_type.gl_value(),
            normalized as gl::types::GLboolean,
            stride,
            offset as *const std::ffi::c_void,
        );
    }
}

pub fn generate_buffers(amount: usize) -> Vec<u32> {
    let mut buffers = vec![0; amount];
    unsafe {
        gl::GenBuffers(amount as gl::types::GLsizei, buffers.as_mut_ptr());
    }
    buffers
}

pub fn delete_buffers(buffers: &[u32]) {
    unsafe {
        gl::DeleteBuffers(buffers.len() as gl::types::GLsizei, buffers.as_ptr());
    }
}

pub fn bind_buffer(buffer_type: BufferType, buffer: u32) {
    unsafe {
        gl::BindBuffer(buffer_type.gl_value(), buffer);
    }
}

pub fn set_buffer_data<T: Copy>(buffer_type: BufferType, data: &[T], usage: UsageType) {
    unsafe {
        gl::BufferData(
            buffer_type.gl_value(),
            std::mem::size_of_val(data) as gl::types::GLsizeiptr,
            data.as_ptr() as *const gl::types::GLvoid,
            usage.gl_value(),
        );
    }
}

pub fn set_buffer_sub_data<T: Copy>(buffer_type: BufferType, offset: usize, data: &[T]) {
    unsafe {
        gl::BufferSubData(
            buffer_type.gl_value(),
            offset as gl::types::GLintptr,
            std::mem::size_of_val(data) as gl::types::GLsizeiptr,
            data.as_ptr() as *const gl::types::GLvoid,
        );
    }
}

pub fn set_pixel_store(param: PixelStoreParam, value: i32) {
    unsafe {
        gl::PixelStorei(param.gl_value(), value);
    }
}

pub fn generate_textures(amount: usize) -> Vec<u32> {
    let mut textures = vec![0; amount];
    unsafe {
        gl::GenTextures(amount as gl::types::GLsizei, textures.as_mut_ptr());
    }
    textures
}

pub fn delete_textures(textures: &[u32]) {
    unsafe {
        gl::DeleteTextures(textures.len() as gl::types::GLsizei, textures.as_ptr());
    }
}

pub fn set_active_tex_unit(unit: TexUnit) {
    unsafe {
        gl::ActiveTexture(unit.gl_value());
    }
}

pub fn bind_texture(kind: TextureKind, texture: u32) {
    unsafe {
        gl::BindTexture(kind.gl_value(), texture);
    }
}

pub fn set_texture_image_1d(
    level: i32,
    internal_format: ImageFormat,
    width: usize,
    pixel_format: ImageFormat,
    data_type: DataType,
    pixels: &[u8],
) {
    unsafe {
        gl::TexImage1D(
            TextureKind::Texture1d.gl_value(),
            level,
            internal_format.gl_value() as i32,
            width as gl::types::GLsizei,
            0,
            pixel_format.gl_value(),
            data_type.gl_value(),
            pixels.as_ptr() as *const gl::types::GLvoid,
        );
    }
}

#[allow(clippy::too_many_arguments)]
pub fn set_texture_image_2d(
    kind: TextureKind,
    level: i32,
    internal_format: ImageFormat,
    width: usize,
    height: usize,
    pixel_format: ImageFormat,
    data_type: DataType,
    pixels: &[u8],
) {
    unsafe {
        gl::TexImage2D(
            kind.gl_value(),
            level,
            internal_format.gl_value() as i32,
            width as gl::types::GLsizei,
            height as gl::types::GLsizei,
            0,
            pixel_format.gl_value(),
            data_type.gl_value(),
            pixels.as_ptr() as *const gl::types::GLvoid,
        );
    }
}

pub fn set_texture_parameter(kind: TextureKind, param: TextureParam, value: i32) {
    unsafe {
        gl::TexParameteri(kind.gl_value(), param.gl_value(), value);
    }
}

fn shader_info_log(shader: u32) -> String {
    let mut len: gl::types::GLint = 0;
    unsafe {
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    }

    let buffer = create_whitespace_cstring_with_len(len as usize);
    unsafe {
        gl::GetShaderInfoLog(
            shader,
            len,
            std::ptr::null_mut(),
            buffer.as_ptr() as *mut gl::types::GLchar,
        );
    }

    buffer.to_string_lossy().into_owned()
}

fn program_info_log(program: u32) -> String {
    let mut len: gl::types::GLint = 0;
    unsafe {
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
    }

    let buffer = create_whitespace_cstring_with_len(len as usize);
    unsafe {
        gl::GetProgramInfoLog(
            program,
            len,
            std::ptr::null_mut(),
            buffer.as_ptr() as *mut gl::types::GLchar,
        );
    }

    buffer.to_string_lossy().into_owned()
}
