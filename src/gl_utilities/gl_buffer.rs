use crate::gl_utilities::gl_call;
use crate::gl_utilities::types::{BufferType, DataType, UsageType};

/// Layout of a single vertex attribute inside an interleaved buffer.
pub struct AttributeInfo {
    pub location: u32,
    pub component_size: i32,
}

/// An interleaved float vertex buffer with its vertex array object.
pub struct GLBuffer {
    element_size: i32,
    stride: i32,

    vao: u32,
    vbo: u32,

    vertex_count: i32,
}

impl Drop for GLBuffer {
    fn drop(&mut self) {
        gl_call::delete_buffers(&[self.vbo]);
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

impl Default for GLBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GLBuffer {
    pub fn new() -> GLBuffer {
        let vbo = gl_call::generate_buffers(1)[0];

        let mut vao = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
        }

        GLBuffer {
            element_size: 0,
            stride: 0,
            vao,
            vbo,
            vertex_count: 0,
        }
    }

    /// Declares the interleaved attribute layout. Must be called before
    /// the first upload.
    pub fn configure(&mut self, attributes: Vec<AttributeInfo>, normalized: bool) {
        unsafe {
            gl::BindVertexArray(self.vao);
        }
        gl_call::bind_buffer(BufferType::Array, self.vbo);

        self.element_size = attributes.iter().map(|a| a.component_size).sum();
        self.stride = self.element_size * DataType::Float.size_in_bytes() as i32;

        let mut offset = 0;
        for attribute in &attributes {
            gl_call::set_vertex_attrib_pointer(
                attribute.location,
                attribute.component_size,
                DataType::Float,
                normalized,
                self.stride,
                offset,
            );
            gl_call::enable_vertex_attrib_array(attribute.location);

            offset += attribute.component_size as usize * DataType::Float.size_in_bytes();
        }

        gl_call::bind_buffer(BufferType::Array, 0);
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Uploads interleaved vertex data, replacing the previous content.
    pub fn upload(&mut self, data: &[f32]) {
        gl_call::bind_buffer(BufferType::Array, self.vbo);
        gl_call::set_buffer_data(BufferType::Array, data, UsageType::StaticDraw);
        gl_call::bind_buffer(BufferType::Array, 0);

        self.vertex_count = match self.element_size {
            0 => 0,
            _ => data.len() as i32 / self.element_size,
        };
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count);
        }
    }
}
