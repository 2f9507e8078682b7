//! OpenGL helpers: raw delegation functions, enum translation tables and
//! small ownership wrappers around shader programs, vertex buffers and
//! textures.

pub mod gl_buffer;
pub mod gl_call;
pub mod shader;
pub mod texture;
pub mod types;

use std::ffi::CString;

/// Allocates a space-filled `CString` of the given length, used as an
/// output buffer for GL info logs.
pub(crate) fn create_whitespace_cstring_with_len(len: usize) -> CString {
    let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
    buffer.extend([b' '].iter().cycle().take(len));
    unsafe { CString::from_vec_unchecked(buffer) }
}
