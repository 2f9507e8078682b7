use fnv::FnvHashMap;
use log::{debug, error};

use crate::gl_utilities::gl_call;
use crate::gl_utilities::types::ShaderType;

/// Named registry of compiled shader programs.
#[derive(Default)]
pub struct ShaderManager {
    shaders: FnvHashMap<String, Shader>,
}

impl ShaderManager {
    /// Compiles and links a program from vertex and fragment sources and
    /// stores it under `name`. Panics when the driver rejects either
    /// stage; the info log has already been routed to the error log.
    pub fn register(&mut self, name: &str, vert_source: &str, frag_source: &str) -> &Shader {
        let shader =
            Shader::load(name, vert_source, frag_source).unwrap_or_else(|| {
                panic!("unable to compile and link shader {}", name)
            });

        self.shaders.insert(String::from(name), shader);

        self.get(name)
    }

    pub fn get(&self, name: &str) -> &Shader {
        match self.shaders.get(name) {
            Some(shader) => shader,
            None => panic!("unable to find shader {}", name),
        }
    }
}

/// A linked shader program with its active attribute and uniform
/// locations cached at link time.
pub struct Shader {
    pub name: String,
    pub program: u32,
    attributes: FnvHashMap<String, u32>,
    uniforms: FnvHashMap<String, i32>,
}

impl Drop for Shader {
    fn drop(&mut self) {
        gl_call::destroy_shader_program(self.program);
        debug!("destroyed shader {}", self.name);
    }
}

impl Shader {
    fn load(name: &str, vert_source: &str, frag_source: &str) -> Option<Shader> {
        let program = gl_call::create_shader_program();

        if !gl_call::create_shader(ShaderType::Vertex, program, vert_source) {
            error!("vertex stage of {} failed to compile", name);
            gl_call::destroy_shader_program(program);
            return None;
        }
        if !gl_call::create_shader(ShaderType::Fragment, program, frag_source) {
            error!("fragment stage of {} failed to compile", name);
            gl_call::destroy_shader_program(program);
            return None;
        }

        // link_shader_program already destroys the program on failure
        if !gl_call::link_shader_program(program) {
            return None;
        }

        let mut shader = Shader {
            name: String::from(name),
            program,
            attributes: FnvHashMap::default(),
            uniforms: FnvHashMap::default(),
        };
        shader.detect_attributes();
        shader.detect_uniforms();

        Some(shader)
    }

    pub fn use_shader(&self) {
        gl_call::bind_program(self.program);
    }

    pub fn get_attribute_location(&self, name: &str) -> u32 {
        match self.attributes.get(name) {
            Some(&attribute) => attribute,
            None => panic!(
                "unable to find attribute {} in shader {}",
                name, self.name
            ),
        }
    }

    pub fn get_uniform_location(&self, name: &str) -> i32 {
        match self.uniforms.get(name) {
            Some(&uniform) => uniform,
            None => panic!("unable to find uniform {} in shader {}", name, self.name),
        }
    }

    fn detect_attributes(&mut self) {
        for name in self.active_variable_names(gl::ACTIVE_ATTRIBUTES) {
            let location = gl_call::get_attribute_location(self.program, &name);
            if location >= 0 {
                self.attributes.insert(name, location as u32);
            }
        }
    }

    fn detect_uniforms(&mut self) {
        for name in self.active_variable_names(gl::ACTIVE_UNIFORMS) {
            let location = gl_call::get_uniform_location(self.program, &name);
            if location >= 0 {
                self.uniforms.insert(name, location);
            }
        }
    }

    fn active_variable_names(&self, kind: gl::types::GLenum) -> Vec<String> {
        const BUF_SIZE: usize = 64;

        let mut count: gl::types::GLint = 0;
        unsafe {
            gl::GetProgramiv(self.program, kind, &mut count);
        }

        let mut names = Vec::with_capacity(count as usize);
        for i in 0..count {
            let mut size: gl::types::GLint = 0;
            let mut var_type: gl::types::GLenum = 0;
            let mut length: gl::types::GLsizei = 0;
            let mut name = [0u8; BUF_SIZE];

            unsafe {
                if kind == gl::ACTIVE_ATTRIBUTES {
                    gl::GetActiveAttrib(
                        self.program,
                        i as gl::types::GLuint,
                        BUF_SIZE as gl::types::GLsizei,
                        &mut length,
                        &mut size,
                        &mut var_type,
                        name.as_mut_ptr() as *mut gl::types::GLchar,
                    );
                } else {
                    gl::GetActiveUniform(
                        self.program,
                        i as gl::types::GLuint,
                        BUF_SIZE as gl::types::GLsizei,
                        &mut length,
                        &mut size,
                        &mut var_type,
                        name.as_mut_ptr() as *mut gl::types::GLchar,
                    );
                }
            }

            if length <= 0 {
                continue;
            }

            names.push(String::from_utf8_lossy(&name[..length as usize]).into_owned());
        }

        names
    }
}
