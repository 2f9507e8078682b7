use std::fmt;
use std::path::Path;

use log::{info, trace};
use sdl2::video::{DisplayMode, FullscreenType, GLContext, GLProfile, Window};
use sdl2::{Sdl, VideoSubsystem};
use serde::{Deserialize, Serialize};

/// Window and GL context configuration, loadable from a YAML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Top-left window position; `None` centers the window.
    pub position: Option<(i32, i32)>,
    pub fullscreen: bool,
    pub use_depth_buffer: bool,
    pub use_stencil_buffer: bool,
    pub use_double_buffering: bool,
    pub context_version_major: u8,
    pub context_version_minor: u8,
}

impl Default for WindowSettings {
    fn default() -> Self {
        let (context_version_major, context_version_minor) = if cfg!(target_os = "macos") {
            (4, 1)
        } else {
            (4, 6)
        };

        WindowSettings {
            title: String::from("ember"),
            width: 800,
            height: 600,
            position: None,
            fullscreen: false,
            use_depth_buffer: false,
            use_stencil_buffer: false,
            use_double_buffering: true,
            context_version_major,
            context_version_minor,
        }
    }
}

impl WindowSettings {
    pub fn from_file(path: &Path) -> Result<WindowSettings, GraphicsError> {
        let file = std::fs::File::open(path)
            .map_err(|e| GraphicsError::Settings(e.to_string()))?;
        serde_yaml::from_reader(file).map_err(|e| GraphicsError::Settings(e.to_string()))
    }
}

#[derive(Debug)]
pub enum GraphicsError {
    Init(String),
    Window(String),
    Context(String),
    Settings(String),
    NoDisplayMode { width: u32, height: u32 },
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::Init(e) => write!(f, "SDL initialization failed: {}", e),
            GraphicsError::Window(e) => write!(f, "window creation failed: {}", e),
            GraphicsError::Context(e) => write!(f, "GL context creation failed: {}", e),
            GraphicsError::Settings(e) => write!(f, "unable to load window settings: {}", e),
            GraphicsError::NoDisplayMode { width, height } => {
                write!(f, "no display mode available for {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for GraphicsError {}

extern "system" fn dbg_callback(
    source: gl::types::GLenum,
    etype: gl::types::GLenum,
    _id: gl::types::GLuint,
    severity: gl::types::GLenum,
    _msg_length: gl::types::GLsizei,
    msg: *const gl::types::GLchar,
    _user_data: *mut std::ffi::c_void,
) {
    unsafe {
        trace!(
            "gl debug {:#X} {:#X} {:#X} {:?}",
            source,
            etype,
            severity,
            std::ffi::CStr::from_ptr(msg),
        );
    }
}

/// Owner of the SDL context and of at most one window with a current
/// OpenGL context. Dropping it tears the window down.
///
/// Not `Send`: the GL context has thread affinity.
pub struct Graphics {
    sdl_context: Sdl,
    video_subsystem: VideoSubsystem,
    window: Option<Window>,
    gl_context: Option<GLContext>,
    settings: WindowSettings,
}

impl Graphics {
    pub fn new() -> Result<Graphics, GraphicsError> {
        let sdl_context = sdl2::init().map_err(GraphicsError::Init)?;
        let video_subsystem = sdl_context.video().map_err(GraphicsError::Init)?;

        Ok(Graphics {
            sdl_context,
            video_subsystem,
            window: None,
            gl_context: None,
            settings: WindowSettings::default(),
        })
    }

    /// Creates the window and its GL context, replacing any window
    /// created earlier.
    pub fn create_window(&mut self, settings: WindowSettings) -> Result<(), GraphicsError> {
        if self.window.is_some() {
            self.destroy_window();
        }

        let gl_attr = self.video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(settings.context_version_major, settings.context_version_minor);
        gl_attr.set_double_buffer(settings.use_double_buffering);
        gl_attr.set_depth_size(if settings.use_depth_buffer { 24 } else { 0 });
        gl_attr.set_stencil_size(if settings.use_stencil_buffer { 8 } else { 0 });

        let mut builder =
            self.video_subsystem
                .window(settings.title.as_ref(), settings.width, settings.height);
        builder.opengl().allow_highdpi();
        match settings.position {
            Some((x, y)) => builder.position(x, y),
            None => builder.position_centered(),
        };

        let mut window = builder
            .build()
            .map_err(|e| GraphicsError::Window(e.to_string()))?;

        if settings.fullscreen {
            let display_mode = self.get_display_mode(&settings)?;
            window
                .set_display_mode(display_mode)
                .map_err(GraphicsError::Window)?;
            window
                .set_fullscreen(FullscreenType::True)
                .map_err(GraphicsError::Window)?;
        }

        let gl_context = window.gl_create_context().map_err(GraphicsError::Context)?;
        gl::load_with(|name| self.video_subsystem.gl_get_proc_address(name) as *const _);

        unsafe {
            if !cfg!(target_os = "macos") {
                gl::Enable(gl::DEBUG_OUTPUT);
                gl::DebugMessageCallback(Some(dbg_callback), std::ptr::null());
            }
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        info!(
            "created {}x{} window, GL {:?} {}.{}",
            settings.width,
            settings.height,
            gl_attr.context_profile(),
            gl_attr.context_version().0,
            gl_attr.context_version().1,
        );

        self.window = Some(window);
        self.gl_context = Some(gl_context);
        self.settings = settings;

        Ok(())
    }

    /// Drops the GL context and the window. A no-op when no window
    /// exists.
    pub fn destroy_window(&mut self) {
        self.gl_context = None;
        self.window = None;
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    pub fn event_pump(&self) -> Result<sdl2::EventPump, GraphicsError> {
        self.sdl_context.event_pump().map_err(GraphicsError::Init)
    }

    /// Clears the color buffer, plus the depth buffer when configured,
    /// plus the stencil buffer when additionally configured.
    pub fn clear(&self, r: f32, g: f32, b: f32, a: f32) {
        let mut mask = gl::COLOR_BUFFER_BIT;

        unsafe {
            gl::ClearColor(r, g, b, a);

            if self.settings.use_depth_buffer {
                mask |= gl::DEPTH_BUFFER_BIT;
                gl::ClearDepth(1.0);

                if self.settings.use_stencil_buffer {
                    mask |= gl::STENCIL_BUFFER_BIT;
                    gl::ClearStencil(1);
                }
            }

            gl::Clear(mask);
        }
    }

    pub fn clear_color(&self, color: &crate::graphics::Color) {
        self.clear(color.r, color.g, color.b, color.a);
    }

    pub fn swap_buffers(&self) {
        if let Some(window) = &self.window {
            window.gl_swap_window();
        }
    }

    /// Fits a viewport with the aspect ratio of `virtual_size` inside
    /// the drawable area, letterboxing the rest.
    pub fn resize(&self, virtual_size: (u32, u32)) {
        let window = match &self.window {
            Some(window) => window,
            None => return,
        };

        let target_aspect_ratio = virtual_size.0 as f32 / virtual_size.1 as f32;

        let size = window.drawable_size();
        let width = size.0 as i32;
        let height = size.1 as i32;

        let mut calculated_height = (width as f32 / target_aspect_ratio) as i32;
        let mut calculated_width = width;

        if calculated_height > height {
            calculated_height = height;
            calculated_width = (calculated_height as f32 * target_aspect_ratio) as i32;
        }

        let vp_x = (width / 2) - (calculated_width / 2);
        let vp_y = (height / 2) - (calculated_height / 2);

        unsafe {
            gl::Viewport(vp_x, vp_y, calculated_width, calculated_height);
            gl::Scissor(vp_x, vp_y, calculated_width, calculated_height);
        }
    }

    fn get_display_mode(&self, settings: &WindowSettings) -> Result<DisplayMode, GraphicsError> {
        let modes = self
            .video_subsystem
            .num_display_modes(0)
            .map_err(GraphicsError::Window)?;

        for i in 0..modes {
            let display_mode = self
                .video_subsystem
                .display_mode(0, i)
                .map_err(GraphicsError::Window)?;
            if display_mode.w == settings.width as i32 && display_mode.h == settings.height as i32 {
                return Ok(display_mode);
            }
        }

        Err(GraphicsError::NoDisplayMode {
            width: settings.width,
            height: settings.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = WindowSettings::default();

        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert!(!settings.fullscreen);
        assert!(settings.use_double_buffering);
        assert!(!settings.use_depth_buffer);
    }

    #[test]
    fn settings_yaml_round_trip() {
        let settings = WindowSettings {
            title: String::from("test window"),
            width: 1280,
            height: 720,
            position: Some((10, 20)),
            fullscreen: true,
            use_depth_buffer: true,
            ..WindowSettings::default()
        };

        let yaml = serde_yaml::to_string(&settings).unwrap();
        let parsed: WindowSettings = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed, settings);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let parsed: WindowSettings = serde_yaml::from_str("title: partial\nwidth: 1024\n").unwrap();

        assert_eq!(parsed.title, "partial");
        assert_eq!(parsed.width, 1024);
        assert_eq!(parsed.height, 600);
        assert!(!parsed.fullscreen);
    }
}
