use ember::engine;
use ember::gl_utilities::gl_buffer::{AttributeInfo, GLBuffer};
use ember::gl_utilities::gl_call;
use ember::gl_utilities::shader::ShaderManager;
use ember::graphics::{Color, Graphics, Vertex, WindowSettings};
use ember::math::{Matrix4, Transform, Vector3};
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use simplelog::LevelFilter;

const VERTEX_SOURCE: &str = r#"
#version 410 core

uniform mat4 u_projection;
uniform mat4 u_model;

in vec3 a_position;

void main() {
    gl_Position = u_projection * u_model * vec4(a_position, 1.0);
}
"#;

const FRAGMENT_SOURCE: &str = r#"
#version 410 core

uniform vec4 u_tint;

out vec4 frag_color;

void main() {
    frag_color = u_tint;
}
"#;

fn main() {
    engine::init_logger(LevelFilter::Info);

    let mut graphics = Graphics::new().expect("SDL initialization failed");
    graphics
        .create_window(WindowSettings {
            title: String::from("spinning quad"),
            ..WindowSettings::default()
        })
        .expect("window creation failed");

    let mut shader_manager = ShaderManager::default();
    let shader = shader_manager.register("basic", VERTEX_SOURCE, FRAGMENT_SOURCE);
    shader.use_shader();

    let mut buffer = GLBuffer::new();
    buffer.configure(
        vec![AttributeInfo {
            location: shader.get_attribute_location("a_position"),
            component_size: 3,
        }],
        false,
    );
    buffer.upload(
        &[
            Vertex::new(-50.0, -50.0, 0.0, 0.0, 0.0),
            Vertex::new(-50.0, 50.0, 0.0, 0.0, 1.0),
            Vertex::new(50.0, 50.0, 0.0, 1.0, 1.0),
            Vertex::new(50.0, 50.0, 0.0, 1.0, 1.0),
            Vertex::new(50.0, -50.0, 0.0, 1.0, 0.0),
            Vertex::new(-50.0, -50.0, 0.0, 0.0, 0.0),
        ]
        .iter()
        .flat_map(|v| v.to_array()[..3].to_vec())
        .collect::<Vec<f32>>(),
    );

    let settings = graphics.settings().clone();
    let projection = Matrix4::orthographic(
        0.0,
        settings.width as f32,
        settings.height as f32,
        0.0,
        -100.0,
        100.0,
    );
    gl_call::set_uniform_matrix4(shader.get_uniform_location("u_projection"), &projection);

    let tint = Color::green();
    gl_call::set_uniform_4f(
        shader.get_uniform_location("u_tint"),
        tint.r,
        tint.g,
        tint.b,
        tint.a,
    );

    let mut transform = Transform::default();
    transform.position = Vector3::new(settings.width as f32 / 2.0, settings.height as f32 / 2.0, 0.0);

    graphics.resize((settings.width, settings.height));

    let u_model = shader.get_uniform_location("u_model");
    let mut event_pump = graphics.event_pump().expect("no event pump available");

    info!("entering main loop");
    'main_loop: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyUp {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'main_loop,
                _ => {}
            }
        }

        transform.rotation.z += 1.0;

        graphics.clear(0.1, 0.1, 0.1, 1.0);
        gl_call::set_uniform_matrix4(u_model, &transform.get_transformation_matrix());
        buffer.draw();
        graphics.swap_buffers();

        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}
