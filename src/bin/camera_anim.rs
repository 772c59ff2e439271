use anyhow::Result;
use glintro::{AppConfig, GlWindow, OrbitCamera, OrbitPath, ShaderProgram, VertexArray, VertexBuffer};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    keyboard::{Key, NamedKey},
};

/// The same two triangles as the `triangles` demo, pushed slightly apart in
/// depth so the orbit makes them cross over each other.
const TRIANGLE_VERTICES: [[f32; 3]; 6] = [
    [-0.7, -0.4, 0.1],
    [-0.5, -0.7, 0.1],
    [0.5, 0.7, 0.1],
    [0.7, -0.4, -0.1],
    [0.5, -0.7, -0.1],
    [-0.5, 0.7, -0.1],
];

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = AppConfig::load("glintro.toml").with_title("glintro - orbit camera");
    let (gl_window, event_loop) = GlWindow::new(&config.window)?;

    unsafe {
        gl::ClearColor(0.0, 0.0, 0.0, 0.0);
    }

    let mut red = ShaderProgram::from_files(
        "assets/shaders/transform.vert",
        "assets/shaders/red.frag",
    )?;
    let mut violet = ShaderProgram::from_files(
        "assets/shaders/transform.vert",
        "assets/shaders/violet.frag",
    )?;

    let vao = VertexArray::new();
    vao.bind();
    let vertices = VertexBuffer::new(&TRIANGLE_VERTICES);

    let mut camera = OrbitCamera::new(
        OrbitPath::PulsingRadius { height: 2.0 },
        &config.camera,
        gl_window.aspect_ratio(),
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => elwt.exit(),
            WindowEvent::Resized(size) => {
                gl_window.resize(size);
                camera.aspect_ratio = gl_window.aspect_ratio();
            }
            WindowEvent::RedrawRequested => {
                unsafe {
                    gl::Clear(gl::COLOR_BUFFER_BIT);
                }

                let mvp = camera.mvp();
                camera.advance();

                vertices.enable_attrib(0, 3);
                unsafe {
                    gl::Enable(gl::BLEND);
                    gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
                }

                red.bind();
                red.set_mat4("MVP", &mvp);
                unsafe {
                    gl::DrawArrays(gl::TRIANGLES, 0, 3);
                }

                violet.bind();
                violet.set_mat4("MVP", &mvp);
                unsafe {
                    gl::DrawArrays(gl::TRIANGLES, 3, 3);
                }

                unsafe {
                    gl::Disable(gl::BLEND);
                }
                vertices.disable_attrib(0);

                if let Err(e) = gl_window.swap_buffers() {
                    log::error!("{e}");
                    elwt.exit();
                }
            }
            _ => (),
        },
        Event::AboutToWait => gl_window.request_redraw(),
        _ => (),
    })?;

    Ok(())
}
