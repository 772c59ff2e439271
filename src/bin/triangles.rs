use anyhow::Result;
use glintro::{AppConfig, GlWindow, ShaderProgram, VertexArray, VertexBuffer};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    keyboard::{Key, NamedKey},
};

/// Two overlapping triangles, drawn blended with different programs.
const TRIANGLE_VERTICES: [[f32; 3]; 6] = [
    [-0.7, -0.4, 0.0],
    [-0.5, -0.7, 0.0],
    [0.5, 0.7, 0.0],
    [0.7, -0.4, 0.0],
    [0.5, -0.7, 0.0],
    [-0.5, 0.7, 0.0],
];

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = AppConfig::load("glintro.toml").with_title("glintro - not very red triangles");
    let (gl_window, event_loop) = GlWindow::new(&config.window)?;

    unsafe {
        gl::ClearColor(0.0, 0.0, 0.0, 0.0);
    }

    let red = ShaderProgram::from_files(
        "assets/shaders/passthrough.vert",
        "assets/shaders/red.frag",
    )?;
    let violet = ShaderProgram::from_files(
        "assets/shaders/passthrough.vert",
        "assets/shaders/violet.frag",
    )?;

    let vao = VertexArray::new();
    vao.bind();
    let vertices = VertexBuffer::new(&TRIANGLE_VERTICES);

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
            WindowEvent::Resized(size) => gl_window.resize(size),
            WindowEvent::RedrawRequested => {
                unsafe {
                    gl::Clear(gl::COLOR_BUFFER_BIT);
                }

                vertices.enable_attrib(0, 3);
                unsafe {
                    gl::Enable(gl::BLEND);
                    gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
                }

                red.bind();
                unsafe {
                    gl::DrawArrays(gl::TRIANGLES, 0, 3);
                }

                violet.bind();
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
