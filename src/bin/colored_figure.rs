use anyhow::Result;
use glintro::{
    rainbow, AppConfig, GlWindow, OrbitCamera, OrbitPath, ShaderProgram, VertexArray, VertexBuffer,
};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    keyboard::{Key, NamedKey},
};

/// One quarter of the figure: a bar of the square frame, 4 faces of 2
/// triangles each. The other three quarters are this section rotated about Y.
const BASE_SECTION: [[f32; 3]; 24] = [
    // bottom face
    [0.75, -0.25, -0.75],
    [1.25, -0.25, 1.25],
    [0.75, -0.25, 0.75],
    [1.25, -0.25, -1.25],
    [1.25, -0.25, 1.25],
    [0.75, -0.25, -0.75],
    // outer face
    [1.25, -0.25, 1.25],
    [1.25, -0.25, -1.25],
    [1.25, 0.25, 1.25],
    [1.25, 0.25, 1.25],
    [1.25, -0.25, -1.25],
    [1.25, 0.25, -1.25],
    // top face
    [1.25, 0.25, 1.25],
    [1.25, 0.25, -1.25],
    [0.75, 0.25, 0.75],
    [0.75, 0.25, 0.75],
    [1.25, 0.25, -1.25],
    [0.75, 0.25, -0.75],
    // inner face
    [0.75, 0.25, -0.75],
    [0.75, -0.25, 0.75],
    [0.75, 0.25, 0.75],
    [0.75, -0.25, -0.75],
    [0.75, -0.25, 0.75],
    [0.75, 0.25, -0.75],
];

/// Builds the full 96-vertex frame from the base section and three quarter
/// turns about the Y axis.
fn figure_vertices() -> Vec<[f32; 3]> {
    let mut vertices = Vec::with_capacity(BASE_SECTION.len() * 4);
    let mut section = BASE_SECTION;
    for _ in 0..4 {
        vertices.extend_from_slice(&section);
        for v in &mut section {
            // quarter turn: (x, z) -> (z, -x)
            *v = [v[2], v[1], -v[0]];
        }
    }
    vertices
}

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = AppConfig::load("glintro.toml").with_title("glintro - rainbow figure");
    let (gl_window, event_loop) = GlWindow::new(&config.window)?;

    unsafe {
        // Dark blue background
        gl::ClearColor(0.0, 0.0, 0.4, 0.0);
        gl::Enable(gl::DEPTH_TEST);
        gl::DepthFunc(gl::LESS);
    }

    let mut program = ShaderProgram::from_files(
        "assets/shaders/color.vert",
        "assets/shaders/color.frag",
    )?;

    let vao = VertexArray::new();
    vao.bind();

    let figure = figure_vertices();
    let vertex_count = figure.len() as i32;
    let vertices = VertexBuffer::new(&figure);
    let colors = VertexBuffer::new(&rainbow(figure.len()));

    let mut camera = OrbitCamera::new(
        OrbitPath::SwingingHeight { radius: 4.5 },
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
                    gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
                }

                let mvp = camera.mvp();
                camera.advance();

                program.bind();
                program.set_mat4("MVP", &mvp);

                vertices.enable_attrib(0, 3);
                colors.enable_attrib(1, 3);

                unsafe {
                    gl::DrawArrays(gl::TRIANGLES, 0, vertex_count);
                }

                vertices.disable_attrib(0);
                colors.disable_attrib(1);

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_has_four_sections() {
        assert_eq!(figure_vertices().len(), 96);
    }

    #[test]
    fn test_sections_are_quarter_turns() {
        let figure = figure_vertices();
        for i in 0..24 {
            let [x, y, z] = figure[i];
            let rotated = [z, y, -x];
            assert_eq!(figure[i + 24], rotated);
        }
    }

    #[test]
    fn test_figure_stays_in_bounds() {
        for v in figure_vertices() {
            for coord in v {
                assert!(coord.abs() <= 1.25);
            }
        }
    }
}
