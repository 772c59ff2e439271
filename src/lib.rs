pub mod config;
pub mod render;
pub mod window;

// Re-export commonly used types
pub use config::AppConfig;
pub use config::CameraConfig;
pub use config::WindowConfig;
pub use render::camera::{OrbitCamera, OrbitPath};
pub use render::colors::rainbow;
pub use render::mesh::{VertexArray, VertexBuffer};
pub use render::shaders::{ShaderError, ShaderProgram};
pub use window::GlWindow;
