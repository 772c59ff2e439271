pub mod camera;
pub mod colors;
pub mod mesh;
pub mod shaders;

pub use camera::{OrbitCamera, OrbitPath};
pub use mesh::{VertexArray, VertexBuffer};
pub use shaders::ShaderProgram;
