pub mod window;

pub use window::AppConfig;
pub use window::CameraConfig;
pub use window::WindowConfig;
