use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub samples: u8,
    pub gl_major: u8,
    pub gl_minor: u8,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glintro".to_string(),
            width: 1024,
            height: 768,
            samples: 4,
            gl_major: 3,
            gl_minor: 3,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
}

impl AppConfig {
    /// Loads `path` as TOML, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Clones the defaults with a different window title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.window.title = title.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 768);
        assert_eq!(config.window.gl_major, 3);
        assert_eq!(config.window.gl_minor, 3);
        assert_eq!(config.camera.fov, 45.0);
        assert!(config.camera.near < config.camera.far);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default().with_title("round trip");
        let text = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.window.title, "round trip");
        assert_eq!(parsed.window.samples, config.window.samples);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\nwidth = 640\nheight = 480").unwrap();

        let config = AppConfig::load(file.path());
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        // Everything not in the file keeps its default
        assert_eq!(config.window.title, "glintro");
        assert_eq!(config.camera.fov, 45.0);
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let config = AppConfig::load("/definitely/not/here.toml");
        assert_eq!(config.window.width, 1024);
    }
}
