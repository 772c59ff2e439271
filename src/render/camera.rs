use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Closed-form orbit shapes for the demo cameras.
pub enum OrbitPath {
    /// Constant height, radius pulsing between 1 and 4 with a slow period.
    PulsingRadius { height: f32 },
    /// Constant radius, height swinging between -3 and 3.
    SwingingHeight { radius: f32 },
}

/// Camera circling the origin along an `OrbitPath`, advanced by a fixed
/// phase step each frame.
pub struct OrbitCamera {
    pub path: OrbitPath,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    time: f32,
}

/// Phase increment per frame, tied to the fixed render loop.
const PHASE_STEP: f32 = 0.003;

impl OrbitCamera {
    pub fn new(path: OrbitPath, config: &CameraConfig, aspect_ratio: f32) -> Self {
        Self {
            path,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: config.fov,
            aspect_ratio,
            near: config.near,
            far: config.far,
            time: 0.0,
        }
    }

    pub fn advance(&mut self) {
        self.time += PHASE_STEP;
    }

    pub fn eye(&self) -> Vec3 {
        let t = self.time;
        match self.path {
            OrbitPath::PulsingRadius { height } => {
                let r = 3.0 * (t / 10.0).cos().powi(2) + 1.0;
                Vec3::new(r * t.cos(), height, r * t.sin())
            }
            OrbitPath::SwingingHeight { radius } => {
                let h = 3.0 * (t / 4.0).cos();
                Vec3::new(radius * t.cos(), h, radius * t.sin())
            }
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    /// Model-view-projection for a model sitting at the origin.
    pub fn mvp(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix() * Mat4::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(path: OrbitPath) -> OrbitCamera {
        OrbitCamera::new(path, &CameraConfig::default(), 4.0 / 3.0)
    }

    #[test]
    fn test_pulsing_radius_starts_at_full_radius() {
        let cam = camera(OrbitPath::PulsingRadius { height: 2.0 });
        // t = 0: r = 3*cos^2(0) + 1 = 4
        let eye = cam.eye();
        assert!((eye.x - 4.0).abs() < 1e-6);
        assert!((eye.y - 2.0).abs() < 1e-6);
        assert!(eye.z.abs() < 1e-6);
    }

    #[test]
    fn test_swinging_height_keeps_radius() {
        let mut cam = camera(OrbitPath::SwingingHeight { radius: 4.5 });
        for _ in 0..1000 {
            cam.advance();
            let eye = cam.eye();
            let r = (eye.x * eye.x + eye.z * eye.z).sqrt();
            assert!((r - 4.5).abs() < 1e-4);
            assert!(eye.y.abs() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let cam = camera(OrbitPath::PulsingRadius { height: 2.0 });
        let moved = cam.view_matrix().transform_point3(cam.eye());
        assert!(moved.length() < 1e-4);
    }

    #[test]
    fn test_mvp_is_projection_times_view() {
        let cam = camera(OrbitPath::SwingingHeight { radius: 4.5 });
        let expected = cam.projection_matrix() * cam.view_matrix();
        assert_eq!(cam.mvp(), expected);
    }
}
