//! Orbit camera around a point on the pitch

use glam::{Mat4, Vec2, Vec3, Vec4};
use tactics_core::geometry::Ray;

const MIN_PITCH: f32 = 0.05;
const MAX_PITCH: f32 = 1.55;

/// Orbit camera that revolves around a target on the ground plane
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    /// Horizontal rotation (rad); 0 looks from +Z toward -Z
    pub yaw: f32,
    /// Elevation above the ground (rad)
    pub pitch: f32,
    /// Vertical field of view (rad)
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Camera {
    pub const DEFAULT_DISTANCE: f32 = 95.0;
    pub const DEFAULT_PITCH: f32 = 0.9;

    pub fn new(aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: Self::DEFAULT_DISTANCE,
            yaw: 0.0,
            pitch: Self::DEFAULT_PITCH,
            fov: 45f32.to_radians(),
            near: 0.5,
            far: 1000.0,
            aspect,
            min_distance: 10.0,
            max_distance: 250.0,
        }
    }

    pub fn update_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn set_fov_degrees(&mut self, degrees: f32) {
        self.fov = degrees.clamp(10.0, 120.0).to_radians();
    }

    pub fn set_distance_limits(&mut self, min: f32, max: f32) {
        self.min_distance = min.max(0.1);
        self.max_distance = max.max(self.min_distance);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        let eye = self.eye();
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            eye_pos: [eye.x, eye.y, eye.z, 1.0],
        }
    }

    /// Rotate around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Slide the target across the ground. Deltas are in screen pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        let right = Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin());
        let forward = Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos());
        let scale = self.distance * sensitivity;
        self.target += (-right * dx + forward * dy) * scale;
        self.target.y = 0.0;
    }

    /// Positive deltas move closer
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(self.min_distance, self.max_distance);
    }

    /// Look straight down at the pitch
    pub fn set_top_view(&mut self) {
        self.yaw = 0.0;
        self.pitch = MAX_PITCH;
    }

    /// Back to the initial broadcast angle
    pub fn reset(&mut self, distance: f32, pitch: f32) {
        self.target = Vec3::ZERO;
        self.yaw = 0.0;
        self.pitch = pitch.clamp(MIN_PITCH, MAX_PITCH);
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }

    /// World ray through a pixel of a viewport of the given size
    pub fn screen_to_ray(&self, screen_x: f32, screen_y: f32, width: f32, height: f32) -> Ray {
        let ndc_x = 2.0 * screen_x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen_y / height;

        let inverse = self.view_proj().inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Ray::new(near, (far - near).normalize())
    }

    /// Pixel position of a world point, or None if it is behind the camera
    pub fn world_to_screen(&self, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_proj() * Vec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

/// GPU camera uniform
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye_pos: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tactics_core::geometry::intersect_ground_plane;

    #[test]
    fn test_center_ray_hits_target() {
        let mut camera = Camera::new(1.5);
        camera.target = Vec3::new(10.0, 0.0, -5.0);
        let ray = camera.screen_to_ray(600.0, 400.0, 1200.0, 800.0);
        let hit = intersect_ground_plane(&ray).unwrap();

        assert_relative_eq!(hit.x, 10.0, epsilon = 1e-2);
        assert_relative_eq!(hit.z, -5.0, epsilon = 1e-2);
    }

    #[test]
    fn test_projection_round_trip() {
        let camera = Camera::new(1.0);
        let point = Vec3::new(12.0, 0.0, 8.0);
        let screen = camera.world_to_screen(point, 800.0, 800.0).unwrap();
        let ray = camera.screen_to_ray(screen.x, screen.y, 800.0, 800.0);
        let hit = intersect_ground_plane(&ray).unwrap();

        assert_relative_eq!(hit.x, point.x, epsilon = 1e-2);
        assert_relative_eq!(hit.z, point.z, epsilon = 1e-2);
    }

    #[test]
    fn test_point_behind_camera_is_hidden() {
        let camera = Camera::new(1.0);
        let behind = camera.eye() + (camera.eye() - camera.target);
        assert!(camera.world_to_screen(behind, 800.0, 800.0).is_none());
    }

    #[test]
    fn test_zoom_and_pitch_are_clamped() {
        let mut camera = Camera::new(1.0);
        for _ in 0..100 {
            camera.zoom(5.0);
        }
        assert_eq!(camera.distance, camera.min_distance);

        camera.orbit(0.0, 10.0);
        assert_eq!(camera.pitch, MAX_PITCH);
        camera.orbit(0.0, -10.0);
        assert_eq!(camera.pitch, MIN_PITCH);
    }

    #[test]
    fn test_pan_stays_on_ground() {
        let mut camera = Camera::new(1.0);
        camera.pan(30.0, -20.0, 0.002);
        assert_eq!(camera.target.y, 0.0);
        assert!(camera.target.x < 0.0);
    }
}
