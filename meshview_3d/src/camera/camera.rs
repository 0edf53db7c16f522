/// Camera: pose, view and projection derivation.
///
/// The pose is `origin` plus accumulated pitch and yaw (degrees). Every
/// `update` re-derives the orthonormal basis from those two angles, rebuilds
/// the look-to transform and its inverse, and rebuilds the projection only
/// when one of its inputs changed.
///
/// Naming follows the shading program parameters: `inverse_view_matrix` is
/// the world-to-camera transform, `view_matrix` is the camera's world pose.

use glam::{EulerRot, Mat4, Vec3};
use crate::config::CameraConfig;
use crate::input::{InputSnapshot, Keys, MouseMode};
use crate::math::{fov_scale, perspective_fov_lh, TO_RADIANS};

/// Pitch limit in degrees; keeps forward away from world up
pub const MAX_PITCH_DEGREES: f32 = 89.0;

const DEFAULT_NEAR_PLANE: f32 = 0.1;
const DEFAULT_FAR_PLANE: f32 = 100.0;
const DEFAULT_MOVE_SPEED: f32 = 20.0;
const DEFAULT_ROTATION_SPEED: f32 = 15.0;

#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    fov_angle: f32,
    fov_scale: f32,

    forward: Vec3,
    up: Vec3,
    right: Vec3,

    total_pitch: f32,
    total_yaw: f32,

    near_plane: f32,
    far_plane: f32,
    aspect_ratio: f32,

    move_speed: f32,
    rotation_speed: f32,

    view_matrix: Mat4,
    inverse_view_matrix: Mat4,
    projection_matrix: Mat4,
    projection_dirty: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(90.0, Vec3::ZERO, 1.0)
    }
}

impl Camera {
    /// Create a camera at `origin` looking down +Z
    pub fn new(fov_angle_degrees: f32, origin: Vec3, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            origin,
            fov_angle: fov_angle_degrees,
            fov_scale: fov_scale(fov_angle_degrees),
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            total_pitch: 0.0,
            total_yaw: 0.0,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            aspect_ratio,
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            view_matrix: Mat4::IDENTITY,
            inverse_view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            projection_dirty: true,
        };
        camera.calculate_view_matrix();
        camera.refresh_projection();
        camera
    }

    /// Create a camera from configuration (pose, clip planes, speeds)
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        let mut camera = Self::new(config.fov_angle_degrees, config.origin, aspect_ratio);
        camera.move_speed = config.move_speed;
        camera.rotation_speed = config.rotation_speed;
        camera.set_clip_planes(config.near_plane, config.far_plane);
        camera.refresh_projection();
        camera
    }

    /// Reset the pose: new fov, origin and aspect ratio, angles back to zero.
    ///
    /// Speeds and clip planes are kept.
    pub fn initialize(&mut self, fov_angle_degrees: f32, origin: Vec3, aspect_ratio: f32) {
        self.origin = origin;
        self.total_pitch = 0.0;
        self.total_yaw = 0.0;
        self.aspect_ratio = aspect_ratio;
        self.set_fov_angle(fov_angle_degrees);
        self.calculate_view_matrix();
        self.refresh_projection();
    }

    /// Advance the pose from one tick of input
    pub fn update(&mut self, elapsed_seconds: f32, input: &InputSnapshot) {
        let step = self.move_speed * elapsed_seconds;
        let turn = self.rotation_speed * elapsed_seconds;

        // ===== Keyboard =====
        if input.is_down(Keys::FORWARD) {
            self.origin += self.forward * step;
        }
        if input.is_down(Keys::BACK) {
            self.origin -= self.forward * step;
        }
        if input.is_down(Keys::STRAFE_LEFT) {
            self.origin -= self.right * step;
        }
        if input.is_down(Keys::STRAFE_RIGHT) {
            self.origin += self.right * step;
        }

        // ===== Mouse =====
        let delta = input.mouse_delta;
        match input.mouse_mode() {
            MouseMode::Idle => {}
            MouseMode::Pan => {
                if delta.y > 0.0 {
                    self.origin -= self.up * step;
                } else if delta.y < 0.0 {
                    self.origin += self.up * step;
                }
                if delta.x > 0.0 {
                    self.origin += self.right * step;
                } else if delta.x < 0.0 {
                    self.origin -= self.right * step;
                }
            }
            MouseMode::Dolly => {
                if delta.y > 0.0 {
                    self.origin -= self.forward * step;
                } else if delta.y < 0.0 {
                    self.origin += self.forward * step;
                }
                self.total_yaw += turn_sign(delta.x) * turn;
            }
            MouseMode::Look => {
                self.total_pitch -= turn_sign(delta.y) * turn;
                self.total_yaw += turn_sign(delta.x) * turn;
            }
        }
        self.total_pitch = self.total_pitch.clamp(-MAX_PITCH_DEGREES, MAX_PITCH_DEGREES);

        self.calculate_view_matrix();
        self.refresh_projection();
    }

    /// Re-derive the basis and both view matrices from the current pose
    pub fn calculate_view_matrix(&mut self) {
        // Pitch about X first, then yaw about Y
        let rotation = Mat4::from_euler(
            EulerRot::ZYX,
            0.0,
            self.total_yaw * TO_RADIANS,
            self.total_pitch * TO_RADIANS,
        );
        self.forward = rotation.transform_vector3(Vec3::Z).normalize();

        self.inverse_view_matrix = Mat4::look_to_lh(self.origin, self.forward, Vec3::Y);
        self.view_matrix = self.inverse_view_matrix.inverse();

        self.right = self.view_matrix.x_axis.truncate();
        self.up = self.view_matrix.y_axis.truncate();
    }

    /// Rebuild the projection if fov, aspect ratio or clip planes changed
    pub fn refresh_projection(&mut self) {
        if !self.projection_dirty {
            return;
        }
        self.projection_matrix = perspective_fov_lh(
            self.fov_scale,
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        );
        self.projection_dirty = false;
    }

    // ===== SETTERS =====

    /// Change the vertical field of view (degrees)
    pub fn set_fov_angle(&mut self, fov_angle_degrees: f32) {
        self.fov_angle = fov_angle_degrees;
        self.fov_scale = fov_scale(fov_angle_degrees);
        self.projection_dirty = true;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.projection_dirty = true;
    }

    pub fn set_clip_planes(&mut self, near_plane: f32, far_plane: f32) {
        self.near_plane = near_plane;
        self.far_plane = far_plane;
        self.projection_dirty = true;
    }

    pub fn set_move_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    pub fn set_rotation_speed(&mut self, rotation_speed: f32) {
        self.rotation_speed = rotation_speed;
    }

    // ===== GETTERS =====

    /// Camera world pose (basis columns right/up/forward, translation origin)
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// World-to-camera transform
    pub fn inverse_view_matrix(&self) -> &Mat4 {
        &self.inverse_view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// World-to-clip transform (`projection * inverse_view`)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.inverse_view_matrix
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in degrees
    pub fn fov_angle(&self) -> f32 {
        self.fov_angle
    }

    /// `tan(fov / 2)`
    pub fn fov_scale(&self) -> f32 {
        self.fov_scale
    }

    /// Accumulated pitch in degrees
    pub fn total_pitch(&self) -> f32 {
        self.total_pitch
    }

    /// Accumulated yaw in degrees
    pub fn total_yaw(&self) -> f32 {
        self.total_yaw
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
}

/// +1 / -1 / 0 by the sign of a pointer delta component
fn turn_sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
