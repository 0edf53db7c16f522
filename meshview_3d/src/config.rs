/// Viewer configuration
///
/// Plain data with defaults matching the stock viewer setup. Call
/// `validate()` before handing a configuration to the renderer; the renderer
/// does so itself in `Renderer::new`.

use std::path::PathBuf;
use glam::Vec3;
use winit::keyboard::KeyCode;
use crate::error::{Error, Result};

/// Top-level viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Back buffer width in pixels
    pub width: u32,
    /// Back buffer height in pixels
    pub height: u32,
    /// Initial camera setup
    pub camera: CameraConfig,
    /// Mesh, shading program and material map locations
    pub assets: AssetPaths,
    /// Color the back buffer is cleared to every frame (RGBA)
    pub clear_color: [f32; 4],
    /// Mesh spin rate around Y when rotation is enabled (degrees/second)
    pub mesh_rotation_speed: f32,
    /// Physical keys driving the camera and the toggles
    pub key_bindings: KeyBindings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            camera: CameraConfig::default(),
            assets: AssetPaths::default(),
            clear_color: [0.0, 0.0, 0.3, 1.0],
            mesh_rotation_speed: 50.0,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl ViewerConfig {
    /// Width over height of the back buffer
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "back buffer size must be non-zero (got {}x{})",
                self.width, self.height
            )));
        }
        if !self.mesh_rotation_speed.is_finite() {
            return Err(Error::InvalidConfig("mesh_rotation_speed must be finite".to_string()));
        }
        self.camera.validate()
    }
}

/// Initial camera pose and motion tuning
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_angle_degrees: f32,
    /// Starting position in world space
    pub origin: Vec3,
    /// Near clip distance
    pub near_plane: f32,
    /// Far clip distance
    pub far_plane: f32,
    /// Translation speed (units/second)
    pub move_speed: f32,
    /// Rotation speed (degrees/second)
    pub rotation_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_angle_degrees: 45.0,
            origin: Vec3::new(0.0, 0.0, -50.0),
            near_plane: 0.1,
            far_plane: 100.0,
            move_speed: 20.0,
            rotation_speed: 15.0,
        }
    }
}

impl CameraConfig {
    /// Check field of view, clip planes and speeds
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_angle_degrees > 0.0 && self.fov_angle_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "fov_angle_degrees must be in (0, 180), got {}",
                self.fov_angle_degrees
            )));
        }
        if !(self.near_plane > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "near_plane must be positive, got {}",
                self.near_plane
            )));
        }
        if !(self.far_plane > self.near_plane) {
            return Err(Error::InvalidConfig(format!(
                "far_plane ({}) must be beyond near_plane ({})",
                self.far_plane, self.near_plane
            )));
        }
        if !self.origin.is_finite() || !self.move_speed.is_finite() || !self.rotation_speed.is_finite() {
            return Err(Error::InvalidConfig("camera origin and speeds must be finite".to_string()));
        }
        Ok(())
    }
}

/// Asset locations, relative to the working directory
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub mesh: PathBuf,
    pub shading_program: PathBuf,
    pub diffuse_map: PathBuf,
    pub normal_map: PathBuf,
    pub specular_map: PathBuf,
    pub glossiness_map: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            mesh: PathBuf::from("Resources/vehicle.obj"),
            shading_program: PathBuf::from("Resources/PosCol3D.fx"),
            diffuse_map: PathBuf::from("Resources/vehicle_diffuse.png"),
            normal_map: PathBuf::from("Resources/vehicle_normal.png"),
            specular_map: PathBuf::from("Resources/vehicle_specular.png"),
            glossiness_map: PathBuf::from("Resources/vehicle_gloss.png"),
        }
    }
}

/// Physical key assignment for the named viewer keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub strafe_left: KeyCode,
    pub strafe_right: KeyCode,
    pub cycle_technique: KeyCode,
    pub toggle_rotation: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            strafe_left: KeyCode::KeyA,
            strafe_right: KeyCode::KeyD,
            cycle_technique: KeyCode::F2,
            toggle_rotation: KeyCode::F5,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
