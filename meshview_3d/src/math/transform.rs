/// Angle conversion and the projection builder keyed on `tan(fov / 2)`.

use glam::{Mat4, Vec4};

/// Degrees to radians factor.
pub const TO_RADIANS: f32 = std::f32::consts::PI / 180.0;

/// Field-of-view scale: `tan(fov / 2)` for a vertical angle in degrees.
pub fn fov_scale(fov_angle_degrees: f32) -> f32 {
    (fov_angle_degrees * TO_RADIANS / 2.0).tan()
}

/// Left-handed perspective projection from a precomputed `tan(fov / 2)`.
///
/// Same matrix as `Mat4::perspective_lh(2.0 * fov_scale.atan(), ...)`, without
/// going back through the angle. Maps view-space depth `near..far` to clip
/// depth `0..1`.
pub fn perspective_fov_lh(fov_scale: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    let y_scale = 1.0 / fov_scale;
    let x_scale = y_scale / aspect_ratio;
    let depth_scale = far / (far - near);

    Mat4::from_cols(
        Vec4::new(x_scale, 0.0, 0.0, 0.0),
        Vec4::new(0.0, y_scale, 0.0, 0.0),
        Vec4::new(0.0, 0.0, depth_scale, 1.0),
        Vec4::new(0.0, 0.0, -near * depth_scale, 0.0),
    )
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
