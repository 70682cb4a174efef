// components/transform.rs
//
// Local transform of a scene node: translation, XYZ Euler rotation, scale.
// Children of a planet group are expressed relative to the group's transform.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position/rotation/scale relative to the parent (or the world for top-level nodes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local-to-parent matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn quarter_turn_about_x_lays_xy_plane_flat() {
        let t = Transform::new().with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0));
        // +Y in the ring's plane ends up on +Z: the ring now lies in XZ.
        assert!(approx(t.transform_point(Vec3::Y), Vec3::Z));
        assert!(approx(t.transform_point(Vec3::X), Vec3::X));
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = Transform::new()
            .with_position(Vec3::new(10.0, 0.0, 0.0))
            .with_scale(Vec3::splat(2.0));
        assert!(approx(t.transform_point(Vec3::ONE), Vec3::new(12.0, 2.0, 2.0)));
    }
}
