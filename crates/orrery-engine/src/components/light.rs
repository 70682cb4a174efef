/// Light sources. Lights are ordinary scene nodes: their position
/// comes from the owning node's transform.

use serde::{Deserialize, Serialize};

use crate::components::material::Color;

/// Omnidirectional light radiating from the node's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    /// Cutoff distance in world units. 0 means no cutoff.
    pub distance: f32,
    /// Falloff exponent along `distance`.
    pub decay: f32,
}

impl PointLight {
    pub fn new(color: Color, intensity: f32, distance: f32) -> Self {
        Self {
            color,
            intensity,
            distance,
            decay: 2.0,
        }
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    /// Whether the light reaches arbitrarily far.
    pub fn is_unbounded(&self) -> bool {
        self.distance <= 0.0
    }
}

/// Flat light applied to every lit surface regardless of orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Point(PointLight),
    Ambient(AmbientLight),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Color::from_hex(0xffffff), 1.2, 0.0);
        assert_eq!(light.color, Color::WHITE);
        assert_eq!(light.intensity, 1.2);
        assert_eq!(light.decay, 2.0);
        assert!(light.is_unbounded());
    }

    #[test]
    fn bounded_point_light() {
        let light = PointLight::new(Color::WHITE, 1.0, 500.0).with_decay(1.0);
        assert!(!light.is_unbounded());
        assert_eq!(light.decay, 1.0);
    }

    #[test]
    fn ambient_default_is_white() {
        let ambient = AmbientLight::default();
        assert_eq!(ambient.color, Color::WHITE);
        assert_eq!(ambient.intensity, 1.0);
    }
}
