use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::node::Node;
use crate::error::SceneError;

/// External per-planet configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetDescriptor {
    /// Display name, also the planet group's node name.
    pub name: String,
    /// Body radius in world units.
    pub size: f32,
    /// Group position. `position[0]` doubles as the orbital radius.
    pub position: [f32; 3],
    /// Texture key of the body's surface map.
    #[serde(alias = "mapImg")]
    pub map_img: String,
}

impl PlanetDescriptor {
    pub fn new(name: impl Into<String>, size: f32, position: [f32; 3], map_img: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            position,
            map_img: map_img.into(),
        }
    }

    pub fn position_vec(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Radius of the orbit ring drawn for this body.
    pub fn orbit_radius(&self) -> f32 {
        self.position[0]
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.name.trim().is_empty() {
            return Err(SceneError::invalid(&self.name, "name must not be empty"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(SceneError::invalid(
                &self.name,
                format!("size must be a positive number, got {}", self.size),
            ));
        }
        if self.position.iter().any(|c| !c.is_finite()) {
            return Err(SceneError::invalid(
                &self.name,
                format!("position must be finite, got {:?}", self.position),
            ));
        }
        Ok(())
    }
}

/// A planet group: one body plus its decorations, with the descriptor
/// it was built from and the phase driven by the host's animation loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetNode {
    pub planet_msg: PlanetDescriptor,
    /// Current rotation/revolution phase in radians.
    pub angle: f32,
    pub children: Vec<Node>,
}

impl PlanetNode {
    pub fn new(descriptor: PlanetDescriptor) -> Self {
        Self {
            planet_msg: descriptor,
            angle: 0.0,
            children: Vec::new(),
        }
    }

    pub fn is_planet(&self) -> bool {
        true
    }

    pub fn add(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.add(child);
        self
    }

    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }
}
