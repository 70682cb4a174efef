use serde::{Deserialize, Serialize};

use crate::components::geometry::Geometry;
use crate::components::material::{Material, MaterialKind};

/// A renderable: geometry paired with a material.
/// Also used for point clouds, where the geometry is a position buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn kind(&self) -> MaterialKind {
        self.material.kind
    }
}
