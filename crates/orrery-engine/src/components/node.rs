use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::NodeId;
use crate::components::geometry::Aabb;
use crate::components::light::Light;
use crate::components::mesh::Mesh;
use crate::components::planet::PlanetNode;
use crate::components::transform::Transform;

/// What a node renders (or, for groups, what it bundles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Mesh(Mesh),
    /// Point cloud; the mesh geometry is a position buffer.
    Points(Mesh),
    Light(Light),
    Planet(PlanetNode),
}

/// One entry in the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Lookup name. Not required to be unique.
    pub name: String,
    /// Hidden nodes stay in the graph but are not drawn.
    pub visible: bool,
    pub transform: Transform,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            name: String::new(),
            visible: true,
            transform: Transform::default(),
            kind,
        }
    }

    pub fn mesh(id: NodeId, mesh: Mesh) -> Self {
        Self::new(id, NodeKind::Mesh(mesh))
    }

    pub fn points(id: NodeId, mesh: Mesh) -> Self {
        Self::new(id, NodeKind::Points(mesh))
    }

    pub fn light(id: NodeId, light: Light) -> Self {
        Self::new(id, NodeKind::Light(light))
    }

    pub fn planet(id: NodeId, planet: PlanetNode) -> Self {
        Self::new(id, NodeKind::Planet(planet))
    }

    // -- Builder pattern --

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    // -- Accessors --

    /// The mesh of a mesh or points node.
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(m) | NodeKind::Points(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_planet(&self) -> Option<&PlanetNode> {
        match &self.kind {
            NodeKind::Planet(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_planet_mut(&mut self) -> Option<&mut PlanetNode> {
        match &mut self.kind {
            NodeKind::Planet(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_planet(&self) -> bool {
        matches!(self.kind, NodeKind::Planet(_))
    }

    pub fn is_renderable(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh(_) | NodeKind::Points(_))
    }

    /// Direct children. Only planet groups have any.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Planet(p) => &p.children,
            _ => &[],
        }
    }

    /// Bounds in this node's own space (before its transform).
    pub fn local_bounds(&self) -> Option<Aabb> {
        match &self.kind {
            NodeKind::Mesh(m) | NodeKind::Points(m) => m.geometry.bounds(),
            NodeKind::Light(_) => None,
            NodeKind::Planet(p) => p
                .children
                .iter()
                .filter_map(|c| c.world_bounds())
                .reduce(|a, b| a.union(&b)),
        }
    }

    /// Bounds in the parent's space.
    pub fn world_bounds(&self) -> Option<Aabb> {
        let matrix = self.transform.matrix();
        self.local_bounds().map(|b| b.transformed(&matrix))
    }
}
