/// Scene snapshot handed to the host renderer as JSON.
/// Must stay in sync with the host's scene loader.
///
/// The graph is flattened: every node (groups and their children) appears
/// once, in depth-first order, with its parent id, its local matrix and its
/// world matrix. Point clouds ship without positions; the host reads those
/// through the flat `f32` buffer exposed by the web bridge.

use glam::Mat4;
use serde::Serialize;

use crate::api::types::NodeId;
use crate::components::light::Light;
use crate::components::material::Material;
use crate::components::geometry::Geometry;
use crate::components::node::{Node, NodeKind};
use crate::components::planet::PlanetDescriptor;
use crate::core::scene::Scene;
use crate::error::SceneError;

/// Snapshot format version written into every snapshot.
pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub version: u32,
    pub nodes: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub name: String,
    pub visible: bool,
    /// Column-major local-to-parent matrix.
    pub local: [f32; 16],
    /// Column-major local-to-world matrix.
    pub world: [f32; 16],
    pub object: SnapshotObject,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SnapshotObject {
    Mesh { geometry: Geometry, material: Material },
    Points { count: usize, material: Material },
    Light { light: Light },
    Group { planet: PlanetDescriptor, angle: f32 },
}

impl SceneSnapshot {
    /// Flatten the scene into snapshot nodes.
    pub fn capture(scene: &Scene) -> Self {
        let mut nodes = Vec::new();
        for node in scene.iter() {
            push_node(node, None, Mat4::IDENTITY, &mut nodes);
        }
        Self {
            version: PROTOCOL_VERSION,
            nodes,
        }
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string(self).map_err(SceneError::Snapshot)
    }

    pub fn get(&self, id: NodeId) -> Option<&SnapshotNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

fn push_node(node: &Node, parent: Option<NodeId>, parent_world: Mat4, out: &mut Vec<SnapshotNode>) {
    let local = node.transform.matrix();
    let world = parent_world * local;
    let object = match &node.kind {
        NodeKind::Mesh(mesh) => SnapshotObject::Mesh {
            geometry: mesh.geometry.clone(),
            material: mesh.material.clone(),
        },
        NodeKind::Points(mesh) => SnapshotObject::Points {
            count: mesh.geometry.positions().len(),
            material: mesh.material.clone(),
        },
        NodeKind::Light(light) => SnapshotObject::Light { light: *light },
        NodeKind::Planet(planet) => SnapshotObject::Group {
            planet: planet.planet_msg.clone(),
            angle: planet.angle,
        },
    };
    out.push(SnapshotNode {
        id: node.id,
        parent,
        name: node.name.clone(),
        visible: node.visible,
        local: local.to_cols_array(),
        world: world.to_cols_array(),
        object,
    });
    for child in node.children() {
        push_node(child, Some(node.id), world, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::setup::SceneContext;
    use crate::systems::planets::{init_earth, MOON};
    use crate::systems::universe::init_background_stars;
    use glam::Vec3;

    #[test]
    fn children_follow_parent_with_world_offsets() {
        let mut ctx = SceneContext::new();
        let earth = PlanetDescriptor::new("地球", 20.0, [500.0, 0.0, 0.0], "earth");
        let id = init_earth(&earth, &mut ctx).unwrap();

        let snapshot = SceneSnapshot::capture(&ctx.scene);
        assert_eq!(snapshot.version, PROTOCOL_VERSION);
        assert_eq!(snapshot.nodes.len(), 5);
        assert_eq!(snapshot.nodes[0].id, id);
        assert!(snapshot.nodes[1..].iter().all(|n| n.parent == Some(id)));

        let moon = snapshot.nodes.iter().find(|n| n.name == MOON).unwrap();
        let world = Mat4::from_cols_array(&moon.world);
        assert_eq!(world.transform_point3(Vec3::ZERO), Vec3::new(560.0, 0.0, 0.0));
    }

    #[test]
    fn points_are_summarized() {
        let mut ctx = SceneContext::new();
        ctx.config.star_count = 50;
        let id = init_background_stars(&mut ctx);
        let snapshot = SceneSnapshot::capture(&ctx.scene);
        match &snapshot.get(id).unwrap().object {
            SnapshotObject::Points { count, .. } => assert_eq!(*count, 50),
            other => panic!("expected points, got {other:?}"),
        }
    }

    #[test]
    fn json_is_tagged() {
        let mut ctx = SceneContext::new();
        let earth = PlanetDescriptor::new("地球", 20.0, [500.0, 0.0, 0.0], "earth");
        init_earth(&earth, &mut ctx).unwrap();
        let json = SceneSnapshot::capture(&ctx.scene).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["nodes"][0]["object"]["type"], "group");
        assert_eq!(value["nodes"][0]["object"]["planet"]["name"], "地球");
        assert_eq!(value["nodes"][1]["object"]["type"], "mesh");
    }
}
