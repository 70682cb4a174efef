use crate::api::types::NodeId;
use crate::components::node::Node;
use crate::components::planet::PlanetNode;

/// Top-level scene storage using a flat Vec, in insertion order.
/// Designed for small scenes (a backdrop, a few lights, a handful of planets).
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(16),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node. Names are not deduplicated.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Remove a top-level node by ID. Returns the removed node if found.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    /// Get a reference to a top-level node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable reference to a top-level node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Iterate over top-level nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Find the first top-level node with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    /// Find all top-level nodes with the given name.
    pub fn find_all_by_name(&self, name: &str) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.name == name).collect()
    }

    /// Iterate over planet groups.
    pub fn planets(&self) -> impl Iterator<Item = (&Node, &PlanetNode)> {
        self.nodes
            .iter()
            .filter_map(|n| n.as_planet().map(|p| (n, p)))
    }

    /// The first planet group with the given name.
    pub fn planet_mut(&mut self, name: &str) -> Option<&mut PlanetNode> {
        self.nodes
            .iter_mut()
            .filter(|n| n.name == name)
            .find_map(|n| n.as_planet_mut())
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
