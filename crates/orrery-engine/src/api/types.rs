use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the scene graph.
///
/// Children of a planet group get their own ids from the same counter,
/// so an id is unique across the whole scene, not only its top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
