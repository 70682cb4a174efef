pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::setup::{SceneConfig, SceneContext, SceneSetup};
pub use api::types::NodeId;
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::{keys, TextureHandle, TextureRegistry};
pub use bridge::protocol::{SceneSnapshot, SnapshotNode, SnapshotObject, PROTOCOL_VERSION};
pub use components::geometry::{Aabb, Geometry};
pub use components::light::{AmbientLight, Light, PointLight};
pub use components::material::{BlendMode, Color, Material, MaterialKind, MaterialParams, Side};
pub use components::mesh::Mesh;
pub use components::node::{Node, NodeKind};
pub use components::planet::{PlanetDescriptor, PlanetNode};
pub use components::transform::Transform;
pub use core::scene::Scene;
pub use error::SceneError;
pub use systems::orbit::init_revolution_trajectory;
pub use systems::planets::{init_earth, init_saturn, init_sun, init_venus, planet_mesh};
pub use systems::rng::Rng;
pub use systems::universe::{init_background_stars, init_universe};
