pub mod geometry;
pub mod light;
pub mod material;
pub mod mesh;
pub mod node;
pub mod planet;
pub mod transform;
