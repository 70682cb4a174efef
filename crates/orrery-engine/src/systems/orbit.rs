/// Orbit-ring factory: a thin flat ring at a planet's orbital radius.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::api::setup::SceneContext;
use crate::api::types::NodeId;
use crate::components::geometry::Geometry;
use crate::components::material::{Color, Material, MaterialKind, MaterialParams, Side};
use crate::components::mesh::Mesh;
use crate::components::node::Node;
use crate::components::planet::PlanetDescriptor;
use crate::error::SceneError;

/// Suffix of an orbit ring's node name, after the planet name.
pub const TRACK_SUFFIX: &str = ":track";

const TRACK_COLOR: u32 = 0xf8f8f8;
const TRACK_LINE_WIDTH: f32 = 0.5;

/// Add the orbit ring for `data`, straight into the scene (not the planet group).
///
/// Returns `Ok(None)` for the sun, which gets no ring. The ring spans
/// `orbit_radius .. orbit_radius + orbit_ring_width`, centered on the origin
/// and turned a quarter about X to lie horizontally.
pub fn init_revolution_trajectory(
    data: &PlanetDescriptor,
    ctx: &mut SceneContext,
) -> Result<Option<NodeId>, SceneError> {
    if data.name == ctx.config.sun_name {
        return Ok(None);
    }
    let radius = data.orbit_radius();
    if !radius.is_finite() {
        return Err(SceneError::invalid(&data.name, format!("orbit radius must be finite, got {radius}")));
    }

    let geometry = Geometry::ring(
        radius,
        radius + ctx.config.orbit_ring_width,
        ctx.config.orbit_ring_segments,
    );
    let material = Material::new(MaterialKind::LineBasic).with_params(
        MaterialParams::new()
            .color(Color::from_hex(TRACK_COLOR))
            .line_width(TRACK_LINE_WIDTH)
            .side(Side::Double),
    );

    let id = ctx.next_id();
    ctx.scene.add(
        Node::mesh(id, Mesh::new(geometry, material))
            .with_name(format!("{}{TRACK_SUFFIX}", data.name))
            .with_position(Vec3::ZERO)
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
    );
    Ok(Some(id))
}
