/// Backdrop factories: the panorama sphere, the sun's light, the starfield.

use glam::Vec3;

use crate::api::setup::SceneContext;
use crate::api::types::NodeId;
use crate::assets::registry::keys;
use crate::components::geometry::Geometry;
use crate::components::light::{AmbientLight, Light, PointLight};
use crate::components::material::{BlendMode, Color, Material, MaterialKind, MaterialParams, Side};
use crate::components::mesh::Mesh;
use crate::components::node::Node;

pub const UNIVERSE_NODE: &str = "universe";
pub const SUN_LIGHT_NODE: &str = "sun_light";
pub const AMBIENT_LIGHT_NODE: &str = "ambient_light";
pub const STARS_NODE: &str = "stars";

/// Add the panorama sphere and the lights.
///
/// The sphere is double-sided so the panorama shows from inside. A white
/// point light sits at the origin with no distance cutoff. The ambient
/// light is only added when the config asks for it.
pub fn init_universe(ctx: &mut SceneContext) {
    let map = ctx.texture(keys::UNIVERSE);
    let material = Material::lambert().with_params(MaterialParams::new().map(map).side(Side::Double));
    let geometry = Geometry::sphere(ctx.config.universe_radius, ctx.config.sphere_segments);

    let id = ctx.next_id();
    ctx.scene
        .add(Node::mesh(id, Mesh::new(geometry, material)).with_name(UNIVERSE_NODE));

    if ctx.config.ambient_light {
        let id = ctx.next_id();
        ctx.scene.add(
            Node::light(id, Light::Ambient(AmbientLight::default())).with_name(AMBIENT_LIGHT_NODE),
        );
    }

    let light = PointLight::new(Color::from_hex(0xffffff), ctx.config.sun_light_intensity, 0.0);
    let id = ctx.next_id();
    ctx.scene.add(
        Node::light(id, Light::Point(light))
            .with_name(SUN_LIGHT_NODE)
            .with_position(Vec3::ZERO),
    );
    log::debug!("universe: radius {}", ctx.config.universe_radius);
}

/// Add the background starfield and return its node.
///
/// Every coordinate is uniform in [-1, 1) and the node is scaled by the
/// configured spread, so the stars fill a cube, not a sphere shell.
/// Additive blending with no depth test keeps them visible in any order.
pub fn init_background_stars(ctx: &mut SceneContext) -> NodeId {
    let count = ctx.config.star_count;
    let rng = &mut ctx.rng;
    let positions: Vec<Vec3> = (0..count)
        .map(|_| Vec3::new(rng.next_signed(), rng.next_signed(), rng.next_signed()))
        .collect();

    let map = ctx.texture(keys::STAR);
    let material = Material::new(MaterialKind::Points).with_params(
        MaterialParams::new()
            .map(map)
            .size(ctx.config.star_size)
            .blending(BlendMode::Additive)
            .depth_test(false),
    );

    let id = ctx.next_id();
    ctx.scene.add(
        Node::points(id, Mesh::new(Geometry::buffer(positions), material))
            .with_name(STARS_NODE)
            .with_scale(Vec3::splat(ctx.config.star_spread)),
    );
    log::debug!("starfield: {count} stars");
    id
}
