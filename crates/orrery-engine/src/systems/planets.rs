/// Planet factories: a generic textured body, and composite groups for
/// the sun, Earth, Venus and Saturn with their decorations.
///
/// Every composite validates its descriptor first and leaves the scene
/// untouched on failure, so the caller can skip one planet and go on.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::api::setup::SceneContext;
use crate::api::types::NodeId;
use crate::assets::registry::keys;
use crate::components::geometry::Geometry;
use crate::components::material::{Color, Material, MaterialKind, MaterialParams, Side};
use crate::components::mesh::Mesh;
use crate::components::node::Node;
use crate::components::planet::{PlanetDescriptor, PlanetNode};
use crate::error::SceneError;

// Child node names inside a planet group.
pub const BODY: &str = "body";
pub const CORONA: &str = "corona";
pub const CLOUDS: &str = "clouds";
pub const MOON_TRACK: &str = "moon_track";
pub const MOON: &str = "moon";
pub const ATMOSPHERE: &str = "atmosphere";
pub const RING: &str = "ring";

// ── Sun ──────────────────────────────────────────────────────────────

const CORONA_MARGIN: f32 = 8.0;
const CORONA_COLOR: u32 = 0xFFC607;
const CORONA_OPACITY: f32 = 0.2;

// ── Earth ────────────────────────────────────────────────────────────

const CLOUD_MARGIN: f32 = 2.0;
const CLOUD_OPACITY: f32 = 0.1;
/// Moon distance from Earth's surface.
const MOON_GAP: f32 = 40.0;
const MOON_TRACK_WIDTH: f32 = 0.2;
const MOON_TRACK_SEGMENTS: u32 = 100;
const MOON_RADIUS: f32 = 10.0;
/// Relief depth of normal-mapped surfaces.
const NORMAL_SCALE: Vec2 = Vec2::splat(10.0);

// ── Venus ────────────────────────────────────────────────────────────

const ATMOSPHERE_MARGIN: f32 = 2.0;
const ATMOSPHERE_OPACITY: f32 = 0.5;

// ── Saturn ───────────────────────────────────────────────────────────

/// (inner offset, outer offset, opacity) per band, offsets from the body radius.
const SATURN_RINGS: [(f32, f32, f32); 3] = [(10.0, 25.0, 0.8), (26.0, 30.0, 0.5), (30.1, 32.0, 0.3)];
const SATURN_RING_COLOR: u32 = 0xc0ad87;
const SATURN_RING_SEGMENTS: u32 = 100;

/// Quarter turn about X: lays a ring from the XY plane into XZ.
fn flat() -> Vec3 {
    Vec3::new(FRAC_PI_2, 0.0, 0.0)
}

/// Build a textured sphere of the descriptor's size.
///
/// The descriptor's texture becomes the material map, then `params` are
/// merged on top. The mesh is returned, not added anywhere.
pub fn planet_mesh(
    data: &PlanetDescriptor,
    kind: MaterialKind,
    params: MaterialParams,
    ctx: &mut SceneContext,
) -> Node {
    let map = ctx.texture(&data.map_img);
    let material = Material::new(kind)
        .with_params(MaterialParams::new().map(map))
        .with_params(params);
    let geometry = Geometry::sphere(data.size, ctx.config.sphere_segments);
    Node::mesh(ctx.next_id(), Mesh::new(geometry, material)).with_name(BODY)
}

/// Translucent sphere `margin` above the surface.
fn shell(
    ctx: &mut SceneContext,
    data: &PlanetDescriptor,
    name: &str,
    margin: f32,
    params: MaterialParams,
) -> Node {
    let material = Material::lambert().with_params(params);
    let geometry = Geometry::sphere(data.size + margin, ctx.config.sphere_segments);
    Node::mesh(ctx.next_id(), Mesh::new(geometry, material)).with_name(name)
}

/// Wrap children in a planet group named after the descriptor,
/// positioned at the descriptor's position, and add it to the scene.
fn add_group(ctx: &mut SceneContext, data: &PlanetDescriptor, children: Vec<Node>) -> NodeId {
    let mut group = PlanetNode::new(data.clone());
    for child in children {
        group.add(child);
    }
    let node = Node::planet(ctx.next_id(), group)
        .with_name(data.name.clone())
        .with_position(data.position_vec());
    log::debug!("planet '{}': {} children", data.name, node.children().len());
    ctx.scene.add(node)
}

/// The sun: an unlit body, plus a corona shell when `sun_corona` is set.
pub fn init_sun(data: &PlanetDescriptor, ctx: &mut SceneContext) -> Result<NodeId, SceneError> {
    data.validate()?;
    let mut children = vec![planet_mesh(
        data,
        MaterialKind::Basic,
        MaterialParams::new().translucent(1.0),
        ctx,
    )];
    if ctx.config.sun_corona {
        let corona = shell(
            ctx,
            data,
            CORONA,
            CORONA_MARGIN,
            MaterialParams::new()
                .color(Color::from_hex(CORONA_COLOR))
                .translucent(CORONA_OPACITY),
        );
        children.push(corona);
    }
    Ok(add_group(ctx, data, children))
}

/// Earth: normal-mapped body, cloud shell, moon orbit ring and moon.
pub fn init_earth(data: &PlanetDescriptor, ctx: &mut SceneContext) -> Result<NodeId, SceneError> {
    data.validate()?;

    let normal_map = ctx.texture(keys::EARTH_NORMAL);
    let body = planet_mesh(
        data,
        MaterialKind::Physical,
        MaterialParams::new()
            .normal_scale(NORMAL_SCALE)
            .normal_map(normal_map),
        ctx,
    );

    let clouds_map = ctx.texture(keys::EARTH_CLOUDS);
    let clouds = shell(
        ctx,
        data,
        CLOUDS,
        CLOUD_MARGIN,
        MaterialParams::new()
            .color(Color::WHITE)
            .translucent(CLOUD_OPACITY)
            .map(clouds_map),
    );

    let moon_orbit = data.size + MOON_GAP;
    let track = Node::mesh(
        ctx.next_id(),
        Mesh::new(
            Geometry::ring(moon_orbit, moon_orbit + MOON_TRACK_WIDTH, MOON_TRACK_SEGMENTS),
            Material::lambert().with_params(MaterialParams::new().color(Color::WHITE).side(Side::Double)),
        ),
    )
    .with_name(MOON_TRACK)
    .with_rotation(flat());

    let moon_map = ctx.texture(keys::MOON);
    let moon = Node::mesh(
        ctx.next_id(),
        Mesh::new(
            Geometry::sphere(MOON_RADIUS, ctx.config.sphere_segments),
            Material::physical().with_params(
                MaterialParams::new().map(moon_map).normal_scale(NORMAL_SCALE),
            ),
        ),
    )
    .with_name(MOON)
    .with_position(Vec3::new(moon_orbit, 0.0, 0.0));

    Ok(add_group(ctx, data, vec![body, clouds, track, moon]))
}

/// Venus: Lambert body under a translucent atmosphere shell.
pub fn init_venus(data: &PlanetDescriptor, ctx: &mut SceneContext) -> Result<NodeId, SceneError> {
    data.validate()?;
    let body = planet_mesh(data, MaterialKind::Lambert, MaterialParams::new(), ctx);
    let atmosphere_map = ctx.texture(keys::VENUS_ATMOSPHERE);
    let atmosphere = shell(
        ctx,
        data,
        ATMOSPHERE,
        ATMOSPHERE_MARGIN,
        MaterialParams::new()
            .color(Color::WHITE)
            .translucent(ATMOSPHERE_OPACITY)
            .map(atmosphere_map),
    );
    Ok(add_group(ctx, data, vec![body, atmosphere]))
}

/// Saturn: Lambert body and three concentric ring bands, fading outward.
pub fn init_saturn(data: &PlanetDescriptor, ctx: &mut SceneContext) -> Result<NodeId, SceneError> {
    data.validate()?;
    let mut children = vec![planet_mesh(data, MaterialKind::Lambert, MaterialParams::new(), ctx)];
    for (inner, outer, opacity) in SATURN_RINGS {
        let material = Material::lambert().with_params(
            MaterialParams::new()
                .translucent(opacity)
                .color(Color::from_hex(SATURN_RING_COLOR))
                .side(Side::Double),
        );
        let geometry = Geometry::ring(data.size + inner, data.size + outer, SATURN_RING_SEGMENTS);
        let ring = Node::mesh(ctx.next_id(), Mesh::new(geometry, material))
            .with_name(RING)
            .with_rotation(flat());
        children.push(ring);
    }
    Ok(add_group(ctx, data, children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::setup::SceneConfig;
    use crate::components::node::NodeKind;

    fn ctx() -> SceneContext {
        let mut ctx = SceneContext::new();
        for key in ["sun", "earth", "venus", "saturn", keys::EARTH_NORMAL, keys::EARTH_CLOUDS, keys::MOON, keys::VENUS_ATMOSPHERE] {
            ctx.textures.insert(key, format!("img/{key}.jpg"));
        }
        ctx
    }

    fn sun() -> PlanetDescriptor {
        PlanetDescriptor::new("太阳", 100.0, [0.0, 0.0, 0.0], "sun")
    }

    fn earth() -> PlanetDescriptor {
        PlanetDescriptor::new("地球", 20.0, [500.0, 0.0, 0.0], "earth")
    }

    fn venus() -> PlanetDescriptor {
        PlanetDescriptor::new("金星", 15.0, [300.0, 0.0, 0.0], "venus")
    }

    fn saturn() -> PlanetDescriptor {
        PlanetDescriptor::new("土星", 40.0, [1200.0, 0.0, 50.0], "saturn")
    }

    fn group<'a>(ctx: &'a SceneContext, id: NodeId) -> (&'a Node, &'a PlanetNode) {
        let node = ctx.scene.get(id).expect("group in scene");
        (node, node.as_planet().expect("planet group"))
    }

    #[test]
    fn planet_mesh_does_not_touch_scene() {
        let mut ctx = ctx();
        let node = planet_mesh(&venus(), MaterialKind::Lambert, MaterialParams::new(), &mut ctx);
        assert!(ctx.scene.is_empty());
        let mesh = node.as_mesh().unwrap();
        assert_eq!(mesh.geometry, Geometry::sphere(15.0, 100));
        assert_eq!(mesh.material.map.as_ref().unwrap().key, "venus");
    }

    #[test]
    fn planet_mesh_merges_params_over_map() {
        let mut ctx = ctx();
        let node = planet_mesh(
            &sun(),
            MaterialKind::Basic,
            MaterialParams::new().translucent(0.7),
            &mut ctx,
        );
        let material = &node.as_mesh().unwrap().material;
        assert_eq!(material.kind, MaterialKind::Basic);
        assert!(material.transparent);
        assert_eq!(material.opacity, 0.7);
        assert!(material.map.is_some());
    }

    #[test]
    fn groups_are_named_and_tagged_after_descriptor() {
        let mut ctx = ctx();
        let cases: [(PlanetDescriptor, fn(&PlanetDescriptor, &mut SceneContext) -> Result<NodeId, SceneError>); 4] = [
            (sun(), init_sun),
            (earth(), init_earth),
            (venus(), init_venus),
            (saturn(), init_saturn),
        ];
        for (desc, init) in cases {
            let id = init(&desc, &mut ctx).unwrap();
            let (node, planet) = group(&ctx, id);
            assert_eq!(node.name, desc.name);
            assert_eq!(planet.planet_msg, desc);
            assert!(planet.is_planet());
            assert_eq!(planet.angle, 0.0);
            assert_eq!(node.transform.position, desc.position_vec());
        }
        assert_eq!(ctx.scene.len(), 4);
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn sun_is_opaque_basic_without_corona_by_default() {
        let mut ctx = ctx();
        let id = init_sun(&sun(), &mut ctx).unwrap();
        let (node, _) = group(&ctx, id);
        assert_eq!(node.children().len(), 1);
        let material = &node.children()[0].as_mesh().unwrap().material;
        assert_eq!(material.kind, MaterialKind::Basic);
        assert!(material.transparent);
        assert_eq!(material.opacity, 1.0);
    }

    #[test]
    fn sun_corona_when_configured() {
        let mut ctx = SceneContext::with_config(SceneConfig { sun_corona: true, ..SceneConfig::default() })
            .with_textures(self::ctx().textures);
        let id = init_sun(&sun(), &mut ctx).unwrap();
        let (_, planet) = group(&ctx, id);
        let corona = planet.find_child(CORONA).unwrap().as_mesh().unwrap();
        assert_eq!(corona.geometry, Geometry::sphere(108.0, 100));
        assert_eq!(corona.material.color.to_hex(), 0xFFC607);
        assert_eq!(corona.material.opacity, 0.2);
    }

    #[test]
    fn earth_has_body_clouds_track_and_moon() {
        let mut ctx = ctx();
        let id = init_earth(&earth(), &mut ctx).unwrap();
        let (node, planet) = group(&ctx, id);

        let names: Vec<_> = node.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![BODY, CLOUDS, MOON_TRACK, MOON]);

        let moon = planet.find_child(MOON).unwrap();
        assert_eq!(moon.transform.position, Vec3::new(60.0, 0.0, 0.0));
        assert_eq!(moon.as_mesh().unwrap().geometry, Geometry::sphere(10.0, 100));

        let body = &planet.find_child(BODY).unwrap().as_mesh().unwrap().material;
        assert_eq!(body.kind, MaterialKind::Physical);
        assert_eq!(body.normal_scale, Vec2::splat(10.0));
        assert_eq!(body.normal_map.as_ref().unwrap().key, keys::EARTH_NORMAL);

        let clouds = planet.find_child(CLOUDS).unwrap().as_mesh().unwrap();
        assert_eq!(clouds.geometry, Geometry::sphere(22.0, 100));
        assert_eq!(clouds.material.opacity, 0.1);

        let track = planet.find_child(MOON_TRACK).unwrap();
        assert_eq!(track.transform.rotation, flat());
        match &track.as_mesh().unwrap().geometry {
            Geometry::Ring { inner_radius, outer_radius, theta_segments } => {
                assert_eq!(*inner_radius, 60.0);
                assert!((outer_radius - 60.2).abs() < 1e-4);
                assert_eq!(*theta_segments, 100);
            }
            other => panic!("expected ring, got {other:?}"),
        }
    }

    #[test]
    fn venus_has_translucent_atmosphere() {
        let mut ctx = ctx();
        let id = init_venus(&venus(), &mut ctx).unwrap();
        let (node, planet) = group(&ctx, id);
        assert_eq!(node.children().len(), 2);
        let atmosphere = planet.find_child(ATMOSPHERE).unwrap().as_mesh().unwrap();
        assert_eq!(atmosphere.geometry, Geometry::sphere(17.0, 100));
        assert_eq!(atmosphere.material.opacity, 0.5);
        assert_eq!(atmosphere.material.map.as_ref().unwrap().key, keys::VENUS_ATMOSPHERE);
    }

    #[test]
    fn saturn_has_body_and_three_fading_rings() {
        let mut ctx = ctx();
        let id = init_saturn(&saturn(), &mut ctx).unwrap();
        let (node, _) = group(&ctx, id);
        assert_eq!(node.children().len(), 4);
        assert!(node.children().iter().all(|c| c.is_renderable()));

        let rings: Vec<_> = node.children().iter().filter(|c| c.name == RING).collect();
        assert_eq!(rings.len(), 3);
        let opacities: Vec<f32> = rings.iter().map(|r| r.as_mesh().unwrap().material.opacity).collect();
        assert_eq!(opacities, vec![0.8, 0.5, 0.3]);
        assert_eq!(rings[0].as_mesh().unwrap().geometry, Geometry::ring(50.0, 65.0, 100));
        assert!(rings.iter().all(|r| r.transform.rotation == flat()));
        assert!(rings
            .iter()
            .all(|r| r.as_mesh().unwrap().material.color.to_hex() == 0xc0ad87));
    }

    #[test]
    fn same_name_twice_gives_two_groups() {
        let mut ctx = ctx();
        let a = init_venus(&venus(), &mut ctx).unwrap();
        let b = init_venus(&venus(), &mut ctx).unwrap();
        assert_ne!(a, b);
        assert_eq!(ctx.scene.find_all_by_name("金星").len(), 2);
    }

    #[test]
    fn invalid_descriptor_leaves_scene_alone() {
        let mut ctx = ctx();
        let mut bad = earth();
        bad.size = -1.0;
        let err = init_earth(&bad, &mut ctx).unwrap_err();
        assert!(matches!(err, SceneError::InvalidDescriptor { .. }));
        assert!(ctx.scene.is_empty());

        // The next planet still builds.
        assert!(init_venus(&venus(), &mut ctx).is_ok());
    }

    #[test]
    fn missing_textures_are_warnings_not_failures() {
        let mut ctx = SceneContext::new();
        let id = init_earth(&earth(), &mut ctx).unwrap();
        let (node, _) = group(&ctx, id);
        assert_eq!(node.children().len(), 4);
        // earth_normal, earth map, clouds, moon
        assert_eq!(ctx.warnings().len(), 4);
        assert!(ctx.warnings().iter().all(|w| w.is_recoverable()));
    }

    #[test]
    fn children_are_meshes() {
        let mut ctx = ctx();
        let id = init_earth(&earth(), &mut ctx).unwrap();
        let (node, _) = group(&ctx, id);
        assert!(node.children().iter().all(|c| matches!(c.kind, NodeKind::Mesh(_))));
    }
}
