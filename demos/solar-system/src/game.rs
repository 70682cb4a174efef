/// Solar System: decorative backdrop, sun, Venus, Earth and Saturn.
///
/// Builds the scene once; the host renderer spins the planets by
/// writing each group's angle through `scene_set_angle`.

use orrery_engine::*;

use crate::bodies::{self, BodyKind};

pub struct SolarSystem {
    config: SceneConfig,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            config: SceneConfig::default(),
        }
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self { config }
    }

    fn build_body(kind: BodyKind, data: &PlanetDescriptor, ctx: &mut SceneContext) -> Result<NodeId, SceneError> {
        match kind {
            BodyKind::Sun => init_sun(data, ctx),
            BodyKind::Venus => init_venus(data, ctx),
            BodyKind::Earth => init_earth(data, ctx),
            BodyKind::Saturn => init_saturn(data, ctx),
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneSetup for SolarSystem {
    fn config(&self) -> SceneConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        if ctx.textures.is_empty() {
            ctx.textures = TextureRegistry::from_manifest(&bodies::default_manifest());
        }
        let planets = if ctx.planets.is_empty() {
            bodies::default_planets()
        } else {
            ctx.planets.clone()
        };

        init_universe(ctx);
        init_background_stars(ctx);

        for data in &planets {
            let Some(kind) = BodyKind::from_name(&data.name) else {
                log::warn!("no factory for body '{}', skipped", data.name);
                continue;
            };
            // A broken descriptor only costs its own planet.
            if let Err(e) = data.validate() {
                ctx.warn(e);
                continue;
            }
            if let Err(e) = init_revolution_trajectory(data, ctx) {
                ctx.warn(e);
                continue;
            }
            if let Err(e) = Self::build_body(kind, data, ctx) {
                ctx.warn(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(setup: &mut SolarSystem) -> SceneContext {
        let mut ctx = SceneContext::with_config(setup.config());
        setup.init(&mut ctx);
        ctx
    }

    #[test]
    fn default_scene_layout() {
        let ctx = built(&mut SolarSystem::new());
        // universe + sun light + stars + 3 orbit rings + 4 planet groups
        assert_eq!(ctx.scene.len(), 10);
        assert_eq!(ctx.scene.planets().count(), 4);
        assert!(ctx.warnings().is_empty(), "{:?}", ctx.warnings());
    }

    #[test]
    fn only_non_sun_bodies_get_orbit_rings() {
        let ctx = built(&mut SolarSystem::new());
        for name in [bodies::VENUS, bodies::EARTH, bodies::SATURN] {
            assert!(ctx.scene.find_by_name(&format!("{name}:track")).is_some(), "{name}");
        }
        assert!(ctx.scene.find_by_name(&format!("{}:track", bodies::SUN)).is_none());
    }

    #[test]
    fn manifest_planets_replace_defaults() {
        let mut ctx = SceneContext::new();
        ctx.planets = vec![PlanetDescriptor::new(bodies::EARTH, 20.0, [400.0, 0.0, 0.0], "earth")];
        SolarSystem::new().init(&mut ctx);
        assert_eq!(ctx.scene.planets().count(), 1);
        let earth = ctx.scene.find_by_name(bodies::EARTH).unwrap();
        assert_eq!(earth.transform.position.x, 400.0);
    }

    #[test]
    fn bad_planet_is_skipped_others_built() {
        let mut ctx = SceneContext::new();
        ctx.planets = bodies::default_planets();
        ctx.planets[1].size = 0.0;
        SolarSystem::new().init(&mut ctx);
        assert_eq!(ctx.scene.planets().count(), 3);
        assert!(ctx.scene.find_by_name(bodies::VENUS).is_none());
        assert!(ctx.scene.find_by_name(&format!("{}:track", bodies::VENUS)).is_none());
        assert_eq!(ctx.warnings().len(), 1);
    }

    #[test]
    fn unknown_bodies_are_ignored() {
        let mut ctx = SceneContext::new();
        ctx.planets = vec![PlanetDescriptor::new("火星", 12.0, [700.0, 0.0, 0.0], "mars")];
        SolarSystem::new().init(&mut ctx);
        assert_eq!(ctx.scene.planets().count(), 0);
        assert!(ctx.scene.find_by_name("火星:track").is_none());
    }

    #[test]
    fn corona_config_reaches_sun() {
        let config = SceneConfig { sun_corona: true, ..SceneConfig::default() };
        let ctx = built(&mut SolarSystem::with_config(config));
        let sun = ctx.scene.find_by_name(bodies::SUN).unwrap();
        assert_eq!(sun.children().len(), 2);
    }
}
