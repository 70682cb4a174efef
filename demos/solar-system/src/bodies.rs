/// Default bodies and texture locations for the demo scene.
///
/// Sizes and distances are picked for readability, not to scale.

use orrery_engine::{keys, AssetManifest, PlanetDescriptor};

/// Body names, as the host UI labels them.
pub const SUN: &str = "太阳";
pub const VENUS: &str = "金星";
pub const EARTH: &str = "地球";
pub const SATURN: &str = "土星";

/// Which composite factory builds a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Venus,
    Earth,
    Saturn,
}

impl BodyKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            SUN => Some(Self::Sun),
            VENUS => Some(Self::Venus),
            EARTH => Some(Self::Earth),
            SATURN => Some(Self::Saturn),
            _ => None,
        }
    }
}

/// Descriptors used when the manifest does not list planets.
pub fn default_planets() -> Vec<PlanetDescriptor> {
    vec![
        PlanetDescriptor::new(SUN, 100.0, [0.0, 0.0, 0.0], "sun"),
        PlanetDescriptor::new(VENUS, 15.0, [300.0, 0.0, 0.0], "venus"),
        PlanetDescriptor::new(EARTH, 20.0, [500.0, 0.0, 0.0], "earth"),
        PlanetDescriptor::new(SATURN, 40.0, [1200.0, 0.0, 0.0], "saturn"),
    ]
}

/// Texture paths relative to the page, matching the bundled images.
pub fn default_manifest() -> AssetManifest {
    AssetManifest::default()
        .with_texture(keys::UNIVERSE, "assets/img/universe.jpg")
        .with_texture(keys::STAR, "assets/img/star.jpg")
        .with_texture(keys::VENUS_ATMOSPHERE, "assets/img/venusAtmosphere.jpg")
        .with_texture(keys::MOON, "assets/img/moon.jpg")
        .with_texture(keys::EARTH_NORMAL, "assets/img/earthNormal.jpg")
        .with_texture(keys::EARTH_CLOUDS, "assets/img/earthClouds.jpg")
        .with_texture("sun", "assets/img/sun.jpg")
        .with_texture("venus", "assets/img/venus.jpg")
        .with_texture("earth", "assets/img/earth.jpg")
        .with_texture("saturn", "assets/img/saturn.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_planet_has_a_factory() {
        for planet in default_planets() {
            assert!(BodyKind::from_name(&planet.name).is_some(), "{}", planet.name);
            assert!(planet.validate().is_ok());
        }
        assert_eq!(BodyKind::from_name("火星"), None);
    }

    #[test]
    fn default_manifest_covers_default_planets() {
        let manifest = default_manifest();
        for planet in default_planets() {
            assert!(manifest.textures.contains_key(&planet.map_img), "{}", planet.map_img);
        }
    }
}
