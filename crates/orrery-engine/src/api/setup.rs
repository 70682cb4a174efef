use serde::{Deserialize, Serialize};

use crate::api::types::NodeId;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::{TextureHandle, TextureRegistry};
use crate::components::planet::PlanetDescriptor;
use crate::core::scene::Scene;
use crate::error::SceneError;
use crate::systems::rng::Rng;

/// Tunables for the scene factories. Every field has a default, so a
/// partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Radius of the inside-out backdrop sphere.
    pub universe_radius: f32,
    /// Width and height segments of every sphere.
    pub sphere_segments: u32,
    /// Number of background stars.
    pub star_count: usize,
    /// Scale applied to the unit star cube (half side length).
    pub star_spread: f32,
    /// Point sprite size of a star.
    pub star_size: f32,
    /// Seed for the star scatter. Same seed, same sky.
    pub star_seed: u64,
    /// Name of the central body. It gets no orbit ring.
    pub sun_name: String,
    /// Intensity of the point light at the origin.
    pub sun_light_intensity: f32,
    /// Also add a white ambient light next to the sun's point light.
    pub ambient_light: bool,
    /// Wrap the sun in a translucent corona shell.
    pub sun_corona: bool,
    /// Radial width of a planet's orbit ring.
    pub orbit_ring_width: f32,
    /// Theta segments of a planet's orbit ring.
    pub orbit_ring_segments: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            universe_radius: 7000.0,
            sphere_segments: 100,
            star_count: 8000,
            star_spread: 7000.0,
            star_size: 6.0,
            star_seed: 42,
            sun_name: "太阳".to_string(),
            sun_light_intensity: 1.2,
            ambient_light: false,
            sun_corona: false,
            orbit_ring_width: 2.0,
            orbit_ring_segments: 1000,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(SceneError::Config)
    }
}

/// The contract a scene description fulfills: say how it is configured,
/// then populate the context once.
pub trait SceneSetup {
    /// Return scene configuration. Called once before init.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Build the scene: backdrop, lights, planets.
    fn init(&mut self, ctx: &mut SceneContext);
}

/// Mutable scene handle passed to every factory.
///
/// Owns the scene, the texture registry and the id counter. Recoverable
/// failures (missing textures, skipped planets) are logged and collected
/// here instead of aborting construction.
pub struct SceneContext {
    pub scene: Scene,
    pub textures: TextureRegistry,
    pub config: SceneConfig,
    /// Planet descriptors supplied by the asset manifest, if any.
    pub planets: Vec<PlanetDescriptor>,
    pub rng: Rng,
    warnings: Vec<SceneError>,
    next_id: u32,
}

impl SceneContext {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            scene: Scene::new(),
            textures: TextureRegistry::new(),
            rng: Rng::new(config.star_seed),
            config,
            planets: Vec::new(),
            warnings: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_textures(mut self, textures: TextureRegistry) -> Self {
        self.textures = textures;
        self
    }

    /// Install textures and planet list from a manifest.
    pub fn load_manifest(&mut self, manifest: &AssetManifest) {
        self.textures = TextureRegistry::from_manifest(manifest);
        self.planets = manifest.planets.clone();
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Resolve a texture key. A miss is recorded as a warning and
    /// the caller carries on without the map.
    pub fn texture(&mut self, key: &str) -> Option<TextureHandle> {
        match self.textures.get(key) {
            Some(handle) => Some(handle.clone()),
            None => {
                self.warn(SceneError::TextureNotFound(key.to_string()));
                None
            }
        }
    }

    /// Log and keep a recoverable error.
    pub fn warn(&mut self, err: SceneError) {
        log::warn!("{err}");
        self.warnings.push(err);
    }

    pub fn warnings(&self) -> &[SceneError] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<SceneError> {
        std::mem::take(&mut self.warnings)
    }

    /// Drop everything built so far so setup can run again.
    /// Textures, config and manifest planets are kept.
    pub fn reset(&mut self) {
        self.scene.clear();
        self.warnings.clear();
        self.next_id = 1;
        self.rng = Rng::new(self.config.star_seed);
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}
