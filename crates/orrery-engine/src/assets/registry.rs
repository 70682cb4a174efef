use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::assets::manifest::AssetManifest;

/// Well-known texture keys used by the scene factories.
pub mod keys {
    pub const UNIVERSE: &str = "universe";
    pub const STAR: &str = "star";
    pub const VENUS_ATMOSPHERE: &str = "venus_atmosphere";
    pub const MOON: &str = "moon";
    pub const EARTH_NORMAL: &str = "earth_normal";
    pub const EARTH_CLOUDS: &str = "earth_clouds";
}

/// Reference to a texture image. Decoding and upload are up to the host
/// renderer; until it finishes, the surface renders without the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle {
    pub key: String,
    pub path: String,
}

impl TextureHandle {
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// Registry of named textures, built from an AssetManifest.
/// Provides key-based texture lookup for the scene factories.
#[derive(Debug, Clone)]
pub struct TextureRegistry {
    textures: HashMap<String, TextureHandle>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut textures = HashMap::with_capacity(manifest.textures.len());
        for (key, desc) in &manifest.textures {
            textures.insert(key.clone(), TextureHandle::new(key.clone(), desc.path.clone()));
        }
        Self { textures }
    }

    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) {
        let key = key.into();
        self.textures.insert(key.clone(), TextureHandle::new(key, path));
    }

    /// Look up a texture by key. Returns None if not registered.
    pub fn get(&self, key: &str) -> Option<&TextureHandle> {
        self.textures.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
