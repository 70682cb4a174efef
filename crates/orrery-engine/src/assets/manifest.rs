use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::components::planet::PlanetDescriptor;
use crate::error::SceneError;

/// Asset manifest describing the textures a scene may reference,
/// and optionally the planets to build. Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Texture lookup: key → image location.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
    /// Planet descriptors. Empty means "use the caller's defaults".
    #[serde(default)]
    pub planets: Vec<PlanetDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Path or URL of the image, resolved by the host renderer.
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(SceneError::Manifest)
    }

    /// Register a texture, replacing any previous entry under the same key.
    pub fn with_texture(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.textures.insert(key.into(), TextureDescriptor { path: path.into() });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_planets() {
        let json = r#"{
            "textures": {
                "universe": { "path": "img/universe.jpg" },
                "earth": { "path": "img/earth.jpg" }
            },
            "planets": [
                { "name": "地球", "size": 20, "position": [500, 0, 0], "mapImg": "earth" }
            ]
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures["universe"].path, "img/universe.jpg");
        assert_eq!(manifest.planets.len(), 1);
        assert_eq!(manifest.planets[0].map_img, "earth");
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
        assert!(manifest.planets.is_empty());
    }

    #[test]
    fn malformed_json_is_a_manifest_error() {
        let err = AssetManifest::from_json("{ textures: ").unwrap_err();
        assert!(matches!(err, SceneError::Manifest(_)));
    }
}
