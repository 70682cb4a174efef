//! Error type shared by the scene factories, the asset registry and config loading.

use thiserror::Error;

/// Everything that can go wrong while building a scene.
///
/// None of these abort a whole scene: factories return them per planet,
/// and texture misses are downgraded to warnings on the [`SceneContext`].
///
/// [`SceneContext`]: crate::api::setup::SceneContext
#[derive(Debug, Error)]
pub enum SceneError {
    /// A planet descriptor failed validation.
    #[error("invalid descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    /// A texture key is not present in the registry.
    #[error("texture not found: {0}")]
    TextureNotFound(String),

    /// Asset manifest JSON could not be parsed.
    #[error("manifest parse error: {0}")]
    Manifest(#[source] serde_json::Error),

    /// Scene config JSON could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[source] serde_json::Error),

    /// Snapshot serialization failed.
    #[error("snapshot serialization error: {0}")]
    Snapshot(#[source] serde_json::Error),
}

impl SceneError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether scene construction can carry on past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::TextureNotFound(_))
    }
}
