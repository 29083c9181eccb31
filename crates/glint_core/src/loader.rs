//! JSON scene file loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors from loading or validating a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene file")]
    Parse(#[from] serde_json::Error),

    #[error("primitive {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("primitive {index}: plane normal must have nonzero length")]
    DegenerateNormal { index: usize },

    #[error("primitive {index}: {attribute} must be non-negative, got {value}")]
    NegativeAttribute {
        index: usize,
        attribute: &'static str,
        value: f32,
    },
}

impl SceneDescription {
    /// Parse a scene description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load and parse a scene file.
    pub fn from_path(path: &Path) -> Result<Self, SceneError> {
        let json = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json(&json)?;
        log::debug!(
            "loaded {:?}: {} primitives, light at {}",
            path,
            scene.primitives.len(),
            scene.light
        );
        Ok(scene)
    }
}
