//! Simulation configuration
//!
//! Constants the physics core depends on, supplied at construction.
//! Loadable from JSON; missing fields fall back to defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and plane constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Gravitational constant `G`
    pub gravitational_constant: f32,
    /// Density `ρ` used for the mass/radius relation
    pub density: f32,
    /// Epsilon guard on squared separation
    pub min_distance_squared: f32,
    /// Plane width `W`
    pub width: f32,
    /// Plane height `H`
    pub height: f32,
    /// Field grid pitch
    pub cell_size: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            density: DENSITY,
            min_distance_squared: MIN_DISTANCE_SQUARED,
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,
            cell_size: FIELD_CELL_SIZE,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a config file, falling back to defaults if it is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not read config {}: {err}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Malformed config {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Plane extents as a vector `(W, H)`
    #[inline]
    pub fn plane_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
