use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::player::WalkerTuning;

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct SimConfig {
    pub walker: WalkerTuning,
    pub scene: SceneConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SceneConfig {
    /// Checkerboard base-tile radius around the origin.
    pub floor_radius: i32,
    /// Spawn position of the body center, world units.
    pub spawn: [f32; 3],
    /// Hotbar index selected at boot.
    pub default_color: usize,
    pub default_shape: String,
    /// Seed the prefab street and towers.
    pub seed_prefab: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            floor_radius: 12,
            spawn: [0.5, 0.85, 6.5],
            default_color: 3,
            default_shape: "2x2".to_string(),
            seed_prefab: true,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
