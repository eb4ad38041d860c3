use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config_error::ConfigError;

pub const CELL_SIZE: u32 = 10;
pub const CHUNK_SIZE: u32 = 16;
pub const NOISE_SEED: i32 = 42;
pub const NOISE_OCTAVES: u32 = 4;
pub const MAX_NOISE_OCTAVES: u32 = 16;
/// Spatial divisor applied to world cell coordinates before sampling noise.
pub const NOISE_SCALE: f64 = 200.0;

/// Average Antarctic temperature pushed 100x colder.
pub const BASE_TEMPERATURE: f32 = -60.0 * 100.0;
pub const TEMPERATURE_AMPLITUDE: f32 = 40.0;

/// Camera positions are clamped to +/- this many world pixels so chunk math on
/// `i64` and the `f64` projection stay exact.
pub const WORLD_PIXEL_LIMIT: f64 = (1u64 << 50) as f64;

/// Environment variable naming a JSON file with a [`TerrainConfig`].
pub const CONFIG_ENV_VAR: &str = "SNOWDAY_CONFIG";

/// Terrain generation parameters.
///
/// Every field is optional in the JSON form; missing fields take the defaults
/// from the constants above.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub cell_width: u32,
    pub cell_height: u32,
    /// Chunk edge length in cells.
    pub chunk_size: u32,
    pub seed: i32,
    pub octaves: u32,
    pub noise_scale: f64,
    pub base_temperature: f32,
    pub temperature_amplitude: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            cell_width: CELL_SIZE,
            cell_height: CELL_SIZE,
            chunk_size: CHUNK_SIZE,
            seed: NOISE_SEED,
            octaves: NOISE_OCTAVES,
            noise_scale: NOISE_SCALE,
            base_temperature: BASE_TEMPERATURE,
            temperature_amplitude: TEMPERATURE_AMPLITUDE,
        }
    }
}

impl TerrainConfig {
    /// Reject configurations the terrain cannot be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::InvalidCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if !(1..=MAX_NOISE_OCTAVES).contains(&self.octaves) {
            return Err(ConfigError::InvalidOctaves(self.octaves));
        }
        // Each octave samples with `seed + octave_index`.
        if self.seed > i32::MAX - MAX_NOISE_OCTAVES as i32 {
            return Err(ConfigError::InvalidSeed(self.seed));
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ConfigError::InvalidNoiseScale(self.noise_scale));
        }
        if !self.base_temperature.is_finite() || !self.temperature_amplitude.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                base: self.base_temperature,
                amplitude: self.temperature_amplitude,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TerrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by `SNOWDAY_CONFIG`, or fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Width of one chunk in world pixels.
    pub fn chunk_pixel_width(&self) -> f64 {
        f64::from(self.chunk_size) * f64::from(self.cell_width)
    }

    /// Height of one chunk in world pixels.
    pub fn chunk_pixel_height(&self) -> f64 {
        f64::from(self.chunk_size) * f64::from(self.cell_height)
    }
}
