use serde::{Deserialize, Serialize};

use crate::biome::{classify, Biome};
use crate::config::TerrainConfig;
use crate::coords::WorldCell;
use crate::noise_field::NoiseField;

/// Terrain values at one world cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainSample {
    pub temperature: f32,
    pub biome: Biome,
}

/// Maps world cells to temperature and biome.
///
/// Chunk generation and point queries both go through here, so a chunk
/// regenerated after a cache clear matches what was sampled before.
pub struct TerrainSampler {
    noise: NoiseField,
    noise_scale: f64,
    base_temperature: f32,
    amplitude: f32,
}

impl TerrainSampler {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            noise: NoiseField::new(config.seed, config.octaves),
            noise_scale: config.noise_scale,
            base_temperature: config.base_temperature,
            amplitude: config.temperature_amplitude,
        }
    }

    /// `base + noise(x / scale, y / scale) * amplitude`.
    pub fn temperature_at(&self, cell: WorldCell) -> f32 {
        let n = self.noise.sample(
            cell.x as f64 / self.noise_scale,
            cell.y as f64 / self.noise_scale,
        );
        self.base_temperature + n * self.amplitude
    }

    pub fn sample(&self, cell: WorldCell) -> TerrainSample {
        let temperature = self.temperature_at(cell);
        TerrainSample {
            temperature,
            biome: classify(temperature, self.base_temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_within_amplitude() {
        let config = TerrainConfig::default();
        let sampler = TerrainSampler::new(&config);
        for i in -50..50 {
            let t = sampler.temperature_at(WorldCell::new(i * 37, i * -23));
            let lo = config.base_temperature - config.temperature_amplitude;
            let hi = config.base_temperature + config.temperature_amplitude;
            assert!((lo..=hi).contains(&t), "temperature {t} outside [{lo}, {hi}]");
        }
    }

    #[test]
    fn test_sample_biome_matches_classifier() {
        let config = TerrainConfig::default();
        let sampler = TerrainSampler::new(&config);
        let cell = WorldCell::new(-321, 77);
        let sample = sampler.sample(cell);
        assert_eq!(sample.temperature, sampler.temperature_at(cell));
        assert_eq!(
            sample.biome,
            classify(sample.temperature, config.base_temperature)
        );
    }

    #[test]
    fn test_zero_amplitude_is_flat() {
        let config = TerrainConfig {
            temperature_amplitude: 0.0,
            ..Default::default()
        };
        let sampler = TerrainSampler::new(&config);
        for i in 0..20 {
            let sample = sampler.sample(WorldCell::new(i * 13, -i * 7));
            assert_eq!(sample.temperature, config.base_temperature);
            assert_eq!(sample.biome, Biome::DeepFrozenOcean);
        }
    }
}
