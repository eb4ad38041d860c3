use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

const LACUNARITY: f32 = 2.0;

/// Deterministic fBm Perlin field.
///
/// Callers pre-divide coordinates by their spatial scale, so the underlying
/// generator runs at frequency 1. Output is clamped to [-1, 1].
pub struct NoiseField {
    noise: FastNoiseLite,
    /// Largest |coordinate| whose highest octave still floors into an `i32`.
    domain_limit: f64,
}

impl NoiseField {
    /// `seed + octaves` must not overflow `i32`; `TerrainConfig::validate`
    /// guarantees that for configured fields.
    pub fn new(seed: i32, octaves: u32) -> Self {
        let octaves = octaves.clamp(1, 30);
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(1.0));
        noise.set_fractal_type(Some(FractalType::FBm));
        noise.set_fractal_octaves(Some(octaves as i32));
        noise.set_fractal_gain(Some(0.5));
        noise.set_fractal_lacunarity(Some(LACUNARITY));
        Self {
            noise,
            domain_limit: f64::from(1u32 << (31 - octaves)),
        }
    }

    /// Sample the field. Same input and configuration always give the same value.
    ///
    /// Coordinates beyond the hashable domain are clamped to its edge.
    pub fn sample(&self, x: f64, y: f64) -> f32 {
        let x = clamp_coord(x, self.domain_limit);
        let y = clamp_coord(y, self.domain_limit);
        self.noise.get_noise_2d(x as f32, y as f32).clamp(-1.0, 1.0)
    }
}

fn clamp_coord(v: f64, limit: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-limit, limit)
    }
}
