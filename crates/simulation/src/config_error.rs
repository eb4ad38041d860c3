// ---------------------------------------------------------------------------
// ConfigError: startup failures for terrain configuration
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that make a [`crate::config::TerrainConfig`] unusable.
///
/// None of these has a degraded mode: the binary reports the error and exits.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io { path: String, source: std::io::Error },
    /// The configuration file is not valid JSON for `TerrainConfig`.
    Parse(String),
    /// Cell width or height is zero.
    InvalidCellSize { width: u32, height: u32 },
    /// Chunk size is zero.
    InvalidChunkSize(u32),
    /// Octave count outside `1..=MAX_NOISE_OCTAVES`.
    InvalidOctaves(u32),
    /// Seed too close to `i32::MAX` to offset per octave.
    InvalidSeed(i32),
    /// Noise scale is zero, negative or not finite.
    InvalidNoiseScale(f64),
    /// Base temperature or amplitude is NaN or infinite.
    NonFiniteTemperature { base: f32, amplitude: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read config '{path}': {source}")
            }
            ConfigError::Parse(msg) => write!(f, "Malformed config: {msg}"),
            ConfigError::InvalidCellSize { width, height } => write!(
                f,
                "Cell size must be positive, got {width}x{height}"
            ),
            ConfigError::InvalidChunkSize(size) => {
                write!(f, "Chunk size must be positive, got {size}")
            }
            ConfigError::InvalidOctaves(octaves) => write!(
                f,
                "Octave count must be in 1..={}, got {octaves}",
                crate::config::MAX_NOISE_OCTAVES
            ),
            ConfigError::InvalidSeed(seed) => write!(
                f,
                "Seed must be at most {}, got {seed}",
                i32::MAX - crate::config::MAX_NOISE_OCTAVES as i32
            ),
            ConfigError::InvalidNoiseScale(scale) => {
                write!(f, "Noise scale must be finite and positive, got {scale}")
            }
            ConfigError::NonFiniteTemperature { base, amplitude } => write!(
                f,
                "Temperature parameters must be finite, got base {base} amplitude {amplitude}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
