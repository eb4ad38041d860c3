use bevy::prelude::*;

pub mod biome;
pub mod chunk;
pub mod chunk_cache;
pub mod color;
pub mod config;
pub mod config_error;
pub mod coords;
pub mod noise_field;
pub mod sampler;
pub mod terrain;
pub mod time_of_day;
pub mod viewport;
pub mod weather;

use config::TerrainConfig;
use terrain::Terrain;

/// Terrain streaming plus the day/night clock and weather.
///
/// A [`TerrainConfig`] inserted before this plugin is added takes precedence
/// over the defaults. Callers are expected to validate it first; an invalid
/// configuration reaching this point is a programming error.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainConfig>();
        let config = app.world().resource::<TerrainConfig>().clone();
        let seed = config.seed;

        let terrain = match Terrain::new(config) {
            Ok(terrain) => terrain,
            Err(e) => panic!("SimulationPlugin: invalid terrain configuration: {e}"),
        };
        info!(
            "Terrain ready: seed {}, {} octaves, chunk {}x{} cells of {}x{} px",
            seed,
            terrain.config().octaves,
            terrain.config().chunk_size,
            terrain.config().chunk_size,
            terrain.config().cell_width,
            terrain.config().cell_height,
        );
        app.insert_resource(terrain);

        app.add_plugins((
            time_of_day::TimeOfDayPlugin,
            weather::WeatherPlugin {
                seed: u64::from(seed as u32),
            },
        ));
    }
}
