use bevy::prelude::*;

use crate::chunk::{Chunk, ChunkGenerator};
use crate::chunk_cache::{CacheStats, ChunkCache};
use crate::config::TerrainConfig;
use crate::config_error::ConfigError;
use crate::coords::{ChunkCoord, WorldCell};
use crate::sampler::TerrainSample;
use crate::viewport::{project, ChunkWindow, DrawCall, Viewport};

/// The streamed ground: configuration, generator and the chunk cache.
///
/// Chunks are generated synchronously the first time they are requested and
/// kept for the rest of the session.
#[derive(Resource)]
pub struct Terrain {
    config: TerrainConfig,
    generator: ChunkGenerator,
    cache: ChunkCache,
}

impl Terrain {
    pub fn new(config: TerrainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            generator: ChunkGenerator::new(&config),
            cache: ChunkCache::default(),
            config,
        })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Chunk at `coord`, generated on first access.
    pub fn chunk(&mut self, coord: ChunkCoord) -> &Chunk {
        let generator = &self.generator;
        self.cache.get_or_generate(coord, |c| {
            debug!("Generating chunk ({}, {})", c.x, c.y);
            generator.generate(c)
        })
    }

    pub fn cached_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.cache.get(coord)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached chunk. Regenerated chunks are identical.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Temperature and biome at a world cell, without touching the cache.
    pub fn sample(&self, cell: WorldCell) -> TerrainSample {
        self.generator.sampler().sample(cell)
    }

    /// Temperature and biome under the world-pixel position `(px, py)`.
    pub fn sample_at_pixel(&self, px: f64, py: f64) -> TerrainSample {
        self.sample(self.cell_at_pixel(px, py))
    }

    pub fn cell_at_pixel(&self, px: f64, py: f64) -> WorldCell {
        WorldCell::from_pixel(px, py, self.config.cell_width, self.config.cell_height)
    }

    pub fn chunk_at_pixel(&self, px: f64, py: f64) -> ChunkCoord {
        self.cell_at_pixel(px, py).chunk(self.config.chunk_size)
    }

    /// Chunks a camera at `(camera_x, camera_y)` needs for `viewport`.
    pub fn visible_window(&self, camera_x: f64, camera_y: f64, viewport: Viewport) -> ChunkWindow {
        ChunkWindow::around(
            camera_x,
            camera_y,
            viewport,
            self.config.chunk_pixel_width(),
            self.config.chunk_pixel_height(),
        )
    }

    /// Fetch or generate the chunks around the camera, then write one draw
    /// call per cell that intersects the viewport into `out`.
    ///
    /// `out` is cleared first so callers can reuse its allocation.
    pub fn render_into(
        &mut self,
        camera_x: f64,
        camera_y: f64,
        viewport: Viewport,
        out: &mut Vec<DrawCall>,
    ) {
        out.clear();
        let window = self.visible_window(camera_x, camera_y, viewport);

        for coord in window.coords() {
            self.chunk(coord);
        }

        for coord in window.coords() {
            let Some(chunk) = self.cache.get(coord) else {
                continue;
            };
            for cell in chunk.cells() {
                let rect = project(cell, camera_x, camera_y, viewport);
                if rect.intersects(viewport) {
                    out.push(DrawCall {
                        rect,
                        color: cell.color(),
                        biome: cell.biome,
                    });
                }
            }
        }
    }

    pub fn render(&mut self, camera_x: f64, camera_y: f64, viewport: Viewport) -> Vec<DrawCall> {
        let mut out = Vec::new();
        self.render_into(camera_x, camera_y, viewport, &mut out);
        out
    }
}
