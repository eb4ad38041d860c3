use crate::biome::Biome;
use crate::color::Rgb;
use crate::config::TerrainConfig;
use crate::coords::{ChunkCoord, WorldCell};
use crate::sampler::TerrainSampler;

/// One renderable terrain cell. Immutable after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub world: WorldCell,
    /// Top-left corner in world pixels.
    pub pixel_x: i64,
    pub pixel_y: i64,
    pub width: u32,
    pub height: u32,
    pub temperature: f32,
    pub biome: Biome,
}

impl Cell {
    /// Display color, derived from the biome rather than stored.
    pub fn color(&self) -> Rgb {
        self.biome.color()
    }
}

/// `chunk_size * chunk_size` cells, row-major by local offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub coord: ChunkCoord,
    size: u32,
    cells: Vec<Cell>,
}

impl Chunk {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at local offset `(lx, ly)`, `None` outside the chunk.
    pub fn cell(&self, lx: u32, ly: u32) -> Option<&Cell> {
        if lx >= self.size || ly >= self.size {
            return None;
        }
        self.cells.get(ly as usize * self.size as usize + lx as usize)
    }
}

/// Builds chunks from a [`TerrainSampler`] and the cell geometry.
pub struct ChunkGenerator {
    sampler: TerrainSampler,
    chunk_size: u32,
    cell_width: u32,
    cell_height: u32,
}

impl ChunkGenerator {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            sampler: TerrainSampler::new(config),
            chunk_size: config.chunk_size,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
        }
    }

    pub fn sampler(&self) -> &TerrainSampler {
        &self.sampler
    }

    /// Generate the chunk at `coord`. Pure: the same coordinate and
    /// configuration always yield identical cells.
    pub fn generate(&self, coord: ChunkCoord) -> Chunk {
        let size = self.chunk_size;
        let mut cells = Vec::with_capacity(size as usize * size as usize);
        for ly in 0..size {
            for lx in 0..size {
                let world = coord.cell_at(size, lx, ly);
                let (pixel_x, pixel_y) = world.pixel_origin(self.cell_width, self.cell_height);
                let sample = self.sampler.sample(world);
                cells.push(Cell {
                    world,
                    pixel_x,
                    pixel_y,
                    width: self.cell_width,
                    height: self.cell_height,
                    temperature: sample.temperature,
                    biome: sample.biome,
                });
            }
        }
        Chunk { coord, size, cells }
    }
}
