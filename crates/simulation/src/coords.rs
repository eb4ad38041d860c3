//! World cell and chunk coordinates.
//!
//! Both lattices are unbounded in all four directions, so every conversion
//! uses floor semantics (`div_euclid` / `floor`). Truncating division would
//! put world cell `-1` into chunk `0` instead of chunk `-1`.

use serde::{Deserialize, Serialize};

/// Integer address of a terrain cell in the infinite world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldCell {
    pub x: i64,
    pub y: i64,
}

impl WorldCell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell containing the world-pixel position `(px, py)`.
    ///
    /// Float to integer conversion saturates, so non-finite input lands on
    /// the lattice edge (or zero for NaN) instead of panicking.
    pub fn from_pixel(px: f64, py: f64, cell_width: u32, cell_height: u32) -> Self {
        Self {
            x: (px / f64::from(cell_width)).floor() as i64,
            y: (py / f64::from(cell_height)).floor() as i64,
        }
    }

    /// Chunk this cell belongs to.
    pub fn chunk(self, chunk_size: u32) -> ChunkCoord {
        let size = i64::from(chunk_size);
        ChunkCoord {
            x: self.x.div_euclid(size),
            y: self.y.div_euclid(size),
        }
    }

    /// Offset of this cell inside its chunk, each component in `0..chunk_size`.
    pub fn local(self, chunk_size: u32) -> (u32, u32) {
        let size = i64::from(chunk_size);
        (
            self.x.rem_euclid(size) as u32,
            self.y.rem_euclid(size) as u32,
        )
    }

    /// Top-left corner of the cell in world pixels.
    pub fn pixel_origin(self, cell_width: u32, cell_height: u32) -> (i64, i64) {
        (
            self.x.saturating_mul(i64::from(cell_width)),
            self.y.saturating_mul(i64::from(cell_height)),
        )
    }
}

/// Integer address of a `chunk_size x chunk_size` block of world cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i64,
    pub y: i64,
}

impl ChunkCoord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Chunk containing the world-pixel position `(px, py)`.
    pub fn containing_pixel(px: f64, py: f64, chunk_pixel_width: f64, chunk_pixel_height: f64) -> Self {
        Self {
            x: (px / chunk_pixel_width).floor() as i64,
            y: (py / chunk_pixel_height).floor() as i64,
        }
    }

    /// World cell at local offset `(0, 0)`.
    pub fn origin_cell(self, chunk_size: u32) -> WorldCell {
        let size = i64::from(chunk_size);
        WorldCell {
            x: self.x.saturating_mul(size),
            y: self.y.saturating_mul(size),
        }
    }

    /// World cell at local offset `(lx, ly)`.
    pub fn cell_at(self, chunk_size: u32, lx: u32, ly: u32) -> WorldCell {
        let origin = self.origin_cell(chunk_size);
        WorldCell {
            x: origin.x.saturating_add(i64::from(lx)),
            y: origin.y.saturating_add(i64::from(ly)),
        }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_cell_floors_to_negative_chunk() {
        assert_eq!(WorldCell::new(-1, -1).chunk(16), ChunkCoord::new(-1, -1));
        assert_eq!(WorldCell::new(-16, -17).chunk(16), ChunkCoord::new(-1, -2));
        assert_eq!(WorldCell::new(-15, 0).chunk(16), ChunkCoord::new(-1, 0));
    }

    #[test]
    fn test_positive_cell_chunk() {
        assert_eq!(WorldCell::new(0, 15).chunk(16), ChunkCoord::new(0, 0));
        assert_eq!(WorldCell::new(16, 31).chunk(16), ChunkCoord::new(1, 1));
    }

    #[test]
    fn test_chunk_matches_floor_division() {
        for wx in -40_i64..40 {
            let expected = (wx as f64 / 16.0).floor() as i64;
            assert_eq!(WorldCell::new(wx, 0).chunk(16).x, expected, "wx={wx}");
        }
    }

    #[test]
    fn test_local_offset_in_range() {
        assert_eq!(WorldCell::new(-1, -16).local(16), (15, 0));
        assert_eq!(WorldCell::new(17, 3).local(16), (1, 3));
    }

    #[test]
    fn test_cell_at_roundtrip() {
        let chunk = ChunkCoord::new(-3, 5);
        for (lx, ly) in [(0, 0), (15, 15), (7, 2)] {
            let cell = chunk.cell_at(16, lx, ly);
            assert_eq!(cell.chunk(16), chunk);
            assert_eq!(cell.local(16), (lx, ly));
        }
    }

    #[test]
    fn test_from_pixel_floors() {
        assert_eq!(WorldCell::from_pixel(-0.5, 9.99, 10, 10), WorldCell::new(-1, 0));
        assert_eq!(WorldCell::from_pixel(-10.0, 10.0, 10, 10), WorldCell::new(-1, 1));
    }

    #[test]
    fn test_from_pixel_non_finite_does_not_panic() {
        let cell = WorldCell::from_pixel(f64::NAN, f64::INFINITY, 10, 10);
        assert_eq!(cell.x, 0);
        assert_eq!(cell.y, i64::MAX);
    }

    #[test]
    fn test_containing_pixel() {
        assert_eq!(
            ChunkCoord::containing_pixel(0.0, 0.0, 160.0, 160.0),
            ChunkCoord::new(0, 0)
        );
        assert_eq!(
            ChunkCoord::containing_pixel(-0.1, 159.9, 160.0, 160.0),
            ChunkCoord::new(-1, 0)
        );
        assert_eq!(
            ChunkCoord::containing_pixel(160.0, -160.0, 160.0, 160.0),
            ChunkCoord::new(1, -1)
        );
    }

    #[test]
    fn test_pixel_origin() {
        assert_eq!(WorldCell::new(-2, 3).pixel_origin(10, 8), (-20, 24));
    }
}
