use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::chunk::Chunk;
use crate::coords::ChunkCoord;

/// Hit/miss counters for a [`ChunkCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub cached: usize,
}

/// Memoizes generated chunks by chunk coordinate.
///
/// Entries are created on first request and never evicted; memory grows with
/// the area the camera has visited.
#[derive(Default)]
pub struct ChunkCache {
    chunks: HashMap<ChunkCoord, Chunk>,
    hits: u64,
    misses: u64,
}

impl ChunkCache {
    /// Return the cached chunk, running `generate` only on a miss.
    pub fn get_or_generate<F>(&mut self, coord: ChunkCoord, generate: F) -> &Chunk
    where
        F: FnOnce(ChunkCoord) -> Chunk,
    {
        match self.chunks.entry(coord) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                entry.insert(generate(coord))
            }
        }
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            cached: self.chunks.len(),
        }
    }

    /// Drop every chunk. Counters are kept.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkGenerator;
    use crate::config::TerrainConfig;

    #[test]
    fn test_second_request_does_not_regenerate() {
        let generator = ChunkGenerator::new(&TerrainConfig::default());
        let mut cache = ChunkCache::default();
        let mut calls = 0;
        let coord = ChunkCoord::new(2, 2);

        let first = cache
            .get_or_generate(coord, |c| {
                calls += 1;
                generator.generate(c)
            })
            .clone();
        let second = cache
            .get_or_generate(coord, |c| {
                calls += 1;
                generator.generate(c)
            })
            .clone();

        assert_eq!(calls, 1);
        assert_eq!(first, second);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                cached: 1
            }
        );
    }

    #[test]
    fn test_distinct_coords_are_distinct_entries() {
        let generator = ChunkGenerator::new(&TerrainConfig::default());
        let mut cache = ChunkCache::default();
        for coord in [
            ChunkCoord::new(0, 0),
            ChunkCoord::new(-1, 0),
            ChunkCoord::new(0, -1),
            ChunkCoord::new(i64::MIN / 64, i64::MAX / 64),
        ] {
            let chunk = cache.get_or_generate(coord, |c| generator.generate(c));
            assert_eq!(chunk.coord, coord);
        }
        assert_eq!(cache.len(), 4);
        assert!(cache.contains(ChunkCoord::new(-1, 0)));
        assert!(!cache.contains(ChunkCoord::new(1, 1)));
    }

    #[test]
    fn test_clear_then_regenerate_matches() {
        let generator = ChunkGenerator::new(&TerrainConfig::default());
        let mut cache = ChunkCache::default();
        let coord = ChunkCoord::new(-7, 3);
        let before = cache
            .get_or_generate(coord, |c| generator.generate(c))
            .clone();
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(coord).is_none());
        let after = cache.get_or_generate(coord, |c| generator.generate(c));
        assert_eq!(&before, after);
        assert_eq!(cache.stats().misses, 2);
    }
}
