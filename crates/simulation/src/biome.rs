//! Temperature-banded biomes for the frozen world.
//!
//! Classification walks an ascending list of offsets from the base
//! temperature and picks the first band the temperature falls under; anything
//! warmer than the last band is `SnowFields`. Colors are fixed per biome.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Biomes ordered from coldest to warmest. The derived `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Biome {
    DeepFrozenOcean,
    FrozenOcean,
    IceShelf,
    Glacier,
    Permafrost,
    PolarDesert,
    SnowFields,
}

/// Upper bound (exclusive, as an offset from the base temperature) of each
/// band below the open-ended top bucket.
const BIOME_BANDS: [(f32, Biome); 6] = [
    (5.0, Biome::DeepFrozenOcean),
    (10.0, Biome::FrozenOcean),
    (15.0, Biome::IceShelf),
    (20.0, Biome::Glacier),
    (25.0, Biome::Permafrost),
    (30.0, Biome::PolarDesert),
];

impl Biome {
    pub const ALL: [Biome; 7] = [
        Biome::DeepFrozenOcean,
        Biome::FrozenOcean,
        Biome::IceShelf,
        Biome::Glacier,
        Biome::Permafrost,
        Biome::PolarDesert,
        Biome::SnowFields,
    ];

    pub fn color(self) -> Rgb {
        match self {
            Biome::DeepFrozenOcean => Rgb::new(0, 0, 80),
            Biome::FrozenOcean => Rgb::new(0, 20, 150),
            Biome::IceShelf => Rgb::new(200, 200, 255),
            Biome::Glacier => Rgb::new(220, 220, 220),
            Biome::Permafrost => Rgb::new(150, 150, 150),
            Biome::PolarDesert => Rgb::new(180, 180, 180),
            Biome::SnowFields => Rgb::new(255, 255, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Biome::DeepFrozenOcean => "Deep Frozen Ocean",
            Biome::FrozenOcean => "Frozen Ocean",
            Biome::IceShelf => "Ice Shelf",
            Biome::Glacier => "Glacier",
            Biome::Permafrost => "Permafrost",
            Biome::PolarDesert => "Polar Desert",
            Biome::SnowFields => "Snow Fields",
        }
    }
}

/// Classify a temperature relative to `base_temperature`.
///
/// Total over every `f32`: NaN fails every comparison and lands in the top bucket.
pub fn classify(temperature: f32, base_temperature: f32) -> Biome {
    BIOME_BANDS
        .iter()
        .find(|(offset, _)| temperature < base_temperature + offset)
        .map(|&(_, biome)| biome)
        .unwrap_or(Biome::SnowFields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: f32 = -6000.0;

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(BASE + 4.99, BASE), Biome::DeepFrozenOcean);
        assert_eq!(classify(BASE + 5.0, BASE), Biome::FrozenOcean);
        assert_eq!(classify(BASE + 14.0, BASE), Biome::IceShelf);
        assert_eq!(classify(BASE + 15.0, BASE), Biome::Glacier);
        assert_eq!(classify(BASE + 24.5, BASE), Biome::Permafrost);
        assert_eq!(classify(BASE + 29.0, BASE), Biome::PolarDesert);
        assert_eq!(classify(BASE + 30.0, BASE), Biome::SnowFields);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(f32::NEG_INFINITY, BASE), Biome::DeepFrozenOcean);
        assert_eq!(classify(f32::MIN, BASE), Biome::DeepFrozenOcean);
        assert_eq!(classify(f32::MAX, BASE), Biome::SnowFields);
        assert_eq!(classify(f32::NAN, BASE), Biome::SnowFields);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = Biome::DeepFrozenOcean;
        let mut t = BASE - 50.0;
        while t < BASE + 60.0 {
            let biome = classify(t, BASE);
            assert!(biome >= previous, "{t}: {biome:?} colder than {previous:?}");
            previous = biome;
            t += 0.25;
        }
        assert_eq!(previous, Biome::SnowFields);
    }

    #[test]
    fn test_every_biome_reachable() {
        for (i, biome) in Biome::ALL.iter().enumerate() {
            let t = BASE + i as f32 * 5.0 + 1.0;
            assert_eq!(classify(t, BASE), *biome);
        }
    }

    #[test]
    fn test_colors_distinct() {
        for (i, a) in Biome::ALL.iter().enumerate() {
            for b in &Biome::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share a color");
            }
        }
    }
}
