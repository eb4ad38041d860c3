use serde::{Deserialize, Serialize};

/// Opaque 8-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite a translucent overlay on top of this color ("over" operator).
    pub fn blend(self, overlay: Rgba) -> Rgb {
        let a = u16::from(overlay.a);
        let inv = 255 - a;
        let mix = |base: u8, top: u8| -> u8 {
            ((u16::from(base) * inv + u16::from(top) * a + 127) / 255) as u8
        };
        Rgb {
            r: mix(self.r, overlay.r),
            g: mix(self.g, overlay.g),
            b: mix(self.b, overlay.b),
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// 8-bit color with straight alpha, used for lighting and weather overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_transparent_is_identity() {
        let base = Rgb::new(10, 200, 30);
        assert_eq!(base.blend(Rgba::new(255, 0, 0, 0)), base);
    }

    #[test]
    fn test_blend_opaque_replaces() {
        let base = Rgb::new(10, 200, 30);
        assert_eq!(base.blend(Rgba::new(1, 2, 3, 255)), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_blend_half() {
        let out = Rgb::new(0, 0, 0).blend(Rgba::new(255, 255, 255, 128));
        assert!(out.r >= 127 && out.r <= 129, "got {}", out.r);
    }
}
