//! Camera-relative projection and culling.
//!
//! Screen space has its origin at the top-left of the viewport with y
//! pointing down. The camera is always at the viewport center; world pixels
//! map to screen pixels by translation only.

use crate::biome::Biome;
use crate::chunk::Cell;
use crate::color::Rgb;
use crate::coords::ChunkCoord;

/// Chunks kept past the viewport edge on each side so panning never shows a
/// gap before the next chunk is requested.
pub const CHUNK_MARGIN: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn half_extent(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    /// Whether any part of the rectangle lies in `[0, w) x [0, h)`.
    pub fn intersects(&self, viewport: Viewport) -> bool {
        self.x + self.width > 0.0
            && self.x < f64::from(viewport.width)
            && self.y + self.height > 0.0
            && self.y < f64::from(viewport.height)
    }
}

/// One solid rectangle for the display surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub rect: ScreenRect,
    pub color: Rgb,
    pub biome: Biome,
}

/// Square block of chunk coordinates centered on the camera's chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkWindow {
    pub center: ChunkCoord,
    /// Chunks on each side of `center`, on both axes.
    pub radius: i64,
}

impl ChunkWindow {
    /// Chunk window for a camera at `(camera_x, camera_y)` world pixels.
    ///
    /// The radius is `ceil(viewport / chunk_pixels) + CHUNK_MARGIN` for the
    /// longer axis, applied to both axes.
    pub fn around(
        camera_x: f64,
        camera_y: f64,
        viewport: Viewport,
        chunk_pixel_width: f64,
        chunk_pixel_height: f64,
    ) -> Self {
        Self {
            center: ChunkCoord::containing_pixel(
                camera_x,
                camera_y,
                chunk_pixel_width,
                chunk_pixel_height,
            ),
            radius: chunks_across(viewport.width, chunk_pixel_width)
                .max(chunks_across(viewport.height, chunk_pixel_height))
                + CHUNK_MARGIN,
        }
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        coord.x.saturating_sub(self.center.x).saturating_abs() <= self.radius
            && coord.y.saturating_sub(self.center.y).saturating_abs() <= self.radius
    }

    /// Number of chunks in the window.
    pub fn len(&self) -> usize {
        let side = (2 * self.radius + 1) as usize;
        side * side
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every chunk coordinate in the window, column by column.
    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> {
        let center = self.center;
        let r = self.radius;
        (-r..=r).flat_map(move |dx| (-r..=r).map(move |dy| center.offset(dx, dy)))
    }
}

/// Whole chunks needed to span `pixels`, rounded up.
fn chunks_across(pixels: u32, chunk_pixels: f64) -> i64 {
    (f64::from(pixels) / chunk_pixels).ceil() as i64
}

/// Screen rectangle of `cell` for a camera at `(camera_x, camera_y)`.
pub fn project(cell: &Cell, camera_x: f64, camera_y: f64, viewport: Viewport) -> ScreenRect {
    let (half_w, half_h) = viewport.half_extent();
    ScreenRect {
        x: cell.pixel_x as f64 - camera_x + half_w,
        y: cell.pixel_y as f64 - camera_y + half_h,
        width: f64::from(cell.width),
        height: f64::from(cell.height),
    }
}

/// World-pixel position under a screen point. Inverse of [`project`].
pub fn screen_to_world(
    screen_x: f64,
    screen_y: f64,
    camera_x: f64,
    camera_y: f64,
    viewport: Viewport,
) -> (f64, f64) {
    let (half_w, half_h) = viewport.half_extent();
    (screen_x - half_w + camera_x, screen_y - half_h + camera_y)
}
