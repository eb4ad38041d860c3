//! CPU-side RGBA8 canvas the terrain is rasterized into each frame, shown
//! through a single sprite under the 2D camera.

use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use simulation::color::Rgb;
use simulation::viewport::ScreenRect;

const BYTES_PER_PIXEL: usize = 4;

/// Handle and current pixel size of the terrain canvas image.
#[derive(Resource, Debug, Clone)]
pub struct TerrainCanvas {
    pub image: Handle<Image>,
    pub width: u32,
    pub height: u32,
}

/// Marks the sprite displaying [`TerrainCanvas`].
#[derive(Component)]
pub struct TerrainCanvasSprite;

pub(crate) fn new_canvas_image(width: u32, height: u32) -> Image {
    let data = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];
    let mut image = Image::new(
        extent(width, height),
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    image
}

pub(crate) fn extent(width: u32, height: u32) -> Extent3d {
    Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    }
}

pub fn setup_canvas(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let handle = images.add(new_canvas_image(1, 1));
    commands.spawn((Sprite::from_image(handle.clone()), TerrainCanvasSprite));
    commands.insert_resource(TerrainCanvas {
        image: handle,
        width: 1,
        height: 1,
    });
}

// ---------------------------------------------------------------------------
// Rasterization
// ---------------------------------------------------------------------------

/// Fill the whole canvas with an opaque color.
pub fn clear(pixels: &mut [u8], color: Rgb) {
    let rgba = color.to_rgba8();
    for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&rgba);
    }
}

/// Fill `rect` clipped to a `width x height` canvas.
///
/// Both edges are floored, so rectangles sharing an edge neither overlap nor
/// leave a gap between them.
pub fn fill_rect(pixels: &mut [u8], width: u32, height: u32, rect: &ScreenRect, color: Rgb) {
    let Some((x0, x1)) = clip_span(rect.x, rect.width, width) else {
        return;
    };
    let Some((y0, y1)) = clip_span(rect.y, rect.height, height) else {
        return;
    };
    let rgba = color.to_rgba8();
    let stride = width as usize * BYTES_PER_PIXEL;
    for y in y0..y1 {
        let row = y * stride;
        let span = &mut pixels[row + x0 * BYTES_PER_PIXEL..row + x1 * BYTES_PER_PIXEL];
        for px in span.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }
}

/// Pixel range `[start, end)` covered by `[pos, pos + len)` inside `0..limit`.
fn clip_span(pos: f64, len: f64, limit: u32) -> Option<(usize, usize)> {
    let limit = i64::from(limit);
    let start = (pos.floor() as i64).clamp(0, limit);
    let end = ((pos + len).floor() as i64).clamp(0, limit);
    (start < end).then_some((start as usize, end as usize))
}
