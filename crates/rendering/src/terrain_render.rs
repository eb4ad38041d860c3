use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::color::{Rgb, Rgba};
use simulation::terrain::Terrain;
use simulation::time_of_day::TimeOfDay;
use simulation::viewport::{DrawCall, ScreenRect, Viewport};
use simulation::weather::Weather;

use crate::camera::CameraPosition;
use crate::canvas::{self, TerrainCanvas, TerrainCanvasSprite};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const MARKER_COLOR: Rgb = Rgb::new(255, 0, 0);
const MARKER_SIZE: f64 = 10.0;

/// Rasterize one frame: background, lit terrain cells, then the camera marker.
pub fn paint_frame(
    pixels: &mut [u8],
    viewport: Viewport,
    draw_calls: &[DrawCall],
    lighting: Rgba,
    overlay: Option<Rgba>,
) {
    let Viewport { width, height } = viewport;
    canvas::clear(pixels, BACKGROUND);

    for call in draw_calls {
        let mut color = call.color.blend(lighting);
        if let Some(overlay) = overlay {
            color = color.blend(overlay);
        }
        canvas::fill_rect(pixels, width, height, &call.rect, color);
    }

    let marker = ScreenRect {
        x: (f64::from(width) / 2.0 - MARKER_SIZE / 2.0).floor(),
        y: (f64::from(height) / 2.0 - MARKER_SIZE / 2.0).floor(),
        width: MARKER_SIZE,
        height: MARKER_SIZE,
    };
    canvas::fill_rect(pixels, width, height, &marker, MARKER_COLOR);
}

/// Per-frame terrain pass. Follows the primary window size, streams chunks
/// around the camera and repaints the canvas image.
#[allow(clippy::too_many_arguments)]
pub fn draw_terrain(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Res<CameraPosition>,
    clock: Res<TimeOfDay>,
    weather: Res<Weather>,
    mut terrain: ResMut<Terrain>,
    mut canvas: ResMut<TerrainCanvas>,
    mut images: ResMut<Assets<Image>>,
    mut sprites: Query<&mut Sprite, With<TerrainCanvasSprite>>,
    mut draw_calls: Local<Vec<DrawCall>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Viewport::new(window.width() as u32, window.height() as u32);
    if viewport.is_empty() {
        return;
    }
    let Some(image) = images.get_mut(&canvas.image) else {
        return;
    };

    if canvas.width != viewport.width || canvas.height != viewport.height {
        debug!(
            "Resizing terrain canvas {}x{} -> {}x{}",
            canvas.width, canvas.height, viewport.width, viewport.height
        );
        image.resize(canvas::extent(viewport.width, viewport.height));
        canvas.width = viewport.width;
        canvas.height = viewport.height;
        for mut sprite in &mut sprites {
            sprite.custom_size = Some(Vec2::new(
                viewport.width as f32,
                viewport.height as f32,
            ));
        }
    }

    terrain.render_into(camera.x, camera.y, viewport, &mut draw_calls);
    paint_frame(
        &mut image.data,
        viewport,
        &draw_calls,
        clock.lighting(),
        weather.overlay(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::biome::Biome;

    const CLEAR_AIR: Rgba = Rgba::new(0, 0, 0, 0);

    fn pixel(pixels: &[u8], width: u32, x: usize, y: usize) -> [u8; 4] {
        let i = (y * width as usize + x) * 4;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    fn full_screen_call(viewport: Viewport, biome: Biome) -> DrawCall {
        DrawCall {
            rect: ScreenRect {
                x: 0.0,
                y: 0.0,
                width: f64::from(viewport.width),
                height: f64::from(viewport.height),
            },
            color: biome.color(),
            biome,
        }
    }

    #[test]
    fn test_marker_at_screen_center() {
        let viewport = Viewport::new(40, 30);
        let mut px = vec![0u8; 40 * 30 * 4];
        paint_frame(&mut px, viewport, &[], CLEAR_AIR, None);
        assert_eq!(pixel(&px, 40, 15, 10), [255, 0, 0, 255]);
        assert_eq!(pixel(&px, 40, 24, 19), [255, 0, 0, 255]);
        assert_eq!(pixel(&px, 40, 14, 10), [0, 0, 0, 255]);
        assert_eq!(pixel(&px, 40, 25, 19), [0, 0, 0, 255]);
    }

    #[test]
    fn test_lighting_and_fog_blend_over_cells() {
        let viewport = Viewport::new(40, 30);
        let calls = [full_screen_call(viewport, Biome::SnowFields)];
        let night = Rgba::new(0, 0, 25, 150);
        let fog = Rgba::new(180, 180, 220, 120);

        let mut lit = vec![0u8; 40 * 30 * 4];
        paint_frame(&mut lit, viewport, &calls, night, None);
        let expected = Biome::SnowFields.color().blend(night);
        assert_eq!(pixel(&lit, 40, 0, 0), expected.to_rgba8());

        let mut foggy = vec![0u8; 40 * 30 * 4];
        paint_frame(&mut foggy, viewport, &calls, night, Some(fog));
        let expected = Biome::SnowFields.color().blend(night).blend(fog);
        assert_eq!(pixel(&foggy, 40, 0, 0), expected.to_rgba8());
    }

    #[test]
    fn test_uncovered_pixels_are_background() {
        let viewport = Viewport::new(40, 30);
        let mut px = vec![7u8; 40 * 30 * 4];
        paint_frame(&mut px, viewport, &[], CLEAR_AIR, None);
        assert_eq!(pixel(&px, 40, 0, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&px, 40, 39, 29), [0, 0, 0, 255]);
    }
}
