//! Terrain inspector window (F3).
//!
//! Shows where the camera is, how much terrain has been generated, and the
//! temperature and biome of the cell under the cursor.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::camera::CameraPosition;
use simulation::biome::Biome;
use simulation::terrain::Terrain;
use simulation::time_of_day::TimeOfDay;
use simulation::viewport::{screen_to_world, Viewport};
use simulation::weather::Weather;

#[derive(Resource)]
pub struct InspectorVisible(pub bool);

impl Default for InspectorVisible {
    fn default() -> Self {
        Self(true)
    }
}

pub fn toggle_inspector(keys: Res<ButtonInput<KeyCode>>, mut visible: ResMut<InspectorVisible>) {
    if keys.just_pressed(KeyCode::F3) {
        visible.0 = !visible.0;
    }
}

fn biome_color(biome: Biome) -> egui::Color32 {
    let c = biome.color();
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

pub fn terrain_inspector_ui(
    mut contexts: EguiContexts,
    visible: Res<InspectorVisible>,
    windows: Query<&Window>,
    camera: Res<CameraPosition>,
    terrain: Res<Terrain>,
    clock: Res<TimeOfDay>,
    weather: Res<Weather>,
) {
    if !visible.0 {
        return;
    }

    let camera_cell = terrain.cell_at_pixel(camera.x, camera.y);
    let camera_chunk = terrain.chunk_at_pixel(camera.x, camera.y);
    let stats = terrain.cache_stats();

    let hovered = windows.get_single().ok().and_then(|window| {
        let cursor = window.cursor_position()?;
        let viewport = Viewport::new(window.width() as u32, window.height() as u32);
        let (wx, wy) = screen_to_world(
            f64::from(cursor.x),
            f64::from(cursor.y),
            camera.x,
            camera.y,
            viewport,
        );
        Some((terrain.cell_at_pixel(wx, wy), terrain.sample_at_pixel(wx, wy)))
    });

    let conditions = weather.conditions();

    egui::Window::new("Terrain")
        .default_width(260.0)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Grid::new("terrain_inspector_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Camera:");
                    ui.label(format!("({:.0}, {:.0}) px", camera.x, camera.y));
                    ui.end_row();

                    ui.label("Cell:");
                    ui.label(format!("({}, {})", camera_cell.x, camera_cell.y));
                    ui.end_row();

                    ui.label("Chunk:");
                    ui.label(format!("({}, {})", camera_chunk.x, camera_chunk.y));
                    ui.end_row();

                    ui.label("Cached chunks:");
                    ui.label(format!("{}", stats.cached));
                    ui.end_row();

                    ui.label("Hits / misses:");
                    ui.label(format!("{} / {}", stats.hits, stats.misses));
                    ui.end_row();
                });

            ui.separator();
            match hovered {
                Some((cell, sample)) => {
                    ui.label(format!("Hovered cell ({}, {})", cell.x, cell.y));
                    ui.label(format!("Temperature: {:.1}", sample.temperature));
                    ui.colored_label(biome_color(sample.biome), sample.biome.name());
                }
                None => {
                    ui.label("Cursor outside window");
                }
            }

            ui.separator();
            ui.label(clock.formatted());
            ui.label(format!(
                "{}: {:.2} C, wind {:.1} m/s {}",
                conditions.kind.name(),
                conditions.temperature,
                conditions.wind_speed,
                conditions.wind_direction.name(),
            ));
            ui.label(format!(
                "Visibility {:.1} km, precipitation: {}",
                conditions.visibility,
                conditions.kind.precipitation(),
            ));
        });
}
