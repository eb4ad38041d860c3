use bevy::prelude::*;

pub mod camera;
pub mod canvas;
pub mod terrain_render;

use camera::CameraPosition;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraPosition>()
            .add_systems(Startup, (camera::setup_camera, canvas::setup_canvas))
            .add_systems(
                Update,
                (
                    (camera::camera_pan_keyboard, camera::camera_edge_scroll),
                    terrain_render::draw_terrain,
                )
                    .chain(),
            );
    }
}
