use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod terrain_inspector;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<terrain_inspector::InspectorVisible>()
            .add_systems(
                Update,
                (
                    terrain_inspector::toggle_inspector,
                    terrain_inspector::terrain_inspector_ui,
                )
                    .chain(),
            );
    }
}
