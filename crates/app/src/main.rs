use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

use simulation::config::TerrainConfig;

/// Set to a file path to render a few frames, save a screenshot there and exit.
const SCREENSHOT_ENV_VAR: &str = "SNOWDAY_SCREENSHOT";
/// Frames to render before capturing, so the canvas has been painted.
const SCREENSHOT_WARMUP_FRAMES: u32 = 30;
/// Frames to wait after requesting the capture before exiting.
const SCREENSHOT_SAVE_FRAMES: u32 = 10;

fn main() {
    let config = match TerrainConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("snowday: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Snow Day".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Day/night and weather advance every frame, so keep redrawing.
    .insert_resource(WinitSettings::game())
    .insert_resource(config)
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    if let Some(path) = std::env::var_os(SCREENSHOT_ENV_VAR) {
        app.insert_resource(ScreenshotRequest {
            path: path.to_string_lossy().into_owned(),
            frame: 0,
        });
        app.add_systems(Update, drive_screenshot);
    }

    app.run();
}

#[derive(Resource)]
struct ScreenshotRequest {
    path: String,
    frame: u32,
}

fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;

    if request.frame == SCREENSHOT_WARMUP_FRAMES {
        info!("Saving screenshot to {}", request.path);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(request.path.clone()));
    } else if request.frame >= SCREENSHOT_WARMUP_FRAMES + SCREENSHOT_SAVE_FRAMES {
        exit.send(AppExit::Success);
    }
}
