use bevy::prelude::*;

use simulation::config::WORLD_PIXEL_LIMIT;

/// Keyboard pan speed in world pixels per second.
pub const PAN_SPEED: f64 = 640.0;
/// Width of the window border that triggers mouse edge scrolling.
pub const EDGE_SCROLL_BORDER: f32 = 50.0;

/// Camera center in world pixels. The terrain is drawn relative to it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPosition {
    pub x: f64,
    pub y: f64,
}

impl CameraPosition {
    /// Move by `(dx, dy)` world pixels, staying inside the world radius.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x = clamp_to_world(self.x + dx);
        self.y = clamp_to_world(self.y + dy);
    }
}

fn clamp_to_world(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-WORLD_PIXEL_LIMIT, WORLD_PIXEL_LIMIT)
    }
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// WASD / arrow keys. Screen y points down, so W moves the camera to
/// smaller world y.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera: ResMut<CameraPosition>,
) {
    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }

    if dir != Vec2::ZERO {
        let dir = dir.normalize();
        let delta = PAN_SPEED * f64::from(time.delta_secs());
        camera.pan(f64::from(dir.x) * delta, f64::from(dir.y) * delta);
    }
}

/// Scroll when the cursor rests near a window edge.
pub fn camera_edge_scroll(
    windows: Query<&Window>,
    time: Res<Time>,
    mut camera: ResMut<CameraPosition>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let dir = edge_scroll_direction(cursor, window.size());
    if dir != Vec2::ZERO {
        let delta = PAN_SPEED * f64::from(time.delta_secs());
        camera.pan(f64::from(dir.x) * delta, f64::from(dir.y) * delta);
    }
}

/// Scroll direction and strength for a cursor position, each component in
/// `[-1, 1]`. Strength falls off linearly from the window edge to the inner
/// side of the border.
pub fn edge_scroll_direction(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        edge_axis(cursor.x, window_size.x),
        edge_axis(cursor.y, window_size.y),
    )
}

fn edge_axis(pos: f32, extent: f32) -> f32 {
    if extent <= 2.0 * EDGE_SCROLL_BORDER {
        return 0.0;
    }
    if pos < EDGE_SCROLL_BORDER {
        -(1.0 - pos.max(0.0) / EDGE_SCROLL_BORDER)
    } else if pos > extent - EDGE_SCROLL_BORDER {
        1.0 - (extent - pos).max(0.0) / EDGE_SCROLL_BORDER
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn test_center_does_not_scroll() {
        assert_eq!(edge_scroll_direction(Vec2::new(640.0, 360.0), WINDOW), Vec2::ZERO);
        assert_eq!(edge_scroll_direction(Vec2::new(50.0, 50.0), WINDOW), Vec2::ZERO);
    }

    #[test]
    fn test_edge_strength_falls_off() {
        let left = edge_scroll_direction(Vec2::new(0.0, 360.0), WINDOW);
        assert_eq!(left, Vec2::new(-1.0, 0.0));
        let halfway = edge_scroll_direction(Vec2::new(25.0, 360.0), WINDOW);
        assert!((halfway.x + 0.5).abs() < 1e-6);
        let right = edge_scroll_direction(Vec2::new(1270.0, 360.0), WINDOW);
        assert!((right.x - 0.8).abs() < 1e-6);
        let bottom = edge_scroll_direction(Vec2::new(640.0, 720.0), WINDOW);
        assert_eq!(bottom, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_corner_scrolls_diagonally() {
        let dir = edge_scroll_direction(Vec2::new(10.0, 710.0), WINDOW);
        assert!(dir.x < 0.0 && dir.y > 0.0);
    }

    #[test]
    fn test_tiny_window_never_scrolls() {
        let dir = edge_scroll_direction(Vec2::new(1.0, 1.0), Vec2::new(80.0, 80.0));
        assert_eq!(dir, Vec2::ZERO);
    }

    #[test]
    fn test_pan_clamps_to_world_radius() {
        let mut camera = CameraPosition::default();
        camera.pan(f64::MAX, -f64::MAX);
        assert_eq!(camera.x, WORLD_PIXEL_LIMIT);
        assert_eq!(camera.y, -WORLD_PIXEL_LIMIT);
        camera.pan(f64::NAN, 0.0);
        assert_eq!(camera.x, 0.0);
    }

    #[test]
    fn test_keyboard_pan_moves_camera() {
        use bevy::time::TimeUpdateStrategy;
        use std::time::Duration;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .init_resource::<CameraPosition>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, camera_pan_keyboard);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        for _ in 0..3 {
            app.update();
        }

        // At most 0.1 s per frame at 640 px/s.
        let camera = app.world().resource::<CameraPosition>();
        assert!(camera.x > 0.0 && camera.x <= 3.0 * 64.0 + 1e-6, "x = {}", camera.x);
        assert_eq!(camera.y, 0.0);
    }
}
