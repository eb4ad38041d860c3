use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Real seconds for one full in-game day.
pub const DAY_LENGTH_SECS: f32 = 60.0;

const DAY_LIGHT: Rgba = Rgba::new(255, 255, 255, 50);
const TWILIGHT: Rgba = Rgba::new(50, 50, 100, 100);
const NIGHT: Rgba = Rgba::new(0, 0, 25, 150);

/// In-game clock driving the lighting overlay.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub day: u32,
    /// Hour in `[0, 24)`.
    pub hour: f32,
    pub day_length_secs: f32,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self {
            day: 1,
            hour: 0.0,
            day_length_secs: DAY_LENGTH_SECS,
        }
    }
}

impl TimeOfDay {
    /// Advance by `delta_secs` of real time.
    pub fn advance(&mut self, delta_secs: f32) {
        if self.day_length_secs <= 0.0 || !delta_secs.is_finite() || delta_secs <= 0.0 {
            return;
        }
        self.hour += delta_secs / self.day_length_secs * 24.0;
        if self.hour >= 24.0 {
            let days = (self.hour / 24.0).floor();
            self.hour -= days * 24.0;
            self.day = self.day.saturating_add(days as u32);
        }
    }

    pub fn hour_of_day(&self) -> u32 {
        self.hour as u32
    }

    /// Translucent overlay blended over every terrain cell.
    pub fn lighting(&self) -> Rgba {
        match self.hour_of_day() {
            6..=17 => DAY_LIGHT,
            3..=5 | 18..=20 => TWILIGHT,
            _ => NIGHT,
        }
    }

    pub fn formatted(&self) -> String {
        let h = self.hour as u32;
        let m = ((self.hour - h as f32) * 60.0) as u32;
        format!("Day {} {:02}:{:02}", self.day, h, m)
    }
}

pub fn tick_time_of_day(time: Res<Time>, mut clock: ResMut<TimeOfDay>) {
    clock.advance(time.delta_secs());
}

pub struct TimeOfDayPlugin;

impl Plugin for TimeOfDayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TimeOfDay>()
            .add_systems(Update, tick_time_of_day);
    }
}
