use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Mean surface air temperature in Celsius.
pub const BASE_AIR_TEMPERATURE: f32 = -272.5;
pub const AIR_TEMPERATURE_VARIATION: f32 = 1.5;
const ABSOLUTE_ZERO: f32 = -273.15;

const FIRST_CHANGE_SECS: (u32, u32) = (10, 30);
const CHANGE_INTERVAL_SECS: (u32, u32) = (15, 45);

const FOG_OVERLAY: Rgba = Rgba::new(180, 180, 220, 120);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherKind {
    Clear,
    Overcast,
    Snowstorm,
    Fog,
    MethaneRain,
    NitrogenSnow,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 6] = [
        WeatherKind::Clear,
        WeatherKind::Overcast,
        WeatherKind::Snowstorm,
        WeatherKind::Fog,
        WeatherKind::MethaneRain,
        WeatherKind::NitrogenSnow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear",
            WeatherKind::Overcast => "Overcast",
            WeatherKind::Snowstorm => "Snowstorm",
            WeatherKind::Fog => "Fog",
            WeatherKind::MethaneRain => "Methane Rain",
            WeatherKind::NitrogenSnow => "Nitrogen Snow",
        }
    }

    pub fn precipitation(self) -> &'static str {
        match self {
            WeatherKind::MethaneRain => "liquid methane",
            WeatherKind::NitrogenSnow => "solid nitrogen",
            WeatherKind::Snowstorm => "hydrogen ice crystals",
            WeatherKind::Fog => "helium mist",
            WeatherKind::Clear | WeatherKind::Overcast => "none",
        }
    }

    /// Visibility range in kilometres.
    fn visibility_range(self) -> (f32, f32) {
        match self {
            WeatherKind::MethaneRain => (5.0, 20.0),
            WeatherKind::NitrogenSnow => (2.0, 10.0),
            WeatherKind::Snowstorm => (1.0, 5.0),
            WeatherKind::Fog => (3.0, 8.0),
            WeatherKind::Clear | WeatherKind::Overcast => (20.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::North,
        WindDirection::NorthEast,
        WindDirection::East,
        WindDirection::SouthEast,
        WindDirection::South,
        WindDirection::SouthWest,
        WindDirection::West,
        WindDirection::NorthWest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WindDirection::North => "North",
            WindDirection::NorthEast => "North-East",
            WindDirection::East => "East",
            WindDirection::SouthEast => "South-East",
            WindDirection::South => "South",
            WindDirection::SouthWest => "South-West",
            WindDirection::West => "West",
            WindDirection::NorthWest => "North-West",
        }
    }
}

/// One rolled set of surface conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub kind: WeatherKind,
    /// Air temperature in Celsius.
    pub temperature: f32,
    /// Wind-chill adjusted temperature, never below absolute zero.
    pub feels_like: f32,
    /// Wind speed in m/s.
    pub wind_speed: f32,
    pub wind_direction: WindDirection,
    /// Visibility in kilometres.
    pub visibility: f32,
    /// Surface pressure in kPa.
    pub pressure: f32,
}

impl WeatherConditions {
    fn roll(kind: WeatherKind, rng: &mut ChaCha8Rng) -> Self {
        let temperature = rng.gen_range(
            BASE_AIR_TEMPERATURE - AIR_TEMPERATURE_VARIATION
                ..=BASE_AIR_TEMPERATURE + AIR_TEMPERATURE_VARIATION,
        );
        let wind_speed = rng.gen_range(5.0..=30.0);
        let wind_direction = WindDirection::ALL[rng.gen_range(0..WindDirection::ALL.len())];
        let (min_vis, max_vis) = kind.visibility_range();
        Self {
            kind,
            temperature,
            feels_like: (temperature - wind_speed / 20.0).max(ABSOLUTE_ZERO),
            wind_speed,
            wind_direction,
            visibility: rng.gen_range(min_vis..=max_vis),
            pressure: rng.gen_range(0.01..=0.05),
        }
    }
}

/// Fired whenever the weather kind is re-rolled.
#[derive(Event, Debug, Clone)]
pub struct WeatherChangeEvent {
    pub old_kind: WeatherKind,
    pub new_kind: WeatherKind,
}

/// Seeded weather state. The same seed replays the same sequence of
/// conditions for the same sequence of frame deltas.
#[derive(Resource)]
pub struct Weather {
    rng: ChaCha8Rng,
    conditions: WeatherConditions,
    /// Seconds until the next re-roll.
    next_change_in: f32,
}

impl Weather {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let kind = WeatherKind::ALL[rng.gen_range(0..WeatherKind::ALL.len())];
        let conditions = WeatherConditions::roll(kind, &mut rng);
        let next_change_in = rng.gen_range(FIRST_CHANGE_SECS.0..=FIRST_CHANGE_SECS.1) as f32;
        Self {
            rng,
            conditions,
            next_change_in,
        }
    }

    pub fn conditions(&self) -> &WeatherConditions {
        &self.conditions
    }

    pub fn kind(&self) -> WeatherKind {
        self.conditions.kind
    }

    pub fn next_change_in(&self) -> f32 {
        self.next_change_in
    }

    /// Extra overlay drawn over the lit terrain, if the current kind has one.
    pub fn overlay(&self) -> Option<Rgba> {
        match self.conditions.kind {
            WeatherKind::Fog => Some(FOG_OVERLAY),
            _ => None,
        }
    }

    /// Count down by `delta_secs`; re-roll when the timer runs out.
    pub fn advance(&mut self, delta_secs: f32) -> Option<WeatherChangeEvent> {
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return None;
        }
        self.next_change_in -= delta_secs;
        if self.next_change_in > 0.0 {
            return None;
        }
        let old_kind = self.conditions.kind;
        let new_kind = WeatherKind::ALL[self.rng.gen_range(0..WeatherKind::ALL.len())];
        self.conditions = WeatherConditions::roll(new_kind, &mut self.rng);
        self.next_change_in =
            self.rng.gen_range(CHANGE_INTERVAL_SECS.0..=CHANGE_INTERVAL_SECS.1) as f32;
        Some(WeatherChangeEvent { old_kind, new_kind })
    }
}

pub fn update_weather(
    time: Res<Time>,
    mut weather: ResMut<Weather>,
    mut change_events: EventWriter<WeatherChangeEvent>,
) {
    if let Some(event) = weather.advance(time.delta_secs()) {
        let conditions = weather.conditions();
        info!(
            "Weather: {} -> {} ({:.2} C, wind {:.1} m/s {}, visibility {:.1} km)",
            event.old_kind.name(),
            event.new_kind.name(),
            conditions.temperature,
            conditions.wind_speed,
            conditions.wind_direction.name(),
            conditions.visibility,
        );
        change_events.send(event);
    }
}

/// Seeds [`Weather`] from `seed` unless a `Weather` resource already exists.
pub struct WeatherPlugin {
    pub seed: u64,
}

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Weather>() {
            app.insert_resource(Weather::new(self.seed));
        }
        app.add_event::<WeatherChangeEvent>()
            .add_systems(Update, update_weather);
    }
}
