//! Display model produced by the weather mapper.
//!
//! Everything here is ready to render: temperatures carry their display
//! unit, strings are formatted and localized, optional cards are simply
//! absent when their data is.

use chrono::NaiveTime;

use crate::settings::AppLocale;
use crate::types::city::Coordinates;
use crate::types::units::{Speed, Temperature};
use crate::types::weather::AirPollution;

/// The full screen model for one city's current weather.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeatherView {
    /// Absent until a current reading has been loaded.
    pub conditions: Option<CurrentConditions>,
    pub hourly: Vec<HourlyEntry>,
    pub daily: DailyForecast,
    pub coordinates: Coordinates,
    pub clouds: Option<CloudsView>,
    pub precipitation: Option<PrecipitationView>,
    pub wind: Option<WindView>,
    /// Formatted relative humidity, e.g. `47%`.
    pub humidity: Option<String>,
    pub pressure: Option<PressureView>,
    pub sunrise_sunset: Option<SunriseSunsetView>,
    pub visibility: Option<VisibilityView>,
    /// Pollutant concentrations stay in µg/m³; no preference applies.
    pub air_pollution: Option<AirPollution>,
    pub local_time: Option<NaiveTime>,
    /// Drives the dark theme; true for local hours 20 through 5.
    pub is_night: bool,
}

/// The headline block: temperature, condition, and the synthesized
/// low/high pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city_name: String,
    pub current_temperature: f64,
    pub feels_like_temperature: f64,
    pub temperature_unit: &'static str,
    pub icon: &'static str,
    pub condition_title: &'static str,
    pub low_temperature: f64,
    pub high_temperature: f64,
    /// Full localized header line, e.g.
    /// `Friday, 5 May 2025 3:04 PM GMT+02:00`.
    pub date_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time_label: String,
    pub icon: &'static str,
    pub temperature: f64,
    pub temperature_unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    /// Envelope observed across the whole forecast window.
    pub window_min: Temperature,
    pub window_max: Temperature,
    pub days: Vec<ForecastDay>,
    pub temperature_unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub day_name: String,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudsView {
    /// Formatted coverage, e.g. `12%`.
    pub coverage: String,
    pub bucket: CloudBucket,
}

/// Cloud coverage buckets over rounded percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudBucket {
    Clear,
    Few,
    Scattered,
    Broken,
    Overcast,
}

impl CloudBucket {
    pub fn description(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::Clear => "Clear sky",
                Self::Few => "Few clouds",
                Self::Scattered => "Scattered clouds",
                Self::Broken => "Broken clouds",
                Self::Overcast => "Overcast",
            },
            AppLocale::Arabic => match self {
                Self::Clear => "سماء صافية",
                Self::Few => "غيوم قليلة",
                Self::Scattered => "غيوم متفرقة",
                Self::Broken => "غيوم متقطعة",
                Self::Overcast => "غائم كليًا",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationView {
    /// Formatted rate in mm/h, e.g. `3`.
    pub amount: String,
    pub kind: PrecipitationKind,
    /// Formatted probability, e.g. `40%`, when the reading carries one.
    pub probability: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationKind {
    Rain,
    Snow,
}

impl PrecipitationKind {
    pub fn title(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::Rain => "Rain",
                Self::Snow => "Snow",
            },
            AppLocale::Arabic => match self {
                Self::Rain => "مطر",
                Self::Snow => "ثلج",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindView {
    pub speed: Speed,
    pub gust: Speed,
    pub speed_unit: &'static str,
    /// Raw bearing in degrees from north.
    pub direction_degrees: f64,
    pub direction: CompassDirection,
}

/// Eight-way compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// Buckets a bearing into its 45° sector, centered on the cardinal and
    /// intercardinal directions.
    ///
    /// Every bearing lands in a sector after the modulo; the final arm is an
    /// arithmetic invariant, not a reachable state.
    pub fn from_bearing(bearing: f64) -> Self {
        let sector = ((bearing + 22.5).rem_euclid(360.0) / 45.0) as i32;
        match sector {
            0 => Self::North,
            1 => Self::NorthEast,
            2 => Self::East,
            3 => Self::SouthEast,
            4 => Self::South,
            5 => Self::SouthWest,
            6 => Self::West,
            7 => Self::NorthWest,
            _ => unreachable!("compass sector {sector} for bearing {bearing}"),
        }
    }

    pub fn label(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::North => "N",
                Self::NorthEast => "NE",
                Self::East => "E",
                Self::SouthEast => "SE",
                Self::South => "S",
                Self::SouthWest => "SW",
                Self::West => "W",
                Self::NorthWest => "NW",
            },
            AppLocale::Arabic => match self {
                Self::North => "شمال",
                Self::NorthEast => "شمال شرق",
                Self::East => "شرق",
                Self::SouthEast => "جنوب شرق",
                Self::South => "جنوب",
                Self::SouthWest => "جنوب غرب",
                Self::West => "غرب",
                Self::NorthWest => "شمال غرب",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PressureView {
    /// Integer precision for hPa, two decimals for other units.
    pub sea_level: String,
    pub ground_level: String,
    pub pressure_unit: &'static str,
}

/// Present only when the reading carries both times.
#[derive(Debug, Clone, PartialEq)]
pub struct SunriseSunsetView {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityView {
    pub distance: String,
    pub distance_unit: &'static str,
}
