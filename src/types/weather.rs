//! The weather snapshot model.
//!
//! All quantities are stored in the units the remote source reports them in:
//! temperature in Kelvin, pressure in hPa, precipitation in mm/h, wind in
//! m/s and degrees, pollutant concentrations in µg/m³, cloudiness and
//! humidity as ratios, visibility in meters. Conversion into display units
//! happens exclusively in the display mapper.

use crate::settings::AppLocale;
use crate::types::city::City;
use crate::types::condition::Condition;
use chrono::{DateTime, FixedOffset, NaiveTime};

/// An immutable weather reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    pub temperature: TemperatureReading,
    pub condition: Condition,
    pub pressure: PressureReading,
    pub precipitation: Precipitation,
    pub wind: Wind,
    pub air_pollution: Option<AirPollution>,
    /// Cloud coverage as a ratio in [0, 1].
    pub cloudiness: f64,
    /// Relative humidity as a ratio in [0, 1].
    pub humidity: f64,
    /// Visibility in meters.
    pub visibility: f64,
    /// Local sunrise time, when the source reported one.
    pub sunrise: Option<NaiveTime>,
    /// Local sunset time, when the source reported one.
    pub sunset: Option<NaiveTime>,
}

/// Temperatures in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
}

/// Pressures in hPa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureReading {
    pub sea_level: f64,
    pub ground_level: f64,
}

/// Precipitation rates in mm/h, with an optional probability in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precipitation {
    pub rain: f64,
    pub snow: f64,
    pub probability: Option<f64>,
}

/// Wind speed and gust in m/s, direction in degrees from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub speed: f64,
    pub direction: f64,
    pub gust: f64,
}

/// Pollutant concentrations in µg/m³ plus the 1-5 air quality index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirPollution {
    pub air_quality_index: AirQualityIndex,
    pub carbon_monoxide: f64,
    pub nitrogen_monoxide: f64,
    pub nitrogen_dioxide: f64,
    pub ozone: f64,
    pub sulfur_dioxide: f64,
    pub fine_particle_matter: f64,
    pub coarse_particle_matter: f64,
    pub ammonia: f64,
}

/// The provider's 1-5 air quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirQualityIndex {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

impl AirQualityIndex {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Good),
            2 => Some(Self::Fair),
            3 => Some(Self::Moderate),
            4 => Some(Self::Poor),
            5 => Some(Self::VeryPoor),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Self::Good => 1,
            Self::Fair => 2,
            Self::Moderate => 3,
            Self::Poor => 4,
            Self::VeryPoor => 5,
        }
    }

    pub fn title(&self, locale: AppLocale) -> &'static str {
        match locale {
            AppLocale::English => match self {
                Self::Good => "Good",
                Self::Fair => "Fair",
                Self::Moderate => "Moderate",
                Self::Poor => "Poor",
                Self::VeryPoor => "Very Poor",
            },
            AppLocale::Arabic => match self {
                Self::Good => "جيد",
                Self::Fair => "مقبول",
                Self::Moderate => "معتدل",
                Self::Poor => "سيئ",
                Self::VeryPoor => "سيئ جدًا",
            },
        }
    }
}

/// A value paired with the zoned timestamp it was observed at.
#[derive(Debug, Clone, PartialEq)]
pub struct Dated<T> {
    pub date_time: DateTime<FixedOffset>,
    pub value: T,
}

impl<T> Dated<T> {
    pub fn new(date_time: DateTime<FixedOffset>, value: T) -> Self {
        Self { date_time, value }
    }

    /// Tags this reading with the city it describes, for persistence.
    pub fn for_city(self, city: City) -> CityDated<T> {
        CityDated {
            date_time: self.date_time,
            city,
            value: self.value,
        }
    }
}

/// A dated value tagged with the city it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDated<T> {
    pub date_time: DateTime<FixedOffset>,
    pub city: City,
    pub value: T,
}

impl<T> CityDated<T> {
    pub fn into_dated(self) -> Dated<T> {
        Dated {
            date_time: self.date_time,
            value: self.value,
        }
    }
}
