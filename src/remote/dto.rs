//! Wire representations of the remote provider's JSON payloads and their
//! conversion into domain types.
//!
//! Conversion is where raw payload quirks are normalized: percentages become
//! ratios, three-hour precipitation volumes become hourly rates, epoch
//! seconds become zoned timestamps, and unknown condition or air quality ids
//! are rejected.

use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::Deserialize;

use crate::error::DataError;
use crate::types::city::{City, Coordinates, LocalizedName};
use crate::types::condition::Condition;
use crate::types::country::Country;
use crate::types::weather::{
    AirPollution, AirQualityIndex, Dated, Precipitation, PressureReading, TemperatureReading,
    Weather, Wind,
};

/// One hit from the geocoding endpoints.
#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    #[serde(default)]
    pub local_names: LocalNames,
    pub lat: f64,
    pub lon: f64,
    pub country: Country,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocalNames {
    pub ar: Option<String>,
    pub en: Option<String>,
}

impl GeocodingResult {
    /// The English rendering falls back to the result's plain name, which
    /// the provider always sends.
    pub fn into_city(self) -> City {
        City {
            name: LocalizedName::new(self.local_names.ar, self.local_names.en.or(Some(self.name))),
            country: self.country,
            coordinates: Coordinates::new(self.lat, self.lon),
        }
    }
}

/// A single weather reading, shared by the current-weather payload and the
/// entries of the forecast list.
#[derive(Debug, Deserialize)]
pub struct WeatherDataPoint {
    pub dt: i64,
    pub weather: Vec<ConditionEntry>,
    pub main: MainReadings,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub wind: WindEntry,
    #[serde(default)]
    pub rain: Option<VolumeEntry>,
    #[serde(default)]
    pub snow: Option<VolumeEntry>,
    pub clouds: CloudsEntry,
    #[serde(default)]
    pub sys: Option<SunTimes>,
    /// UTC offset in seconds; present on the current-weather payload only.
    #[serde(default)]
    pub timezone: Option<i32>,
    /// Precipitation probability; present on forecast entries only.
    #[serde(default)]
    pub pop: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    pub id: u16,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub humidity: f64,
    #[serde(default)]
    pub sea_level: Option<f64>,
    #[serde(default)]
    pub grnd_level: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WindEntry {
    pub speed: f64,
    pub deg: f64,
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Precipitation volume over the last one or three hours, in mm.
#[derive(Debug, Deserialize)]
pub struct VolumeEntry {
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    pub three_hours: Option<f64>,
}

impl VolumeEntry {
    /// Hourly rate: a three-hour volume is averaged, a one-hour volume is
    /// taken as is.
    fn per_hour(&self) -> f64 {
        self.three_hours
            .map(|v| v / 3.0)
            .or(self.one_hour)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
pub struct CloudsEntry {
    pub all: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SunTimes {
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

/// The five-day forecast payload.
#[derive(Debug, Deserialize)]
pub struct ForecastData {
    pub list: Vec<WeatherDataPoint>,
    pub city: ForecastCity,
}

#[derive(Debug, Deserialize)]
pub struct ForecastCity {
    /// UTC offset in seconds.
    pub timezone: i32,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

/// The air pollution payload.
#[derive(Debug, Deserialize)]
pub struct AirPollutionData {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AqiEntry,
    pub components: PollutantComponents,
}

#[derive(Debug, Deserialize)]
pub struct AqiEntry {
    pub aqi: u8,
}

#[derive(Debug, Deserialize)]
pub struct PollutantComponents {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

impl AirPollutionEntry {
    pub fn into_air_pollution(self) -> Result<AirPollution, DataError> {
        let aqi = self.main.aqi;
        let air_quality_index = AirQualityIndex::from_index(aqi)
            .ok_or_else(|| DataError::new(format!("Unknown air quality index {aqi}.")))?;
        Ok(AirPollution {
            air_quality_index,
            carbon_monoxide: self.components.co,
            nitrogen_monoxide: self.components.no,
            nitrogen_dioxide: self.components.no2,
            ozone: self.components.o3,
            sulfur_dioxide: self.components.so2,
            fine_particle_matter: self.components.pm2_5,
            coarse_particle_matter: self.components.pm10,
            ammonia: self.components.nh3,
        })
    }
}

fn zoned(epoch_seconds: i64, offset: FixedOffset) -> Result<DateTime<FixedOffset>, DataError> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or_else(|| DataError::new(format!("Timestamp {epoch_seconds} is out of range.")))
}

fn local_time(epoch_seconds: i64, offset: FixedOffset) -> Result<NaiveTime, DataError> {
    zoned(epoch_seconds, offset).map(|dt| dt.time())
}

impl WeatherDataPoint {
    /// Converts the reading into the domain model.
    ///
    /// `sun_times` carries the sunrise/sunset pair for forecast entries,
    /// which do not embed one per entry; the current-weather payload embeds
    /// its own and passes `None` here to use it.
    pub fn into_dated(
        self,
        offset: FixedOffset,
        sun_times: Option<&SunTimes>,
        air_pollution: Option<AirPollution>,
    ) -> Result<Dated<Weather>, DataError> {
        let condition_id = self
            .weather
            .first()
            .ok_or_else(|| DataError::new("Weather reading carries no condition."))?
            .id;
        let condition = Condition::from_id(condition_id)
            .ok_or_else(|| DataError::new(format!("Unknown weather condition id {condition_id}.")))?;

        let own_sun_times = self.sys.unwrap_or_default();
        let sun_times = sun_times.unwrap_or(&own_sun_times);
        let sunrise = sun_times
            .sunrise
            .map(|s| local_time(s, offset))
            .transpose()?;
        let sunset = sun_times.sunset.map(|s| local_time(s, offset)).transpose()?;

        let weather = Weather {
            temperature: TemperatureReading {
                current: self.main.temp,
                feels_like: self.main.feels_like,
                min: self.main.temp_min,
                max: self.main.temp_max,
            },
            condition,
            pressure: PressureReading {
                sea_level: self.main.sea_level.unwrap_or(self.main.pressure),
                ground_level: self.main.grnd_level.unwrap_or(self.main.pressure),
            },
            precipitation: Precipitation {
                rain: self.rain.as_ref().map(VolumeEntry::per_hour).unwrap_or(0.0),
                snow: self.snow.as_ref().map(VolumeEntry::per_hour).unwrap_or(0.0),
                probability: self.pop,
            },
            wind: Wind {
                speed: self.wind.speed,
                direction: self.wind.deg,
                gust: self.wind.gust.unwrap_or(self.wind.speed),
            },
            air_pollution,
            cloudiness: self.clouds.all / 100.0,
            humidity: self.main.humidity / 100.0,
            visibility: self.visibility.unwrap_or(10_000.0),
            sunrise,
            sunset,
        };
        Ok(Dated::new(zoned(self.dt, offset)?, weather))
    }
}

/// Resolves a payload's UTC offset in seconds into a [`FixedOffset`].
pub fn utc_offset(seconds: i32) -> Result<FixedOffset, DataError> {
    FixedOffset::east_opt(seconds)
        .ok_or_else(|| DataError::new(format!("UTC offset {seconds}s is out of range.")))
}
