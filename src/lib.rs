mod display;
mod error;
mod format;
mod remote;
mod repository;
mod settings;
mod store;
mod types;
mod weatherwatch;

pub use error::DataError;
pub use weatherwatch::*;

pub use display::view::*;
pub use display::{fake_min_max, map_current_weather};

pub use remote::{GeocodingClient, WeatherClient, DEFAULT_BASE_URL};
pub use repository::{CityRepository, ProgressStream, WeatherRepository};
pub use store::{CityStore, WeatherStore};

pub use settings::{
    AppLocale, DistanceUnit, Language, Preferences, PressureUnit, SettingsStore, SpeedUnit,
    TemperatureUnit,
};

pub use types::alert::Alert;
pub use types::city::{City, CityKey, Coordinates, LocalizedName};
pub use types::condition::{Condition, ConditionGroup};
pub use types::country::Country;
pub use types::progress::Progress;
pub use types::units::{Distance, Pressure, Speed, Temperature};
pub use types::weather::{
    AirPollution, AirQualityIndex, CityDated, Dated, Precipitation, PressureReading,
    TemperatureReading, Weather, Wind,
};
