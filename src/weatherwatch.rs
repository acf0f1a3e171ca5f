//! The crate facade wiring stores, remote clients, and repositories.

use bon::bon;
use chrono::{DateTime, FixedOffset};
use futures_util::Stream;
use tokio::sync::watch;

use crate::display::view::CurrentWeatherView;
use crate::display::map_current_weather;
use crate::error::DataError;
use crate::remote::{GeocodingClient, WeatherClient, DEFAULT_BASE_URL};
use crate::repository::{CityRepository, ProgressStream, WeatherRepository};
use crate::settings::{Preferences, SettingsStore};
use crate::store::{CityStore, WeatherStore};
use crate::types::alert::Alert;
use crate::types::city::{City, CityKey, Coordinates};
use crate::types::weather::{Dated, Weather};

/// Entry point for city search, weather loading, and display mapping.
///
/// Construct one per provider account and clone it freely; clones share the
/// same caches and settings.
///
/// # Examples
///
/// ```rust,no_run
/// use weatherwatch::WeatherWatch;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = WeatherWatch::builder().api_key("my-api-key").build();
///
///     let mut search = app.search_cities("cairo");
///     while let Some(step) = search.next().await {
///         println!("{:?}", step.value().map(|cities| cities.len()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherWatch {
    cities: CityRepository,
    weather: WeatherRepository,
    settings: SettingsStore,
}

#[bon]
impl WeatherWatch {
    /// Creates a facade talking to the given provider.
    ///
    /// `base_url` overrides the provider endpoint, mainly for tests against
    /// a stub server.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(into)] base_url: Option<String>,
        preferences: Option<Preferences>,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let http = reqwest::Client::new();

        let geocoding = GeocodingClient::new(http.clone(), base_url.clone(), api_key.clone());
        let weather_client = WeatherClient::new(http, base_url, api_key);

        Self {
            cities: CityRepository::new(CityStore::new(), geocoding),
            weather: WeatherRepository::new(WeatherStore::new(), weather_client),
            settings: SettingsStore::new(preferences.unwrap_or_default()),
        }
    }

    /// Searches for cities by name; see
    /// [`CityRepository::search_cities`] for the sequence contract.
    pub fn search_cities(&self, query: &str) -> ProgressStream<Vec<City>> {
        self.cities.search_cities(query)
    }

    /// Resolves a position to its city, preferring the local cache.
    pub async fn resolve_city(&self, coordinates: &Coordinates) -> Result<City, DataError> {
        self.cities.resolve_city(coordinates).await
    }

    /// Refreshes current conditions and the forecast for a city; results
    /// land in the cache and are observed through the weather streams.
    pub async fn load_weather(&self, city: &City) -> Result<(), DataError> {
        self.weather.load_weather(city).await
    }

    /// Refreshes and returns only the current reading.
    pub async fn load_current(&self, city: &City) -> Result<Dated<Weather>, DataError> {
        self.weather.load_current(city).await
    }

    /// Refreshes and returns only the forecast.
    pub async fn load_forecast(&self, city: &City) -> Result<Vec<Dated<Weather>>, DataError> {
        self.weather.load_forecast(city).await
    }

    /// The cached reading closest to `now`, live-updating on refresh.
    pub fn current_weather_stream(
        &self,
        city: CityKey,
        now: DateTime<FixedOffset>,
    ) -> impl Stream<Item = Option<Dated<Weather>>> {
        self.weather.current_weather_stream(city, now)
    }

    /// The cached five-day forecast from `start`, live-updating on refresh.
    pub fn forecast_stream(
        &self,
        city: CityKey,
        start: DateTime<FixedOffset>,
    ) -> impl Stream<Item = Vec<Dated<Weather>>> {
        self.weather.forecast_stream(city, start)
    }

    /// Maps readings into the display model using the current preference
    /// snapshot.
    pub fn display_weather(
        &self,
        city: &City,
        current: Option<&Dated<Weather>>,
        forecast: &[Dated<Weather>],
        now: DateTime<FixedOffset>,
    ) -> CurrentWeatherView {
        map_current_weather(city, current, forecast, &self.settings.snapshot(), now)
    }

    pub async fn set_favorite(&self, city: &CityKey, is_favorite: bool) -> Result<(), DataError> {
        self.cities.set_favorite(city, is_favorite).await
    }

    pub async fn favorites(&self) -> Vec<City> {
        self.cities.favorites().await
    }

    pub fn favorites_stream(&self) -> watch::Receiver<Vec<City>> {
        self.cities.favorites_stream()
    }

    /// Schedules an alert and returns it with its assigned request code.
    pub async fn add_alert(&self, alert: Alert) -> Alert {
        self.cities.add_alert(alert).await
    }

    pub async fn remove_alert(&self, request_code: i32) -> Result<(), DataError> {
        self.cities.remove_alert(request_code).await
    }

    pub async fn set_alert_active(
        &self,
        request_code: i32,
        is_active: bool,
    ) -> Result<(), DataError> {
        self.cities.set_alert_active(request_code, is_active).await
    }

    pub async fn alerts(&self) -> Vec<Alert> {
        self.cities.alerts().await
    }

    pub fn alerts_stream(&self) -> watch::Receiver<Vec<Alert>> {
        self.cities.alerts_stream()
    }

    /// The preference store backing [`display_weather`](Self::display_weather).
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }
}
