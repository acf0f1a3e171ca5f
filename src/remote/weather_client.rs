//! Client for the provider's weather and air pollution endpoints.

use crate::error::DataError;
use crate::remote::dto::{utc_offset, AirPollutionData, ForecastData, SunTimes, WeatherDataPoint};
use crate::remote::fetch_json;
use crate::types::city::City;
use crate::types::weather::{AirPollution, Dated, Weather};

/// The slow, authoritative side of weather queries.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn request(&self, endpoint: &str, city: &City) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}/data/2.5/{endpoint}", self.base_url))
            .query(&[
                ("lat", city.coordinates.latitude),
                ("lon", city.coordinates.longitude),
            ])
            .query(&[("appid", self.api_key.as_str())])
    }

    /// The current reading for a city, enriched with air pollution data.
    ///
    /// The two endpoints are fetched concurrently. A failing air pollution
    /// fetch degrades the reading to one without pollution data rather than
    /// failing the whole request.
    pub async fn fetch_current(&self, city: &City) -> Result<Dated<Weather>, DataError> {
        let weather = fetch_json::<WeatherDataPoint>(self.request("weather", city), "weather API");
        let pollution = self.fetch_air_pollution(city);
        let (weather, pollution) = tokio::join!(weather, pollution);

        let point = weather?;
        let pollution = match pollution {
            Ok(pollution) => pollution,
            Err(error) => {
                log::warn!("air pollution fetch failed, continuing without it: {error}");
                None
            }
        };
        let offset = utc_offset(point.timezone.unwrap_or(0))?;
        point.into_dated(offset, None, pollution)
    }

    /// The five-day forecast for a city, one reading per three hours.
    pub async fn fetch_forecast(&self, city: &City) -> Result<Vec<Dated<Weather>>, DataError> {
        let data: ForecastData =
            fetch_json(self.request("forecast", city), "weather forecast API").await?;
        let offset = utc_offset(data.city.timezone)?;
        let sun_times = SunTimes {
            sunrise: data.city.sunrise,
            sunset: data.city.sunset,
        };
        data.list
            .into_iter()
            .map(|point| point.into_dated(offset, Some(&sun_times), None))
            .collect()
    }

    async fn fetch_air_pollution(&self, city: &City) -> Result<Option<AirPollution>, DataError> {
        let data: AirPollutionData =
            fetch_json(self.request("air_pollution", city), "air pollution API").await?;
        data.list
            .into_iter()
            .next()
            .map(|entry| entry.into_air_pollution())
            .transpose()
    }
}
