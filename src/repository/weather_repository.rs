//! Weather loading that commits partial results before reporting failure.

use chrono::{DateTime, FixedOffset};
use futures_util::Stream;

use crate::error::DataError;
use crate::remote::WeatherClient;
use crate::store::WeatherStore;
use crate::types::city::{City, CityKey};
use crate::types::weather::{Dated, Weather};

/// Answers weather queries: remote fetches land in the store, reads come
/// out of the store as live streams.
#[derive(Debug, Clone)]
pub struct WeatherRepository {
    store: WeatherStore,
    client: WeatherClient,
}

impl WeatherRepository {
    pub fn new(store: WeatherStore, client: WeatherClient) -> Self {
        Self { store, client }
    }

    /// Refreshes both the current reading and the forecast for a city.
    ///
    /// The two fetches run concurrently and each successful one is committed
    /// even when the other fails; the first failure is then reported. A
    /// partially fresh cache beats a stale one.
    pub async fn load_weather(&self, city: &City) -> Result<(), DataError> {
        let (current, forecast) = tokio::join!(
            self.client.fetch_current(city),
            self.client.fetch_forecast(city),
        );

        let mut first_error = None;
        match current {
            Ok(reading) => self.store.put([reading.for_city(city.clone())]).await,
            Err(error) => first_error = Some(error),
        }
        match forecast {
            Ok(readings) => {
                self.store
                    .put(readings.into_iter().map(|r| r.for_city(city.clone())))
                    .await
            }
            Err(error) => first_error = first_error.or(Some(error)),
        }
        match first_error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }

    /// Refreshes only the current reading.
    pub async fn load_current(&self, city: &City) -> Result<Dated<Weather>, DataError> {
        let reading = self.client.fetch_current(city).await?;
        self.store.put([reading.clone().for_city(city.clone())]).await;
        Ok(reading)
    }

    /// Refreshes only the forecast.
    pub async fn load_forecast(&self, city: &City) -> Result<Vec<Dated<Weather>>, DataError> {
        let readings = self.client.fetch_forecast(city).await?;
        self.store
            .put(readings.iter().cloned().map(|r| r.for_city(city.clone())))
            .await;
        Ok(readings)
    }

    /// The cached reading closest to `now`, live-updating on every refresh.
    pub fn current_weather_stream(
        &self,
        city: CityKey,
        now: DateTime<FixedOffset>,
    ) -> impl Stream<Item = Option<Dated<Weather>>> {
        self.store.latest_stream(city, now)
    }

    /// The cached five-day window from `start`, live-updating on every
    /// refresh.
    pub fn forecast_stream(
        &self,
        city: CityKey,
        start: DateTime<FixedOffset>,
    ) -> impl Stream<Item = Vec<Dated<Weather>>> {
        self.store.forecast_stream(city, start)
    }
}
