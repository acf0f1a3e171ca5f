//! In-memory weather cache keyed by city and observation timestamp.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset};
use futures_util::stream::{self, Stream};
use tokio::sync::{watch, RwLock};

use crate::types::city::CityKey;
use crate::types::weather::{CityDated, Dated, Weather};

/// How far ahead the forecast window reaches.
const FORECAST_DAYS: i64 = 5;

/// The local, fast side of weather queries.
///
/// One reading is kept per `(city, timestamp)` pair; writing the same pair
/// again replaces the previous reading. Cloning is cheap and clones share
/// storage.
#[derive(Debug, Clone)]
pub struct WeatherStore {
    state: Arc<RwLock<BTreeMap<CityKey, BTreeMap<DateTime<FixedOffset>, Weather>>>>,
    version: Arc<watch::Sender<u64>>,
}

impl Default for WeatherStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherStore {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(BTreeMap::new())),
            version: Arc::new(version),
        }
    }

    /// Stores readings, replacing any existing reading for the same city and
    /// timestamp.
    pub async fn put(&self, readings: impl IntoIterator<Item = CityDated<Weather>>) {
        let mut state = self.state.write().await;
        for reading in readings {
            state
                .entry(reading.city.key())
                .or_default()
                .insert(reading.date_time, reading.value);
        }
        drop(state);
        self.version.send_modify(|v| *v += 1);
    }

    /// The reading whose timestamp is closest to `now`, regardless of
    /// direction. Of two equally distant readings the earlier one wins.
    pub async fn latest(
        &self,
        city: &CityKey,
        now: DateTime<FixedOffset>,
    ) -> Option<Dated<Weather>> {
        let state = self.state.read().await;
        let readings = state.get(city)?;
        readings
            .iter()
            .min_by_key(|(date_time, _)| {
                let distance = (**date_time - now).abs();
                (distance, **date_time)
            })
            .map(|(date_time, weather)| Dated::new(*date_time, weather.clone()))
    }

    /// All readings within the five-day window starting at `start`, in
    /// timestamp order.
    pub async fn forecast(
        &self,
        city: &CityKey,
        start: DateTime<FixedOffset>,
    ) -> Vec<Dated<Weather>> {
        let end = start + Duration::days(FORECAST_DAYS);
        let state = self.state.read().await;
        let Some(readings) = state.get(city) else {
            return Vec::new();
        };
        readings
            .range(start..end)
            .map(|(date_time, weather)| Dated::new(*date_time, weather.clone()))
            .collect()
    }

    /// Streams the closest-to-`now` reading: the current answer immediately,
    /// then a fresh answer after every write to the store.
    pub fn latest_stream(
        &self,
        city: CityKey,
        now: DateTime<FixedOffset>,
    ) -> impl Stream<Item = Option<Dated<Weather>>> {
        let store = self.clone();
        let rx = self.version.subscribe();
        stream::unfold(
            (store, rx, city, false),
            move |(store, mut rx, city, started)| async move {
                if started {
                    rx.changed().await.ok()?;
                } else {
                    rx.borrow_and_update();
                }
                let item = store.latest(&city, now).await;
                Some((item, (store, rx, city, true)))
            },
        )
    }

    /// Streams the five-day window starting at `start`: the current answer
    /// immediately, then a fresh answer after every write to the store.
    pub fn forecast_stream(
        &self,
        city: CityKey,
        start: DateTime<FixedOffset>,
    ) -> impl Stream<Item = Vec<Dated<Weather>>> {
        let store = self.clone();
        let rx = self.version.subscribe();
        stream::unfold(
            (store, rx, city, false),
            move |(store, mut rx, city, started)| async move {
                if started {
                    rx.changed().await.ok()?;
                } else {
                    rx.borrow_and_update();
                }
                let item = store.forecast(&city, start).await;
                Some((item, (store, rx, city, true)))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::city::{City, Coordinates, LocalizedName};
    use crate::types::condition::Condition;
    use crate::types::country::Country;
    use crate::types::weather::{Precipitation, PressureReading, TemperatureReading, Wind};
    use chrono::TimeZone;
    use futures_util::StreamExt;

    fn cairo() -> City {
        City {
            name: LocalizedName::english("Cairo"),
            country: Country::EG,
            coordinates: Coordinates::new(30.0444, 31.2357),
        }
    }

    fn weather(temp: f64) -> Weather {
        Weather {
            temperature: TemperatureReading {
                current: temp,
                feels_like: temp,
                min: temp - 2.0,
                max: temp + 2.0,
            },
            condition: Condition::ClearSky,
            pressure: PressureReading {
                sea_level: 1013.0,
                ground_level: 1009.0,
            },
            precipitation: Precipitation {
                rain: 0.0,
                snow: 0.0,
                probability: None,
            },
            wind: Wind {
                speed: 3.0,
                direction: 90.0,
                gust: 5.0,
            },
            air_pollution: None,
            cloudiness: 0.0,
            humidity: 0.5,
            visibility: 10_000.0,
            sunrise: None,
            sunset: None,
        }
    }

    fn at(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 5, 5, hour, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn latest_picks_closest_with_earlier_winning_ties() {
        let store = WeatherStore::new();
        let key = cairo().key();
        store
            .put([
                Dated::new(at(6), weather(290.0)).for_city(cairo()),
                Dated::new(at(12), weather(295.0)).for_city(cairo()),
            ])
            .await;

        // 09:00 is equally distant from both; the earlier reading wins.
        let picked = store.latest(&key, at(9)).await.unwrap();
        assert_eq!(picked.date_time, at(6));

        let picked = store.latest(&key, at(11)).await.unwrap();
        assert_eq!(picked.date_time, at(12));
    }

    #[tokio::test]
    async fn put_replaces_same_timestamp() {
        let store = WeatherStore::new();
        let key = cairo().key();
        store
            .put([Dated::new(at(6), weather(290.0)).for_city(cairo())])
            .await;
        store
            .put([Dated::new(at(6), weather(300.0)).for_city(cairo())])
            .await;

        let picked = store.latest(&key, at(6)).await.unwrap();
        assert_eq!(picked.value.temperature.current, 300.0);
        assert_eq!(store.forecast(&key, at(0)).await.len(), 1);
    }

    #[tokio::test]
    async fn forecast_window_is_half_open_five_days() {
        let store = WeatherStore::new();
        let key = cairo().key();
        let start = at(0);
        store
            .put([
                Dated::new(start, weather(290.0)).for_city(cairo()),
                Dated::new(start + Duration::days(4), weather(291.0)).for_city(cairo()),
                Dated::new(start + Duration::days(5), weather(292.0)).for_city(cairo()),
                Dated::new(start - Duration::hours(1), weather(289.0)).for_city(cairo()),
            ])
            .await;

        let window = store.forecast(&key, start).await;
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].date_time, start);
        assert_eq!(window[1].date_time, start + Duration::days(4));
    }

    #[tokio::test]
    async fn latest_stream_emits_current_then_updates() {
        let store = WeatherStore::new();
        let key = cairo().key();
        let mut stream = Box::pin(store.latest_stream(key, at(9)));

        assert!(stream.next().await.unwrap().is_none());

        store
            .put([Dated::new(at(6), weather(290.0)).for_city(cairo())])
            .await;
        let update = stream.next().await.unwrap().unwrap();
        assert_eq!(update.date_time, at(6));
    }
}
