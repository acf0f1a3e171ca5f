//! In-memory city cache with favorites and scheduled alerts.

use std::collections::BTreeMap;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use tokio::sync::{watch, RwLock};

use crate::error::DataError;
use crate::types::alert::Alert;
use crate::types::city::{City, CityKey, Coordinates};

#[derive(Debug, Clone)]
struct StoredCity {
    city: City,
    is_favorite: bool,
}

#[derive(Debug, Default)]
struct State {
    cities: BTreeMap<CityKey, StoredCity>,
    alerts: Vec<Alert>,
    next_request_code: i32,
}

/// The local, fast side of city queries.
///
/// Cloning is cheap; all clones share the same storage. Mutations notify the
/// [`favorites_stream`](CityStore::favorites_stream) and
/// [`alerts_stream`](CityStore::alerts_stream) watchers.
#[derive(Debug, Clone)]
pub struct CityStore {
    state: Arc<RwLock<State>>,
    favorites_tx: Arc<watch::Sender<Vec<City>>>,
    alerts_tx: Arc<watch::Sender<Vec<Alert>>>,
}

impl Default for CityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CityStore {
    pub fn new() -> Self {
        let (favorites_tx, _) = watch::channel(Vec::new());
        let (alerts_tx, _) = watch::channel(Vec::new());
        Self {
            state: Arc::new(RwLock::new(State::default())),
            favorites_tx: Arc::new(favorites_tx),
            alerts_tx: Arc::new(alerts_tx),
        }
    }

    /// Inserts or refreshes cities from a remote answer.
    ///
    /// An already cached city keeps its favorite flag; only the localized
    /// names and coordinates are refreshed.
    pub async fn upsert(&self, cities: impl IntoIterator<Item = City>) {
        let mut state = self.state.write().await;
        for city in cities {
            let key = city.key();
            state
                .cities
                .entry(key)
                .and_modify(|stored| stored.city = city.clone())
                .or_insert(StoredCity {
                    city,
                    is_favorite: false,
                });
        }
        notify_favorites(&state, &self.favorites_tx);
    }

    /// Case-insensitive substring search over both name renderings, ordered
    /// by city key.
    pub async fn find_by_name(&self, query: &str) -> Vec<City> {
        let query = query.to_lowercase();
        let state = self.state.read().await;
        state
            .cities
            .values()
            .filter(|stored| {
                let name = &stored.city.name;
                name.english
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&query))
                    || name
                        .arabic
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&query))
            })
            .map(|stored| stored.city.clone())
            .collect()
    }

    /// The cached city closest to `coordinates` in squared degree-space,
    /// together with its deviation. Ties break on the city key.
    pub async fn find_nearest(&self, coordinates: &Coordinates) -> Option<(City, f64)> {
        let state = self.state.read().await;
        state
            .cities
            .iter()
            .map(|(key, stored)| {
                let deviation = stored.city.coordinates.squared_deviation(coordinates);
                (OrderedFloat(deviation), key.clone(), stored.city.clone())
            })
            .min_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)))
            .map(|(deviation, _, city)| (city, deviation.into_inner()))
    }

    pub async fn get(&self, key: &CityKey) -> Option<City> {
        let state = self.state.read().await;
        state.cities.get(key).map(|stored| stored.city.clone())
    }

    /// Marks a cached city as a favorite (or clears the mark).
    pub async fn set_favorite(&self, key: &CityKey, is_favorite: bool) -> Result<(), DataError> {
        let mut state = self.state.write().await;
        let stored = state.cities.get_mut(key).ok_or_else(|| {
            DataError::new(format!("City {} is not in the local cache.", key.name))
        })?;
        stored.is_favorite = is_favorite;
        notify_favorites(&state, &self.favorites_tx);
        Ok(())
    }

    pub async fn favorites(&self) -> Vec<City> {
        let state = self.state.read().await;
        favorites_of(&state)
    }

    /// Watches the favorites list; the receiver starts at the current list.
    pub fn favorites_stream(&self) -> watch::Receiver<Vec<City>> {
        self.favorites_tx.subscribe()
    }

    /// Persists an alert, assigning it the next request code.
    pub async fn add_alert(&self, mut alert: Alert) -> Alert {
        let mut state = self.state.write().await;
        state.next_request_code += 1;
        alert.request_code = Some(state.next_request_code);
        state.alerts.push(alert.clone());
        self.alerts_tx.send_replace(state.alerts.clone());
        alert
    }

    pub async fn remove_alert(&self, request_code: i32) -> Result<(), DataError> {
        let mut state = self.state.write().await;
        let before = state.alerts.len();
        state
            .alerts
            .retain(|alert| alert.request_code != Some(request_code));
        if state.alerts.len() == before {
            return Err(DataError::new(format!(
                "No alert with request code {request_code}."
            )));
        }
        self.alerts_tx.send_replace(state.alerts.clone());
        Ok(())
    }

    pub async fn set_alert_active(
        &self,
        request_code: i32,
        is_active: bool,
    ) -> Result<(), DataError> {
        let mut state = self.state.write().await;
        let alert = state
            .alerts
            .iter_mut()
            .find(|alert| alert.request_code == Some(request_code))
            .ok_or_else(|| {
                DataError::new(format!("No alert with request code {request_code}."))
            })?;
        alert.is_active = is_active;
        self.alerts_tx.send_replace(state.alerts.clone());
        Ok(())
    }

    pub async fn alerts(&self) -> Vec<Alert> {
        let state = self.state.read().await;
        state.alerts.clone()
    }

    /// Watches the alert list; the receiver starts at the current list.
    pub fn alerts_stream(&self) -> watch::Receiver<Vec<Alert>> {
        self.alerts_tx.subscribe()
    }
}

fn favorites_of(state: &State) -> Vec<City> {
    state
        .cities
        .values()
        .filter(|stored| stored.is_favorite)
        .map(|stored| stored.city.clone())
        .collect()
}

fn notify_favorites(state: &State, tx: &watch::Sender<Vec<City>>) {
    tx.send_replace(favorites_of(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::city::LocalizedName;
    use crate::types::country::Country;
    use chrono::{FixedOffset, TimeZone};

    fn city(english: &str, arabic: &str, country: Country, lat: f64, lon: f64) -> City {
        City {
            name: LocalizedName::new(Some(arabic.into()), Some(english.into())),
            country,
            coordinates: Coordinates::new(lat, lon),
        }
    }

    fn cairo() -> City {
        city("Cairo", "القاهرة", Country::EG, 30.0444, 31.2357)
    }

    fn giza() -> City {
        city("Giza", "الجيزة", Country::EG, 29.9870, 31.2118)
    }

    #[tokio::test]
    async fn search_matches_both_renderings_case_insensitively() {
        let store = CityStore::new();
        store.upsert([cairo(), giza()]).await;

        let hits = store.find_by_name("cai").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key().name, "Cairo");

        let hits = store.find_by_name("الجيز").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key().name, "Giza");

        assert!(store.find_by_name("london").await.is_empty());
    }

    #[tokio::test]
    async fn upsert_preserves_favorite_flag() {
        let store = CityStore::new();
        store.upsert([cairo()]).await;
        store.set_favorite(&cairo().key(), true).await.unwrap();

        // A refresh from remote must not clear the user's favorite.
        let mut refreshed = cairo();
        refreshed.coordinates = Coordinates::new(30.05, 31.24);
        store.upsert([refreshed]).await;

        let favorites = store.favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].coordinates.latitude, 30.05);
    }

    #[tokio::test]
    async fn nearest_picks_smallest_deviation() {
        let store = CityStore::new();
        store.upsert([cairo(), giza()]).await;

        let (nearest, deviation) = store
            .find_nearest(&Coordinates::new(29.99, 31.21))
            .await
            .unwrap();
        assert_eq!(nearest.key().name, "Giza");
        assert!(deviation < 0.001);
    }

    #[tokio::test]
    async fn nearest_of_empty_store_is_none() {
        let store = CityStore::new();
        assert!(store.find_nearest(&Coordinates::new(0.0, 0.0)).await.is_none());
    }

    #[tokio::test]
    async fn alerts_get_sequential_request_codes() {
        let store = CityStore::new();
        store.upsert([cairo()]).await;
        let when = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 5, 5, 7, 0, 0)
            .unwrap();

        let first = store.add_alert(Alert::new(cairo(), when)).await;
        let second = store.add_alert(Alert::new(giza(), when)).await;
        assert_eq!(first.request_code, Some(1));
        assert_eq!(second.request_code, Some(2));

        store.set_alert_active(1, true).await.unwrap();
        let alerts = store.alerts().await;
        assert!(alerts[0].is_active);
        assert!(!alerts[1].is_active);

        store.remove_alert(1).await.unwrap();
        assert_eq!(store.alerts().await.len(), 1);
        assert!(store.remove_alert(1).await.is_err());
    }

    #[tokio::test]
    async fn favorites_stream_observes_changes() {
        let store = CityStore::new();
        let mut rx = store.favorites_stream();
        assert!(rx.borrow().is_empty());

        store.upsert([cairo()]).await;
        store.set_favorite(&cairo().key(), true).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
