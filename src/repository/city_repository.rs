//! City queries that merge the local cache with remote geocoding.

use tokio::sync::mpsc;
use tokio_util::task::AbortOnDropHandle;

use crate::error::DataError;
use crate::remote::GeocodingClient;
use crate::repository::ProgressStream;
use crate::store::CityStore;
use crate::types::alert::Alert;
use crate::types::city::{City, CityKey, Coordinates};
use crate::types::progress::Progress;

/// Largest squared degree-space deviation at which a cached city still
/// counts as "here", sparing a reverse geocoding round trip.
const MAX_COORDINATE_DEVIATION: f64 = 0.3;

/// Answers city queries from both sides: the cache answers fast, the
/// geocoding API answers authoritatively.
#[derive(Debug, Clone)]
pub struct CityRepository {
    store: CityStore,
    geocoding: GeocodingClient,
}

impl CityRepository {
    pub fn new(store: CityStore, geocoding: GeocodingClient) -> Self {
        Self { store, geocoding }
    }

    /// Searches for cities by name, racing the cache against the remote.
    ///
    /// A blank query yields a lone [`Progress::Initial`]. Any other query
    /// yields exactly three steps: an empty `Loading`, a `Loading` carrying
    /// the cache's answer, and a terminal `Success` (remote hits, persisted)
    /// or `Failure` (remote error, cache answer kept as the stale value).
    /// Dropping the stream cancels the remote request and skips persistence.
    pub fn search_cities(&self, query: &str) -> ProgressStream<Vec<City>> {
        let (tx, rx) = mpsc::channel(1);
        let query = query.trim().to_owned();
        if query.is_empty() {
            // Capacity one: the lone step fits without a worker.
            let _ = tx.try_send(Progress::Initial);
            return ProgressStream::finished(rx);
        }

        let store = self.store.clone();
        let geocoding = self.geocoding.clone();
        let worker = tokio::spawn(async move {
            if tx.send(Progress::Loading(None)).await.is_err() {
                return;
            }
            let local_side = async {
                let local = store.find_by_name(&query).await;
                let _ = tx.send(Progress::Loading(Some(local.clone()))).await;
                local
            };
            let (local, remote) = tokio::join!(local_side, geocoding.search(&query));
            let terminal = match remote {
                Ok(cities) => {
                    store.upsert(cities.clone()).await;
                    Progress::Success(cities)
                }
                Err(error) => {
                    log::warn!("city search {query:?} failed remotely: {error}");
                    Progress::Failure {
                        error,
                        value: Some(local),
                    }
                }
            };
            let _ = tx.send(terminal).await;
        });
        ProgressStream::with_worker(rx, AbortOnDropHandle::new(worker))
    }

    /// Resolves a position to its city.
    ///
    /// A cached city within [`MAX_COORDINATE_DEVIATION`] answers without a
    /// network round trip; otherwise the position is reverse geocoded and
    /// the answer persisted.
    pub async fn resolve_city(&self, coordinates: &Coordinates) -> Result<City, DataError> {
        if let Some((city, deviation)) = self.store.find_nearest(coordinates).await {
            if deviation <= MAX_COORDINATE_DEVIATION {
                return Ok(city);
            }
        }
        let city = self.geocoding.reverse(coordinates).await?;
        self.store.upsert([city.clone()]).await;
        Ok(city)
    }

    pub async fn set_favorite(&self, key: &CityKey, is_favorite: bool) -> Result<(), DataError> {
        self.store.set_favorite(key, is_favorite).await
    }

    pub async fn favorites(&self) -> Vec<City> {
        self.store.favorites().await
    }

    pub fn favorites_stream(&self) -> tokio::sync::watch::Receiver<Vec<City>> {
        self.store.favorites_stream()
    }

    pub async fn add_alert(&self, alert: Alert) -> Alert {
        self.store.add_alert(alert).await
    }

    pub async fn remove_alert(&self, request_code: i32) -> Result<(), DataError> {
        self.store.remove_alert(request_code).await
    }

    pub async fn set_alert_active(
        &self,
        request_code: i32,
        is_active: bool,
    ) -> Result<(), DataError> {
        self.store.set_alert_active(request_code, is_active).await
    }

    pub async fn alerts(&self) -> Vec<Alert> {
        self.store.alerts().await
    }

    pub fn alerts_stream(&self) -> tokio::sync::watch::Receiver<Vec<Alert>> {
        self.store.alerts_stream()
    }
}
