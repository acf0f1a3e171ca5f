//! Client for the provider's geocoding endpoints.

use crate::error::DataError;
use crate::remote::dto::GeocodingResult;
use crate::remote::fetch_json;
use crate::types::city::{City, Coordinates};

/// How many hits a name search asks for.
const SEARCH_LIMIT: u32 = 5;

/// The slow, authoritative side of city queries.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocodingClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Cities matching a free-form name query, at most five, in provider
    /// relevance order.
    pub async fn search(&self, query: &str) -> Result<Vec<City>, DataError> {
        let request = self
            .http
            .get(format!("{}/geo/1.0/direct", self.base_url))
            .query(&[("q", query)])
            .query(&[("limit", SEARCH_LIMIT)])
            .query(&[("appid", self.api_key.as_str())]);
        let results: Vec<GeocodingResult> = fetch_json(request, "geocoding API").await?;
        log::debug!("geocoding query {query:?} returned {} hits", results.len());
        Ok(results.into_iter().map(GeocodingResult::into_city).collect())
    }

    /// The city a position belongs to.
    ///
    /// An empty answer is an error here: reverse geocoding is only asked for
    /// positions that must resolve to somewhere.
    pub async fn reverse(&self, coordinates: &Coordinates) -> Result<City, DataError> {
        let request = self
            .http
            .get(format!("{}/geo/1.0/reverse", self.base_url))
            .query(&[("lat", coordinates.latitude), ("lon", coordinates.longitude)])
            .query(&[("limit", 1u32)])
            .query(&[("appid", self.api_key.as_str())]);
        let results: Vec<GeocodingResult> = fetch_json(request, "reverse geocoding API").await?;
        results
            .into_iter()
            .next()
            .map(GeocodingResult::into_city)
            .ok_or_else(|| {
                DataError::new(format!(
                    "Could not geocode location ({}, {}).",
                    coordinates.latitude, coordinates.longitude
                ))
            })
    }
}
