//! HTTP clients for the remote geocoding and weather provider.

pub mod dto;

mod geocoding_client;
mod weather_client;

pub use geocoding_client::GeocodingClient;
pub use weather_client::WeatherClient;

use serde::de::DeserializeOwned;

use crate::error::DataError;

/// Default base URL of the provider's API.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Issues a prepared request and decodes the JSON body, mapping each failure
/// mode onto [`DataError`].
async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    what: &str,
) -> Result<T, DataError> {
    let response = request
        .send()
        .await
        .map_err(|e| DataError::unreachable(what, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataError::status(what, status));
    }
    response.json().await.map_err(|e| DataError::decode(what, e))
}
