//! City value types: coordinates, localized names, and the persistence key.

use crate::settings::AppLocale;
use crate::types::country::Country;
use serde::{Deserialize, Serialize};

/// A geographical position in decimal degrees.
///
/// Equality is plain value equality; two coordinates are the same point only
/// if both components match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Squared deviation from `other` in degree-space.
    ///
    /// This treats one degree of latitude and one degree of longitude as the
    /// same length, which only roughly holds near the equator. Nearest-city
    /// matching intentionally uses this cheap measure rather than geodesic
    /// distance.
    pub fn squared_deviation(&self, other: &Coordinates) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        dlat * dlat + dlon * dlon
    }
}

/// A name rendered in up to two languages.
///
/// Valid data carries at least one of the two, but the model tolerates both
/// being absent; [`LocalizedName::get`] then falls back to a locale-specific
/// "not available" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub arabic: Option<String>,
    pub english: Option<String>,
}

impl LocalizedName {
    pub fn new(arabic: Option<String>, english: Option<String>) -> Self {
        Self { arabic, english }
    }

    pub fn english(name: impl Into<String>) -> Self {
        Self {
            arabic: None,
            english: Some(name.into()),
        }
    }

    /// The requested language if present, then the other language, then a
    /// placeholder.
    pub fn get(&self, locale: AppLocale) -> &str {
        let (preferred, fallback) = match locale {
            AppLocale::Arabic => (&self.arabic, &self.english),
            AppLocale::English => (&self.english, &self.arabic),
        };
        preferred
            .as_deref()
            .or(fallback.as_deref())
            .unwrap_or(match locale {
                AppLocale::Arabic => "لا يوجد",
                AppLocale::English => "Not Available",
            })
    }
}

/// A city as produced by geocoding and stored in the local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: LocalizedName,
    pub country: Country,
    pub coordinates: Coordinates,
}

impl City {
    /// The persistence identity of this city.
    ///
    /// Keyed by the English rendering of the name plus the country. Two
    /// cities that differ only in their Arabic name therefore collide; this
    /// mirrors the upstream data model and callers relying on cache identity
    /// should be aware of it.
    pub fn key(&self) -> CityKey {
        CityKey {
            name: self.name.get(AppLocale::English).to_owned(),
            country: self.country,
        }
    }
}

/// Cache key for a [`City`]: English name plus country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityKey {
    pub name: String,
    pub country: Country,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_name_prefers_requested_language() {
        let name = LocalizedName::new(Some("القاهرة".into()), Some("Cairo".into()));
        assert_eq!(name.get(AppLocale::Arabic), "القاهرة");
        assert_eq!(name.get(AppLocale::English), "Cairo");
    }

    #[test]
    fn localized_name_falls_back_to_other_language() {
        let name = LocalizedName::new(None, Some("Cairo".into()));
        assert_eq!(name.get(AppLocale::Arabic), "Cairo");

        let name = LocalizedName::new(Some("القاهرة".into()), None);
        assert_eq!(name.get(AppLocale::English), "القاهرة");
    }

    #[test]
    fn localized_name_placeholder_when_empty() {
        let name = LocalizedName::new(None, None);
        assert_eq!(name.get(AppLocale::English), "Not Available");
        assert_eq!(name.get(AppLocale::Arabic), "لا يوجد");
    }

    #[test]
    fn squared_deviation_is_degree_space() {
        let a = Coordinates::new(30.0, 31.0);
        let b = Coordinates::new(30.3, 30.6);
        let dev = a.squared_deviation(&b);
        assert!((dev - (0.09 + 0.16)).abs() < 1e-12);
    }

    #[test]
    fn city_key_uses_english_name() {
        let city = City {
            name: LocalizedName::new(Some("القاهرة".into()), Some("Cairo".into())),
            country: Country::EG,
            coordinates: Coordinates::new(30.04, 31.24),
        };
        assert_eq!(city.key().name, "Cairo");
        assert_eq!(city.key().country, Country::EG);
    }
}
