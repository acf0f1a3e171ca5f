//! Scheduled weather alert model.

use crate::types::city::City;
use chrono::{DateTime, FixedOffset};

/// A scheduled local weather notification for a city.
///
/// Created without a request code; the store assigns one on insertion and it
/// then serves as the key for activation, deactivation, and removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Store-assigned identity; `None` until the alert is persisted.
    pub request_code: Option<i32>,
    pub city: City,
    pub alert_time: DateTime<FixedOffset>,
    pub is_active: bool,
}

impl Alert {
    /// A new, not-yet-persisted alert.
    pub fn new(city: City, alert_time: DateTime<FixedOffset>) -> Self {
        Self {
            request_code: None,
            city,
            alert_time,
            is_active: false,
        }
    }
}
