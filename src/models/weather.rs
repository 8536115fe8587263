//! Current weather snapshot model

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather conditions for the selected city
///
/// Replaced wholesale on each successful fetch; stale data is shown until
/// replaced. There is no loading invalidation between city switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Location name as reported by the weather backend
    pub location_name: String,
    /// Temperature in degrees Celsius
    pub temp_c: f64,
    /// Condition description (e.g. "Cloudy")
    pub condition_text: String,
    /// Condition icon URL
    pub condition_icon: String,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Air pressure in millibars
    pub pressure_mb: f64,
    /// Backend-reported last-updated timestamp, kept verbatim
    pub last_updated: String,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// UV index
    pub uv: f64,
    /// When this snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Local time portion of the backend's `last_updated` timestamp.
    ///
    /// The backend reports either `2024-01-01T12:00:00` or `2024-01-01 12:00`;
    /// falls back to the verbatim string when neither format matches.
    #[must_use]
    pub fn last_updated_time(&self) -> String {
        const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

        for format in FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&self.last_updated, format) {
                return dt.format("%H:%M:%S").to_string();
            }
        }
        self.last_updated.clone()
    }
}
