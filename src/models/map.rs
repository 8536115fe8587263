//! Map center model

use serde::{Deserialize, Serialize};

/// Geographic center of the map widget
///
/// Derived from geocoding the weather result's location name. Only replaced
/// after a successful geocode with at least one result; never cleared, so a
/// stale center persists if geocoding fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl MapCenter {
    /// Create a new map center
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a `lat,lon` pair for map embed URLs
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let center = MapCenter::new(51.507_321_9, -0.127_647_4);
        assert_eq!(center.format_coordinates(), "51.5073,-0.1276");
    }
}
