//! Geocoding client: convert a place name to coordinates for map centering.
//! Uses a Nominatim (OpenStreetMap) style search endpoint - free, no API key
//! required.

use crate::CitycastError;
use crate::models::MapCenter;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Client for the geocoding search endpoint
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

/// One search result. Nominatim reports coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl GeocodeClient {
    /// Create a new geocoding client
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a place name to a map center.
    ///
    /// Takes the first result's coordinates; returns `Ok(None)` when the
    /// search yields no results so the caller can keep its previous center.
    pub async fn search(&self, name: &str) -> Result<Option<MapCenter>> {
        let url = format!(
            "{}/search?format=json&q={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(name)
        );
        debug!("Geocoding request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CitycastError::api(format!(
                "Geocoding request for '{name}' failed with status {status}"
            ))
            .into());
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .with_context(|| "Failed to parse geocoding response")?;

        let Some(first) = results.into_iter().next() else {
            debug!("No geocoding results for '{}'", name);
            return Ok(None);
        };

        let latitude = first
            .lat
            .parse::<f64>()
            .with_context(|| format!("Invalid latitude '{}' in geocoding response", first.lat))?;
        let longitude = first
            .lon
            .parse::<f64>()
            .with_context(|| format!("Invalid longitude '{}' in geocoding response", first.lon))?;

        Ok(Some(MapCenter::new(latitude, longitude)))
    }
}
