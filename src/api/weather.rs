//! Weather backend client
//!
//! The weather backend is an external collaborator exposing
//! `GET {base_url}/weather/{city_key}`. Its response shape follows the
//! WeatherAPI-style `location`/`current` envelope.

use crate::CitycastError;
use crate::models::{City, WeatherSnapshot};
use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Client for the weather backend
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    location: LocationInfo,
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct LocationInfo {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
    condition: Condition,
    humidity: u8,
    pressure_mb: f64,
    last_updated: String,
    wind_kph: f64,
    uv: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
    icon: String,
}

impl From<WeatherResponse> for WeatherSnapshot {
    fn from(response: WeatherResponse) -> Self {
        Self {
            location_name: response.location.name,
            temp_c: response.current.temp_c,
            condition_text: response.current.condition.text,
            condition_icon: response.current.condition.icon,
            humidity: response.current.humidity,
            pressure_mb: response.current.pressure_mb,
            last_updated: response.current.last_updated,
            wind_kph: response.current.wind_kph,
            uv: response.current.uv,
            fetched_at: Utc::now(),
        }
    }
}

impl WeatherClient {
    /// Create a new weather backend client
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch current weather for a city
    pub async fn fetch(&self, city: City) -> Result<WeatherSnapshot> {
        let url = format!(
            "{}/weather/{}",
            self.base_url.trim_end_matches('/'),
            city.key()
        );
        debug!("Weather request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CitycastError::api(format!(
                "Weather request for '{}' failed with status {status}",
                city.key()
            ))
            .into());
        }

        let body: WeatherResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse weather backend response")?;

        Ok(body.into())
    }
}
