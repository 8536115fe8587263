//! HTTP clients for the three upstream services
//!
//! The dashboard talks to a weather backend, a geocoding search endpoint, and
//! a photo search endpoint. All three clients share one `reqwest` client with
//! a configured timeout and the crate user agent.

pub mod geocode;
pub mod photo;
pub mod weather;

pub use geocode::GeocodeClient;
pub use photo::PhotoClient;
pub use weather::WeatherClient;

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("citycast/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by all upstream callers
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .with_context(|| "Failed to create HTTP client")
}
