//! Photo service client
//!
//! Fetches one random photo for a search query from an Unsplash-style
//! `GET {base_url}/photos/random?query={q}&client_id={key}` endpoint.

use crate::CitycastError;
use crate::models::Photo;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Client for the photo search endpoint
#[derive(Debug, Clone)]
pub struct PhotoClient {
    client: Client,
    base_url: String,
    access_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoResponse {
    id: String,
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

impl PhotoClient {
    /// Create a new photo service client
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>, access_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_key,
        }
    }

    /// Fetch a random photo for a search query
    pub async fn random(&self, query: &str) -> Result<Photo> {
        let mut url = format!(
            "{}/photos/random?query={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        );
        if let Some(key) = &self.access_key {
            url.push_str("&client_id=");
            url.push_str(key);
        }
        debug!("Photo request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CitycastError::api(format!(
                "Photo request for '{query}' failed with status {status}"
            ))
            .into());
        }

        let body: PhotoResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse photo service response")?;

        Ok(Photo {
            id: body.id,
            url: body.urls.regular,
        })
    }
}
