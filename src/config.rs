//! Configuration management for `Citycast` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings. The original
//! dashboard embedded its API base URL and provider keys as literals; here
//! they are explicit configuration passed into the orchestrating view.

use crate::CitycastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Citycast` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitycastConfig {
    /// Weather backend configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Geocoding service configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Photo service configuration
    #[serde(default)]
    pub photos: PhotosConfig,
    /// Map widget configuration
    #[serde(default)]
    pub map: MapConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the weather backend (external collaborator)
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, shared by all upstream clients
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u32,
}

/// Geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the geocoding search endpoint
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
}

/// Photo service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosConfig {
    /// Base URL of the photo search endpoint
    #[serde(default = "default_photos_base_url")]
    pub base_url: String,
    /// Photo provider access key
    pub access_key: Option<String>,
    /// Period of the photo refresh loop in seconds
    #[serde(default = "default_photo_refresh")]
    pub refresh_seconds: u32,
}

/// Map widget settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map provider API key
    pub api_key: Option<String>,
    /// Zoom level for the centered map
    #[serde(default = "default_map_zoom")]
    pub zoom: u8,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout() -> u32 {
    10
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_photos_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_photo_refresh() -> u32 {
    60
}

fn default_map_zoom() -> u8 {
    12
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
        }
    }
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            base_url: default_photos_base_url(),
            access_key: None,
            refresh_seconds: default_photo_refresh(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            zoom: default_map_zoom(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for CitycastConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            geocoding: GeocodingConfig::default(),
            photos: PhotosConfig::default(),
            map: MapConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CitycastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with CITYCAST_ prefix
        builder = builder.add_source(
            Environment::with_prefix("CITYCAST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: CitycastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("citycast").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        if let Some(access_key) = &self.photos.access_key {
            if access_key.is_empty() {
                return Err(CitycastError::config(
                    "Photo access key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }
        }

        if let Some(api_key) = &self.map.api_key {
            if api_key.is_empty() {
                return Err(CitycastError::config(
                    "Map API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(CitycastError::config(
                "Request timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.photos.refresh_seconds == 0 || self.photos.refresh_seconds > 3600 {
            return Err(CitycastError::config(
                "Photo refresh period must be between 1 and 3600 seconds",
            )
            .into());
        }

        if self.map.zoom == 0 || self.map.zoom > 21 {
            return Err(CitycastError::config("Map zoom must be between 1 and 21").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(CitycastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(CitycastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (label, url) in [
            ("Weather backend", &self.weather.base_url),
            ("Geocoding", &self.geocoding.base_url),
            ("Photo service", &self.photos.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CitycastError::config(format!(
                    "{label} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = CitycastConfig::default();
        assert_eq!(config.weather.base_url, "http://localhost:8000/api");
        assert_eq!(
            config.geocoding.base_url,
            "https://nominatim.openstreetmap.org"
        );
        assert_eq!(config.photos.base_url, "https://api.unsplash.com");
        assert_eq!(config.photos.refresh_seconds, 60);
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.logging.level, "info");
        assert!(config.photos.access_key.is_none());
        assert!(config.map.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = CitycastConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_access_key() {
        let mut config = CitycastConfig::default();
        config.photos.access_key = Some(String::new());
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Photo access key cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = CitycastConfig::default();
        config.logging.level = "chatty".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[rstest]
    #[case(0)]
    #[case(3601)]
    fn test_config_validation_refresh_out_of_range(#[case] refresh: u32) {
        let mut config = CitycastConfig::default();
        config.photos.refresh_seconds = refresh;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Photo refresh period")
        );
    }

    #[rstest]
    #[case(0)]
    #[case(22)]
    fn test_config_validation_zoom_out_of_range(#[case] zoom: u8) {
        let mut config = CitycastConfig::default();
        config.map.zoom = zoom;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_base_url() {
        let mut config = CitycastConfig::default();
        config.weather.base_url = "ftp://weather.internal".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Weather backend base URL")
        );
    }

    #[test]
    fn test_config_path_generation() {
        let path = CitycastConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("citycast"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
