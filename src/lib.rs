//! `Citycast` - City weather dashboard
//!
//! This library provides the core functionality for the dashboard: current
//! weather lookup for a fixed set of cities, geocoding for map centering,
//! and a rotating location photo, served as a small HTML application.

pub mod api;
pub mod config;
pub mod error;
pub mod home;
pub mod models;
pub mod screens;
pub mod web;

// Re-export core types for public API
pub use api::{GeocodeClient, PhotoClient, WeatherClient};
pub use config::CitycastConfig;
pub use error::CitycastError;
pub use home::{HomeController, ViewState};
pub use models::{City, MapCenter, Photo, WeatherSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CitycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
