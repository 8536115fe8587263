//! Data models for the Citycast application

pub mod city;
pub mod map;
pub mod photo;
pub mod weather;

pub use city::{City, CityOption};
pub use map::MapCenter;
pub use photo::Photo;
pub use weather::WeatherSnapshot;
