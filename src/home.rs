//! Home view orchestration
//!
//! The home view owns all reactive state and drives the side-effecting
//! fetches. A single "location changed" event fans out to two independent
//! workflows: the weather workflow (fetch current conditions, then geocode
//! the returned location name to recenter the map) and the photo workflow
//! (an immediate fetch plus a fixed-period refresh loop). Both workflows are
//! cancelled and restarted on the next selection change.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::api::{self, GeocodeClient, PhotoClient, WeatherClient};
use crate::config::CitycastConfig;
use crate::models::{City, MapCenter, Photo, WeatherSnapshot};

/// View state owned by the home screen
///
/// All fields are ephemeral, last-write-wins view state with lifetime bounded
/// by the controller. Weather, map center, and photo are never cleared on a
/// selection change; stale values persist until the next successful fetch.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// The city key driving all fetches
    pub selected: Option<City>,
    /// Most recent weather snapshot
    pub weather: Option<WeatherSnapshot>,
    /// Most recent geocoded map center
    pub map_center: Option<MapCenter>,
    /// Most recent location photo
    pub photo: Option<Photo>,
}

type SharedState = Arc<RwLock<ViewState>>;

/// Orchestrator for the home view
pub struct HomeController {
    state: SharedState,
    weather_client: Arc<WeatherClient>,
    geocode_client: Arc<GeocodeClient>,
    photo_client: Arc<PhotoClient>,
    refresh_interval: Duration,
    weather_task: Option<JoinHandle<()>>,
    photo_task: Option<JoinHandle<()>>,
}

impl HomeController {
    /// Create a controller with clients built from configuration
    pub fn new(config: &CitycastConfig) -> Result<Self> {
        let client = api::build_http_client(Duration::from_secs(
            config.weather.timeout_seconds.into(),
        ))?;

        Ok(Self {
            state: Arc::new(RwLock::new(ViewState::default())),
            weather_client: Arc::new(WeatherClient::new(
                client.clone(),
                &config.weather.base_url,
            )),
            geocode_client: Arc::new(GeocodeClient::new(
                client.clone(),
                &config.geocoding.base_url,
            )),
            photo_client: Arc::new(PhotoClient::new(
                client,
                &config.photos.base_url,
                config.photos.access_key.clone(),
            )),
            refresh_interval: Duration::from_secs(config.photos.refresh_seconds.into()),
            weather_task: None,
            photo_task: None,
        })
    }

    /// Override the configured photo refresh period
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Snapshot of the current view state
    pub async fn state(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Apply a selection change event.
    ///
    /// The running workflows are cancelled unconditionally; a `Some` selection
    /// restarts both, a `None` selection halts all fetching while leaving the
    /// previously displayed weather/map/photo state untouched.
    pub async fn select(&mut self, city: Option<City>) {
        self.cancel_workflows();
        self.state.write().await.selected = city;

        let Some(city) = city else {
            info!("Selection cleared; weather and photo fetching halted");
            return;
        };
        info!(city = city.key(), "City selected");

        let state = Arc::clone(&self.state);
        let weather = Arc::clone(&self.weather_client);
        let geocode = Arc::clone(&self.geocode_client);
        self.weather_task = Some(tokio::spawn(async move {
            run_weather_workflow(state, weather, geocode, city).await;
        }));

        let state = Arc::clone(&self.state);
        let photos = Arc::clone(&self.photo_client);
        let period = self.refresh_interval;
        self.photo_task = Some(tokio::spawn(async move {
            run_photo_loop(state, photos, period).await;
        }));
    }

    /// Tear down the view: cancel the photo timer and any in-flight workflow
    pub fn shutdown(&mut self) {
        self.cancel_workflows();
    }

    // Called on every selection change and on teardown; no code path leaves
    // two photo timers active.
    fn cancel_workflows(&mut self) {
        if let Some(task) = self.weather_task.take() {
            task.abort();
        }
        if let Some(task) = self.photo_task.take() {
            task.abort();
        }
    }
}

impl Drop for HomeController {
    fn drop(&mut self) {
        self.cancel_workflows();
    }
}

/// Fetch weather, then geocode the returned location name for the map.
///
/// The geocode call is strictly sequenced after the weather fetch. Failures
/// are logged and leave the prior weather/map state untouched.
async fn run_weather_workflow(
    state: SharedState,
    weather: Arc<WeatherClient>,
    geocode: Arc<GeocodeClient>,
    city: City,
) {
    let snapshot = match weather.fetch(city).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Weather fetch for '{}' failed: {e:#}", city.key());
            return;
        }
    };

    let location_name = snapshot.location_name.clone();
    state.write().await.weather = Some(snapshot);
    debug!(city = city.key(), "Weather snapshot replaced");

    match geocode.search(&location_name).await {
        Ok(Some(center)) => {
            debug!("Map centered on {}", center.format_coordinates());
            state.write().await.map_center = Some(center);
        }
        Ok(None) => debug!(
            "Geocoder returned no results for '{}'; map center unchanged",
            location_name
        ),
        Err(e) => warn!("Geocoding '{}' failed: {e:#}", location_name),
    }
}

/// Photo refresh loop: one immediate fetch, then one fetch per period.
///
/// Each tick reads the selection current at tick time, not the value present
/// when the loop was armed.
async fn run_photo_loop(state: SharedState, photos: Arc<PhotoClient>, period: Duration) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // The first tick completes immediately.
        ticker.tick().await;
        fetch_photo(&state, &photos).await;
    }
}

async fn fetch_photo(state: &SharedState, photos: &PhotoClient) {
    let Some(city) = state.read().await.selected else {
        debug!("No selection at photo tick; skipping fetch");
        return;
    };

    match photos.random(city.key()).await {
        Ok(photo) => {
            debug!(city = city.key(), "Photo replaced");
            state.write().await.photo = Some(photo);
        }
        Err(e) => warn!("Photo fetch for '{}' failed: {e:#}", city.key()),
    }
}
