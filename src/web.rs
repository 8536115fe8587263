//! HTTP routing and server
//!
//! Maps three paths to the three screens (`/`, `/login`, `/register`) plus the
//! city picker form target (`POST /select`). No guards, no nested routes.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Form, Router,
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CitycastConfig;
use crate::home::HomeController;
use crate::models::City;
use crate::screens;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    controller: Arc<Mutex<HomeController>>,
    config: Arc<CitycastConfig>,
}

impl AppState {
    /// Build the state, including the home controller and its clients
    pub fn new(config: CitycastConfig) -> Result<Self> {
        let controller = HomeController::new(&config)?;
        Ok(Self {
            controller: Arc::new(Mutex::new(controller)),
            config: Arc::new(config),
        })
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/select", post(select_city))
        .route("/login", get(login))
        .route("/register", get(register))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn run(config: CitycastConfig) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);
    axum::serve(listener, app)
        .await
        .with_context(|| "Server error")?;
    Ok(())
}

async fn home(State(state): State<AppState>) -> Html<String> {
    let view = state.controller.lock().await.state().await;
    Html(screens::render_home(&view, &state.config))
}

#[derive(Debug, Deserialize)]
struct SelectForm {
    #[serde(default)]
    city: String,
}

/// Apply the picker selection: an empty value clears the selection, an
/// unknown key is logged and ignored.
async fn select_city(State(state): State<AppState>, Form(form): Form<SelectForm>) -> Redirect {
    if form.city.is_empty() {
        state.controller.lock().await.select(None).await;
    } else {
        match City::from_key(&form.city) {
            Some(city) => state.controller.lock().await.select(Some(city)).await,
            None => warn!("Ignoring unknown city key '{}'", form.city),
        }
    }
    Redirect::to("/")
}

async fn login() -> Html<String> {
    Html(screens::render_login())
}

async fn register() -> Html<String> {
    Html(screens::render_register())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auth_screens_render() {
        assert!(login().await.0.contains("Login"));
        assert!(register().await.0.contains("Register"));
    }

    #[tokio::test]
    async fn test_home_renders_placeholder_initially() {
        let state = AppState::new(CitycastConfig::default()).unwrap();
        let html = home(State(state)).await.0;
        assert!(html.contains("Loading..."));
    }

    #[tokio::test]
    async fn test_select_unknown_city_is_ignored() {
        let state = AppState::new(CitycastConfig::default()).unwrap();
        select_city(
            State(state.clone()),
            Form(SelectForm {
                city: "paris".to_string(),
            }),
        )
        .await;

        let view = state.controller.lock().await.state().await;
        assert!(view.selected.is_none());
    }

    #[tokio::test]
    async fn test_select_empty_clears_selection() {
        let state = AppState::new(CitycastConfig::default()).unwrap();
        select_city(
            State(state.clone()),
            Form(SelectForm {
                city: String::new(),
            }),
        )
        .await;

        let view = state.controller.lock().await.state().await;
        assert!(view.selected.is_none());
    }
}
