//! Screen rendering
//!
//! Three screens compose the application: the home dashboard (weather card,
//! city picker, map, photo) and two static auth forms. Everything is rendered
//! server-side as plain HTML; the auth forms have no bound submit action.

use crate::config::CitycastConfig;
use crate::home::ViewState;
use crate::models::{City, MapCenter, Photo, WeatherSnapshot};

/// Render the home screen from the current view state
#[must_use]
pub fn render_home(state: &ViewState, config: &CitycastConfig) -> String {
    let body = format!(
        r#"<header class="app-header">
  <div class="app-title"><h1>Weather App</h1></div>
  <div class="auth-buttons">
    <a href="/login" class="login-button">Login</a>
    <a href="/register" class="register-button">Register</a>
  </div>
</header>
<div class="app-content">
  <div class="weather-container">
    <h2 class="weather-title">Current Weather</h2>
    <div class="weather-card">
{card}
    </div>
{picker}
  </div>
  <div class="map-container">
{map}
  </div>
  <div class="image-container">
{photo}
  </div>
</div>"#,
        card = weather_card(state.weather.as_ref()),
        picker = city_picker(state.selected),
        map = map_panel(state.map_center.as_ref(), config),
        photo = photo_panel(state.photo.as_ref(), state.selected),
    );
    page("Weather App", &body)
}

/// Render the static login screen
#[must_use]
pub fn render_login() -> String {
    let body = r#"<div class="auth-form-container">
  <h1 class="auth-form-title">Login</h1>
  <form class="auth-form">
    <div class="auth-form-field">
      <label class="auth-form-label" for="email">Email</label>
      <input class="auth-form-input" type="email" id="email">
    </div>
    <div class="auth-form-field">
      <label class="auth-form-label" for="password">Password</label>
      <input class="auth-form-input" type="password" id="password">
    </div>
    <button class="auth-form-button">Login</button>
  </form>
  <p class="auth-form-text">Don't have an account? <a href="/register">Register here</a></p>
  <p class="auth-form-text"><a href="/">Go back to Home</a></p>
</div>"#;
    page("Login", body)
}

/// Render the static register screen
#[must_use]
pub fn render_register() -> String {
    let body = r#"<div class="auth-form-container">
  <h1 class="auth-form-title">Register</h1>
  <form class="auth-form">
    <div class="auth-form-field">
      <label class="auth-form-label" for="name">Name</label>
      <input class="auth-form-input" type="text" id="name">
    </div>
    <div class="auth-form-field">
      <label class="auth-form-label" for="email">Email</label>
      <input class="auth-form-input" type="email" id="email">
    </div>
    <div class="auth-form-field">
      <label class="auth-form-label" for="password">Password</label>
      <input class="auth-form-input" type="password" id="password">
    </div>
    <button class="auth-form-button">Register</button>
  </form>
  <p class="auth-form-text">Already have an account? <a href="/login">Login here</a></p>
  <p class="auth-form-text"><a href="/">Go back to Home</a></p>
</div>"#;
    page("Register", body)
}

/// Render the weather card, or the generic placeholder when no snapshot is
/// present. The placeholder does not distinguish "never fetched", "in flight",
/// and "fetch failed".
fn weather_card(weather: Option<&WeatherSnapshot>) -> String {
    let Some(weather) = weather else {
        return "      <div>Loading...</div>".to_string();
    };

    format!(
        r#"      <h3>{name}</h3>
      <p class="weather-time">{time}</p>
      <div class="weather-details">
        <img src="{icon}" alt="{condition}" class="weather-icon">
        <p class="condition">{condition}</p>
        <p class="temperature">{temp}&deg;C</p>
        <p class="humidity">Humidity: {humidity}%</p>
        <p class="pressure">Pressure: {pressure} mb</p>
        <p class="wind">Wind: {wind} km/h</p>
        <p class="uv">UV Index: {uv}</p>
      </div>"#,
        name = escape_html(&weather.location_name),
        time = escape_html(&weather.last_updated_time()),
        icon = escape_html(&weather.condition_icon),
        condition = escape_html(&weather.condition_text),
        temp = weather.temp_c,
        humidity = weather.humidity,
        pressure = weather.pressure_mb,
        wind = weather.wind_kph,
        uv = weather.uv,
    )
}

/// Render the city picker: the fixed option list plus a clear option
fn city_picker(selected: Option<City>) -> String {
    let mut options = String::from("      <option value=\"\">Select a location</option>\n");
    for option in City::options() {
        let marker = if selected.map(|city| city.key()) == Some(option.value) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "      <option value=\"{}\"{marker}>{}</option>\n",
            option.value, option.label
        ));
    }

    format!(
        r#"    <form class="location-dropdown" method="post" action="/select">
      <select name="city">
{options}      </select>
      <button type="submit">Go</button>
    </form>"#
    )
}

/// Render the map iframe once a center exists and a provider key is
/// configured: centered on the geocoded coordinates with a single marker.
fn map_panel(center: Option<&MapCenter>, config: &CitycastConfig) -> String {
    let (Some(center), Some(api_key)) = (center, config.map.api_key.as_deref()) else {
        return String::new();
    };

    format!(
        r#"    <iframe class="map" src="https://www.google.com/maps/embed/v1/place?key={key}&amp;q={coords}&amp;zoom={zoom}" allowfullscreen></iframe>"#,
        key = escape_html(api_key),
        coords = center.format_coordinates(),
        zoom = config.map.zoom,
    )
}

fn photo_panel(photo: Option<&Photo>, selected: Option<City>) -> String {
    let Some(photo) = photo else {
        return String::new();
    };

    format!(
        r#"    <div class="photo-item">
      <img src="{url}" alt="{alt}" class="photo">
    </div>"#,
        url = escape_html(&photo.url),
        alt = selected.map(|city| city.key()).unwrap_or_default(),
    )
}

/// Shared page shell
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// Minimal HTML escaping for values interpolated into markup
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
