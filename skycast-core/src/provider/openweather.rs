use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{FetchError, WeatherSnapshot};

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!("fetching current conditions for {city:?}");

        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    feels_like: f64,
    temp_max: f64,
    temp_min: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// Parse an OpenWeather current-conditions body into a snapshot.
///
/// Pure over the body text; shape violations come back as
/// [`FetchError::Malformed`] rather than a fault at field access.
fn parse_current(body: &str) -> Result<WeatherSnapshot, FetchError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| FetchError::Malformed("weather array is empty".to_string()))?;

    let observed_at = unix_to_utc(parsed.dt).unwrap_or_else(Utc::now);

    Ok(WeatherSnapshot {
        city: parsed.name,
        condition: condition.main.clone(),
        description: condition.description.clone(),
        icon: condition.icon.clone(),
        feels_like_c: parsed.main.feels_like,
        temp_max_c: parsed.main.temp_max,
        temp_min_c: parsed.main.temp_min,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        observed_at,
    })
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Provider error bodies are arbitrary text; back off to a char boundary
    // so the cut never lands inside a multi-byte character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
