use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The last successful answer from the weather provider.
///
/// Present only between a successful fetch and the next empty or failed
/// debounced query; the frontend holds `Option<WeatherSnapshot>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Location name as resolved by the provider, not the raw query text.
    pub city: String,
    /// Condition keyword, e.g. "Rain" or "Clear". Drives backdrop selection.
    pub condition: String,
    /// Human-readable condition, e.g. "light rain".
    pub description: String,
    /// Provider icon code, e.g. "10d".
    pub icon: String,
    pub feels_like_c: f64,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// URL of the provider-hosted icon image for this snapshot.
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_embeds_icon_code() {
        let snap = WeatherSnapshot {
            city: "London".to_string(),
            condition: "Rain".to_string(),
            description: "light rain".to_string(),
            icon: "10d".to_string(),
            feels_like_c: 11.2,
            temp_max_c: 13.0,
            temp_min_c: 9.4,
            humidity_pct: 81,
            wind_speed_mps: 4.1,
            observed_at: Utc::now(),
        };

        assert_eq!(snap.icon_url(), "https://openweathermap.org/img/wn/10d@2x.png");
    }
}
