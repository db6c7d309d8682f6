use crate::{FetchError, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of current weather conditions.
///
/// Object-safe so the frontend can hold `Arc<dyn WeatherProvider>` and tests
/// can substitute a canned implementation.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city name, metric units.
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the production provider from a resolved API key.
pub fn provider_with_key(api_key: String) -> Arc<dyn WeatherProvider> {
    Arc::new(OpenWeatherProvider::new(api_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_with_key_builds_openweather() {
        let provider = provider_with_key("KEY".to_string());
        assert!(format!("{provider:?}").contains("OpenWeatherProvider"));
    }
}
