use crate::{
    config::Config,
    model::{CurrentConditions, ForecastDay},
    provider::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failure modes of a weather lookup.
///
/// `Api` carries the service's own message and is shown to the user verbatim
/// ("city not found" reads better than a status line). `Network` and `Parse`
/// are diagnostics and stay out of user-facing output.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("request to weather service failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed weather service response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Remote source of weather data.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Current conditions for a city.
    async fn current(&self, city: &str) -> Result<CurrentConditions, FetchError>;

    /// Daily forecast window for a city. Failures degrade to an empty list;
    /// this never propagates an error.
    async fn forecast(&self, city: &str) -> Vec<ForecastDay>;
}

/// Construct the weather source from config.
///
/// A missing API key is passed through as an empty credential: the service
/// rejects it and the rejection surfaces as [`FetchError::Api`].
pub fn source_from_config(config: &Config) -> Box<dyn WeatherSource> {
    let api_key = config.resolved_api_key().unwrap_or_else(|| {
        log::warn!("no API key configured; the weather service will reject requests");
        String::new()
    });

    Box::new(OpenWeatherClient::new(api_key))
}
