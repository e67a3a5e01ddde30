//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Condition icon classification
//! - Daily aggregation of forecast samples
//! - The OpenWeather client and the search orchestration around it
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod forecast;
pub mod icons;
pub mod model;
pub mod provider;
pub mod search;

pub use config::{Config, DEFAULT_CITY};
pub use forecast::{Sample, aggregate_daily};
pub use icons::ConditionIcon;
pub use model::{CurrentConditions, ForecastDay};
pub use provider::{FetchError, WeatherSource, openweather::OpenWeatherClient, source_from_config};
pub use search::{SearchOutcome, Searcher};
