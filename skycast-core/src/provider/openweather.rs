use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    forecast::{Sample, aggregate_daily},
    icons::ConditionIcon,
    model::{CurrentConditions, ForecastDay},
};

use super::{FetchError, WeatherSource};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    /// Same client against a different host, for tests against a local server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    fn weather_url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        let res = self
            .http
            .get(self.weather_url())
            .query(&[("q", city), ("units", "metric"), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let icon = ConditionIcon::from_code(parsed.weather.first().map(|w| w.icon.as_str()));
        let observation_time = parsed
            .dt
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        Ok(CurrentConditions {
            temperature_c: parsed.main.temp.floor() as i32,
            location_name: parsed.name,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            icon,
            observation_time,
        })
    }

    // TODO: point this at /data/2.5/forecast with units=metric; against the
    // plain weather endpoint the payload has no `list` field and every lookup
    // degrades to an empty window.
    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastDay>, FetchError> {
        let res = self
            .http
            .get(self.weather_url())
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        let samples: Vec<Sample> = parsed
            .list
            .into_iter()
            .map(|entry| Sample {
                timestamp: entry.dt_txt,
                temperature: entry.main.temp,
                icon_code: entry.weather.into_iter().next().map(|w| w.icon),
            })
            .collect();

        Ok(aggregate_daily(&samples))
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        self.fetch_current(city).await
    }

    async fn forecast(&self, city: &str) -> Vec<ForecastDay> {
        match self.fetch_forecast(city).await {
            Ok(days) => days,
            Err(err) => {
                log::warn!("forecast lookup for {city:?} failed: {err}");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwSampleMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwSampleMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

fn api_error(status: StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| truncate_body(body));

    FetchError::Api { status, message }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
