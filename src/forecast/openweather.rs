use chrono::Utc;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::forecast::summary::{build_report, WeatherReport};
use crate::forecast::types::{CurrentConditions, ForecastSeries};

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("city not found: {0}")]
    CityNotFound(String),
    #[error("provider error (HTTP {status}): {message}")]
    Provider { status: StatusCode, message: String },
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
}

pub struct OpenWeatherClient {
    client: Client,
    config: Config,
}

impl OpenWeatherClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("WeatherDashboard/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// One full search: current conditions by city name, then the forecast
    /// series keyed by the resolved coordinates, merged into one report.
    ///
    /// The two calls are sequential because the second depends on the
    /// coordinates resolved by the first.
    pub async fn fetch_dashboard(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let current = self.fetch_current(city).await?;
        let forecast = self
            .fetch_forecast(current.coord.lat, current.coord.lon)
            .await?;
        Ok(build_report(&current, &forecast, Utc::now()))
    }

    pub async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let url = format!(
            "{}{}",
            self.config.openweather_base_url, self.config.openweather_current_path
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", &self.config.openweather_api_key),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if status == StatusCode::NOT_FOUND {
                return Err(WeatherError::CityNotFound(format!(
                    "no match for '{city}': {message}"
                )));
            }
            return Err(WeatherError::Provider { status, message });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The forecast call carries no status check of its own: an error body
    /// fails JSON decoding and surfaces through the same search error.
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<ForecastSeries, WeatherError> {
        let url = format!(
            "{}{}",
            self.config.openweather_base_url, self.config.openweather_forecast_path
        );

        let body = self
            .client
            .get(&url)
            .query(&[
                ("lat", &lat.to_string()),
                ("lon", &lon.to_string()),
                ("appid", &self.config.openweather_api_key),
                ("units", &"metric".to_string()),
            ])
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
