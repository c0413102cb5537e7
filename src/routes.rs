use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    config::Config,
    forecast::openweather::{OpenWeatherClient, WeatherError},
    forecast::summary::WeatherReport,
    preferences::{PreferenceStore, Theme},
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_client: Arc<OpenWeatherClient>,
    pub preferences: Arc<PreferenceStore>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemePayload {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorResponse {
    fn new(error: String, code: &str) -> Self {
        Self {
            error,
            code: code.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// One dashboard search. Every provider-side failure collapses into a
/// single error response naming the underlying message, so the page never
/// renders a half-updated state.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = params.city.trim();
    if city.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "city must not be empty".to_string(),
                "EMPTY_CITY",
            )),
        ));
    }

    match state.weather_client.fetch_dashboard(city).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::error!("weather search for '{}' failed: {}", city, e);
            let (status, code) = match &e {
                WeatherError::CityNotFound(_) => (StatusCode::NOT_FOUND, "CITY_NOT_FOUND"),
                WeatherError::Provider { .. } => (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR"),
                WeatherError::Request(_) => (StatusCode::BAD_GATEWAY, "NETWORK_FAILURE"),
                WeatherError::JsonParsing(_) => (StatusCode::BAD_GATEWAY, "DECODE_FAILURE"),
            };
            Err((status, Json(ErrorResponse::new(e.to_string(), code))))
        }
    }
}

pub async fn get_theme(State(state): State<AppState>) -> Result<Json<ThemePayload>, ApiError> {
    match state.preferences.theme().await {
        Ok(theme) => Ok(Json(ThemePayload { theme })),
        Err(e) => {
            tracing::error!("failed to read theme preference: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string(), "PREFERENCES_ERROR")),
            ))
        }
    }
}

pub async fn put_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemePayload>,
) -> Result<Json<ThemePayload>, ApiError> {
    match state.preferences.set_theme(payload.theme).await {
        Ok(()) => Ok(Json(payload)),
        Err(e) => {
            tracing::error!("failed to save theme preference: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string(), "PREFERENCES_ERROR")),
            ))
        }
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather))
        .route("/theme", get(get_theme))
        .route("/theme", put(put_theme))
        .with_state(state)
}
