use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_dashboard_server::config::Config;
use weather_dashboard_server::forecast::openweather::OpenWeatherClient;
use weather_dashboard_server::preferences::PreferenceStore;
use weather_dashboard_server::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "weather_dashboard_server=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Theme preference store, read by the page at startup
    let pool = sqlx::SqlitePool::connect(&config.database_url).await?;
    let preferences = Arc::new(PreferenceStore::new(pool));
    preferences.init_tables().await?;

    let weather_client = Arc::new(OpenWeatherClient::new(config.clone()));

    let bind_address = config.bind_address.clone();
    let state = AppState {
        config: Arc::new(config),
        weather_client,
        preferences,
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server starting on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
