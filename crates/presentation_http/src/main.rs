//! AirWise HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::{
    AdvisoryService, AirQualityPort, AnalysisService, EnvironmentService, HealthService,
    InferencePort, WeatherPort,
};
use infrastructure::{
    AirQualityAdapter, AppConfig, GroqInferenceAdapter, WeatherAdapter, init_tracing,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can be honoured
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.telemetry, config.server.log_format)?;

    info!("AirWise v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    for warning in config.warnings() {
        warn!("{warning}");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        "Configuration loaded"
    );

    // Initialize adapters
    let air_quality: Arc<dyn AirQualityPort> = Arc::new(
        AirQualityAdapter::with_config(config.air_quality.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize air-quality client: {e}"))?,
    );
    let weather: Arc<dyn WeatherPort> = Arc::new(
        WeatherAdapter::with_config(config.weather.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?,
    );
    let inference: Arc<dyn InferencePort> = Arc::new(
        GroqInferenceAdapter::new(config.inference.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?,
    );

    // Initialize services
    let analysis_service = AnalysisService::new(
        EnvironmentService::new(Arc::clone(&air_quality), Arc::clone(&weather)),
        AdvisoryService::new(Arc::clone(&inference)),
    );
    let health_service = HealthService::new(air_quality, weather, inference)
        .with_config(config.health.to_health_config());

    let state = AppState::new(analysis_service, health_service)
        .with_coordinate_bounds(config.server.enforce_coordinate_bounds);

    let app = routes::create_app(state, &config.server);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
            let _ = signalled_tx.send(());
        })
        .into_future();

    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            tokio::time::sleep(shutdown_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => {
            warn!("Graceful shutdown timed out after {:?}, dropping open connections", shutdown_timeout);
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
