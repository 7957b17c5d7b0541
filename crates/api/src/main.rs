//! API server entry point.

use std::sync::Arc;

use api::{AppState, Config, Dispatcher};
use auth::{InMemoryTokenVerifier, JwtTokenVerifier, TokenVerifier};
use record_store::{InMemoryRecordStore, PostgresRecordStore, RecordStore};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn build_store(config: &Config) -> Arc<dyn RecordStore> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresRecordStore::connect(url)
                .await
                .expect("failed to connect to database");
            tracing::info!("using PostgreSQL record store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory only");
            Arc::new(InMemoryRecordStore::new())
        }
    }
}

fn build_verifier(config: &Config) -> Arc<dyn TokenVerifier> {
    match &config.jwt_secret {
        Some(secret) => Arc::new(JwtTokenVerifier::new(secret.as_bytes())),
        None => {
            tracing::warn!("JWT_SECRET not set, every bearer token will be rejected");
            Arc::new(InMemoryTokenVerifier::new())
        }
    }
}

#[tokio::main]
async fn main() {
    // 1. Load configuration (.env first, if present)
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // 2. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    tracing::debug!(?config, "configuration loaded");

    // 3. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 4. Wire collaborators into the dispatcher
    let store = build_store(&config).await;
    let verifier = build_verifier(&config);
    let dispatcher = Dispatcher::from_config(&config, store, verifier);

    // 5. Build the application
    let state = AppState::new(dispatcher, metrics_handle).with_body_limit(config.max_body_bytes);
    let app = api::create_app(state);

    // 6. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
