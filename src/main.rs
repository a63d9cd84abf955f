use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use quizstore::config::Config;
use quizstore::error::StartupError;
use quizstore::schema;
use quizstore::store::PgStore;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(StartupError::Config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting quizstore ({} deployment)", config.deployment);

    let connect_options = config
        .database
        .connect_options()
        .map_err(|e| StartupError::Config(format!("Invalid database settings: {e}")))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout)
        .connect_lazy_with(connect_options);
    let store = Arc::new(PgStore::new(pool));

    schema::check_connection(store.as_ref()).await?;
    schema::initialize(store.as_ref(), &config.deployment.tables()).await?;

    let addr = SocketAddr::new(config.host, config.port);
    let app = quizstore::build_app(store, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
