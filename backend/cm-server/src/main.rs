use cm_server::error::Result;
use cm_server::{AppState, build_router, identity, logger};

use cm_config::Config;
use cm_core::{CustomerService, CustomerStore, CustomerValidator, IdentityVerifier};
use cm_db::CustomerRepository;
use cm_github::GitHubIdentityVerifier;

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = config.log_dir()?;
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = cm_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let verifier: Arc<dyn IdentityVerifier> = Arc::new(GitHubIdentityVerifier::new(
        identity::github_settings(&config.github),
        identity::retry_config(&config.retry),
    )?);
    let validator = CustomerValidator::new(verifier, identity::check_timeout(&config.github));
    let store: Arc<dyn CustomerStore> = Arc::new(CustomerRepository::new(pool.clone()));
    let service = Arc::new(CustomerService::new(validator, store));

    let app = build_router(AppState::new(service, pool.clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Port 0 resolves here
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
