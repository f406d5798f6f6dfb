use std::net::SocketAddr;
use axum::Server;
use tracing::{error, info};
use bookshelf::catalog::controller::router;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::core::repository::RepositoryStore;
use bookshelf::utils::logs::setup_tracing;

const SERVICE_NAME: &str = "book";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if std::env::args().skip(1).any(|arg| arg == "--version") {
        println!("Version {}", Configuration::new(SERVICE_NAME).version);
        return Ok(());
    }

    // tracing is not up yet, so a bad setting surfaces as the process error.
    let config = Configuration::from_env(SERVICE_NAME)?;

    setup_tracing(config.log_level.as_str());

    let addr: SocketAddr = config.bind_address().parse().map_err(|err| {
        error!("invalid listen address {}: {}", config.bind_address(), err);
        err
    })?;
    let catalog_service = create_catalog_service(&config, RepositoryStore::Memory);
    let app = router(AppState::new(config, catalog_service));

    info!("catalog listening on {}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
    }
}
