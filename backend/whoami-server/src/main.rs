use whoami_server::{AppState, Cli, Commands, ServerError, ServerResult, build_router, logger};

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let args = match Cli::parse().command {
        Some(Commands::Serve(args)) => args,
        None => Default::default(),
    };
    let config = args.load_config()?;

    let log_file = config.log_file_path()?;
    logger::initialize(&config.logging, log_file.as_deref())?;

    info!("Starting user-service v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let addr = config.bind_addr();
    let listener_error = |source: std::io::Error| ServerError::Listener {
        addr: addr.clone(),
        source,
    };

    let listener = TcpListener::bind(&addr).await.map_err(listener_error)?;
    info!("Listening on {}", listener.local_addr().map_err(listener_error)?);

    axum::serve(listener, build_router(AppState::from_config(&config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(listener_error)?;

    info!("Goodbye!");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
