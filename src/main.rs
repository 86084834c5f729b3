use std::sync::Arc;

use flutterly_server::{build_app, config::Config, logging, scripts::ProcessScriptRunner, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_exe_dir()?;
    let bind_socket = config.bind_socket;
    let state = AppState::new(config, Arc::new(ProcessScriptRunner::new()));
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!("flutterly server listening on {bind_socket}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
