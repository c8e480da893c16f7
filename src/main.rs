//! FocusBoard - A state-managed HTTP server for a focus dashboard
//!
//! This is the main entry point for the focusboard application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use focusboard::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::spawn_countdown,
    timer::TokioScheduler,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focusboard={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focusboard server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, dark={}, empty_checklist={}",
          config.host, config.port, config.dark, config.empty);

    // The countdown task owns the timer and its tick source
    let (countdown, countdown_task) = spawn_countdown(TokioScheduler::new());

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        countdown.clone(),
        config.initial_checklist(),
        config.initial_theme(),
    ));

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /timer           - Current countdown");
    info!("  POST   /timer/start     - Start the countdown");
    info!("  POST   /timer/pause     - Pause the countdown");
    info!("  POST   /timer/toggle    - Start or pause");
    info!("  POST   /timer/reset     - Refill the current phase");
    info!("  GET    /tasks           - List tasks and progress");
    info!("  POST   /tasks           - Add a task");
    info!("  POST   /tasks/:id/toggle - Toggle a task");
    info!("  DELETE /tasks/:id       - Remove a task");
    info!("  GET    /theme           - Current theme");
    info!("  POST   /theme/toggle    - Switch light/dark");
    info!("  GET    /status          - Dashboard overview");
    info!("  GET    /health          - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Release the tick source before exiting
    countdown.shutdown();
    if let Err(e) = countdown_task.await {
        tracing::error!("Countdown task ended abnormally: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
