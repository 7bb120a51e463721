pub mod config;
pub mod fruit;
pub mod game;
pub mod input;
pub mod routes;
pub mod snake;
pub mod state;
pub mod static_assets;
pub mod types;

use state::AppState;

/// Runs the HTTP shell on `port` until the process is stopped.
pub async fn run_server(port: u16, app_state: AppState) -> color_eyre::Result<()> {
    let app = routes::routes(app_state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(port, "snake server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
