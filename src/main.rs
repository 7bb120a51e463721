use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snake_server::config::{DEFAULT_FRUIT_COUNT, DEFAULT_PORT, board_grid, clamp_fruit_count};
use snake_server::state::AppState;

#[derive(Debug, Parser)]
struct Cli {
    /// Port the HTTP shell listens on.
    #[arg(long, env = "SNAKE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Fruits kept on the board, clamped to 1..=20.
    #[arg(long, default_value_t = DEFAULT_FRUIT_COUNT as i64)]
    fruits: i64,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snake_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let bounds = board_grid();
    let fruits = clamp_fruit_count(cli.fruits);

    tracing::info!(
        width = bounds.width,
        height = bounds.height,
        fruits,
        "starting game session"
    );

    let app_state = AppState::new(bounds, fruits);
    snake_server::run_server(cli.port, app_state).await
}
