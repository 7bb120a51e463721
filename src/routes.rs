use axum::routing::{get, post};
use axum::{Json, Router, extract::State};

use crate::game::StepOutcome;
use crate::input::Direction;
use crate::state::AppState;
use crate::types::{
    BodyResponse, FruitCountRequest, FruitCountResponse, GameOverResponse, MoveRequest,
    MoveResponse, PixelPosition, ResetResponse,
};

/// Builds the transport shell: one route per logical game operation plus
/// the embedded client assets.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(crate::static_assets::serve_index))
        .route("/position", get(get_position))
        .route("/body", get(get_body))
        .route("/fruits", get(get_fruits))
        .route("/move", post(submit_move))
        .route("/fruits/spawn", post(spawn_fruit))
        .route("/fruits/count", post(set_fruit_count))
        .route("/reset", post(reset_session))
        .route("/game-over", get(get_game_over))
        .route("/{*path}", get(crate::static_assets::serve_static_file))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /position
///
/// Returns the head in pixel coordinates.
async fn get_position(State(state): State<AppState>) -> Json<PixelPosition> {
    let session = state.session().await;
    Json(PixelPosition::from_tile(session.snake.head()))
}

/// GET /body
///
/// Returns the trailing segments plus the bulge marker.
async fn get_body(State(state): State<AppState>) -> Json<BodyResponse> {
    let session = state.session().await;
    Json(BodyResponse {
        segments: session
            .snake
            .segments()
            .map(|segment| PixelPosition::from_tile(*segment))
            .collect(),
        bulge_index: session.snake.bulge_index(),
    })
}

/// GET /fruits
///
/// Returns the active fruit tiles in pixel coordinates.
async fn get_fruits(State(state): State<AppState>) -> Json<Vec<PixelPosition>> {
    let session = state.session().await;
    Json(
        session
            .fruits
            .iter()
            .map(|fruit| PixelPosition::from_tile(*fruit))
            .collect(),
    )
}

/// POST /move
///
/// Submits a direction intent and advances the game one step.
///
/// An unrecognized direction name moves nothing and reports the current
/// state, including the unchanged head position.
async fn submit_move(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let mut session = state.session().await;

    let Some(direction) = Direction::from_name(&request.direction) else {
        tracing::debug!(direction = %request.direction, "ignoring unrecognized direction");
        let ended = session.status.ended();
        return Json(MoveResponse {
            game_over: ended.is_some(),
            won: ended.unwrap_or(false),
            position: Some(PixelPosition::from_tile(session.snake.head())),
        });
    };

    let outcome = session.step(direction);
    let response = match outcome {
        StepOutcome::Moved => MoveResponse {
            game_over: false,
            won: false,
            position: Some(PixelPosition::from_tile(session.snake.head())),
        },
        StepOutcome::GameOver { won } => {
            tracing::info!(won, direction = direction.as_name(), "session ended");
            MoveResponse {
                game_over: true,
                won,
                position: None,
            }
        }
        StepOutcome::AlreadyOver { won } => MoveResponse {
            game_over: true,
            won,
            position: None,
        },
    };

    Json(response)
}

/// POST /fruits/spawn
///
/// Manual single spawn; responds `null` when the board is full.
async fn spawn_fruit(State(state): State<AppState>) -> Json<Option<PixelPosition>> {
    let mut session = state.session().await;
    let spawned = session.spawn_fruit();

    tracing::debug!(spawned = spawned.is_some(), "manual fruit spawn");
    Json(spawned.map(PixelPosition::from_tile))
}

/// POST /fruits/count
///
/// Clamps and stores the fruit count used by the next reset.
async fn set_fruit_count(
    State(state): State<AppState>,
    Json(request): Json<FruitCountRequest>,
) -> Json<FruitCountResponse> {
    let mut session = state.session().await;
    let max_fruits = session.set_max_fruits(request.count);

    tracing::info!(requested = request.count, max_fruits, "fruit count updated");
    Json(FruitCountResponse { max_fruits })
}

/// POST /reset
///
/// Rebuilds the session from its initial layout.
async fn reset_session(State(state): State<AppState>) -> Json<ResetResponse> {
    let mut session = state.session().await;
    session.reset();

    tracing::info!(fruits = session.fruits.len(), "session reset");
    Json(ResetResponse { success: true })
}

/// GET /game-over
///
/// Reports whether the session has reached a terminal state.
async fn get_game_over(State(state): State<AppState>) -> Json<GameOverResponse> {
    let session = state.session().await;
    Json(GameOverResponse {
        game_over: session.status.is_terminal(),
    })
}
