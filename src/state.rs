use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::config::GridSize;
use crate::game::GameState;

/// Shared handle to the single live game session.
///
/// Every handler holds the lock for the duration of one core operation, so
/// a whole move commits atomically even under concurrent connections.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<GameState>>,
}

impl AppState {
    /// Creates the shared state with a fresh session.
    #[must_use]
    pub fn new(bounds: GridSize, max_fruits: usize) -> Self {
        Self::with_session(GameState::new(bounds, max_fruits))
    }

    /// Wraps an existing session; used by tests to inject seeded state.
    #[must_use]
    pub fn with_session(session: GameState) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Locks and returns the session.
    pub async fn session(&self) -> MutexGuard<'_, GameState> {
        self.session.lock().await
    }
}
