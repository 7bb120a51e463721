use serde::{Deserialize, Serialize};

use crate::config::TILE_SIZE_PX;
use crate::snake::Position;

/// A position expressed in the client's pixel coordinates.
///
/// The core works in tile space; conversion happens only here, at the
/// shell boundary.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    /// Converts a tile-space position to pixel space.
    #[must_use]
    pub fn from_tile(position: Position) -> Self {
        Self {
            x: position.x * i32::from(TILE_SIZE_PX),
            y: position.y * i32::from(TILE_SIZE_PX),
        }
    }
}

/// POST body for `/move`.
///
/// The direction arrives as a raw string so unknown names can be treated
/// as "no movement this tick" instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: String,
}

/// Response for `/move`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub game_over: bool,
    pub won: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PixelPosition>,
}

/// Response for `/body`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyResponse {
    pub segments: Vec<PixelPosition>,
    pub bulge_index: Option<usize>,
}

/// POST body for `/fruits/count`.
#[derive(Debug, Deserialize)]
pub struct FruitCountRequest {
    pub count: i64,
}

/// Response for `/fruits/count`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitCountResponse {
    pub max_fruits: usize,
}

/// Response for `/reset`.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
}

/// Response for `/game-over`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverResponse {
    pub game_over: bool,
}
