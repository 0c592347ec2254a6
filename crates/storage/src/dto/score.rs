use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Difficulty, NewScore};

/// Request payload for submitting a finished game session.
///
/// `kills` and `timeMs` are unsigned, so negative values are rejected at
/// deserialization; `rating` and the player name go through `validate()`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScoreRequest {
    #[validate(custom(function = "validate_player_name"))]
    pub player_name: String,

    pub difficulty: Difficulty,

    #[validate(range(min = 0.0, message = "rating must be non-negative"))]
    pub rating: f64,

    pub kills: u32,

    pub time_ms: u64,
}

impl CreateScoreRequest {
    /// Converts into the store's input shape, trimming surrounding
    /// whitespace from the player name. The store itself never validates.
    pub fn to_new_score(&self) -> NewScore {
        NewScore {
            player_name: self.player_name.trim().to_string(),
            difficulty: self.difficulty,
            rating: self.rating,
            kills: self.kills,
            time_ms: self.time_ms,
        }
    }
}

fn validate_player_name(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        let mut err = validator::ValidationError::new("player_name");
        err.message = Some("playerName is required".into());
        return Err(err);
    }
    Ok(())
}

/// Query parameters for the leaderboard endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    /// Restrict results to one difficulty; omit for all difficulties.
    pub difficulty: Option<Difficulty>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

impl LeaderboardQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}
