use axum::{
    Router,
    routing::{get, post},
};
use storage::ScoreStore;

use super::handlers::{create_score, get_leaderboard};

pub fn routes() -> Router<ScoreStore> {
    Router::new()
        .route("/api/scores", post(create_score))
        .route("/api/scores/leaderboard", get(get_leaderboard))
}
