use axum::{Router, routing::get};
use storage::ScoreStore;

use super::handlers::health;

pub fn routes() -> Router<ScoreStore> {
    Router::new().route("/health", get(health))
}
