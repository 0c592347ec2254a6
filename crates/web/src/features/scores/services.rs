use storage::{
    Score, ScoreStore,
    dto::score::{CreateScoreRequest, LeaderboardQuery},
};

/// Record a validated score, returning it with id and timestamp stamped.
pub fn create_score(store: &ScoreStore, req: &CreateScoreRequest) -> Score {
    store.add(req.to_new_score())
}

/// Ranked scores for the requested difficulty and limit.
pub fn leaderboard(store: &ScoreStore, query: &LeaderboardQuery) -> Vec<Score> {
    store.leaderboard(query.difficulty, query.limit)
}
