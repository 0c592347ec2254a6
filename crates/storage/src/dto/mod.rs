pub mod score;

pub use score::{CreateScoreRequest, LeaderboardQuery};
