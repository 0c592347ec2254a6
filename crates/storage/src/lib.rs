pub mod dto;
pub mod models;
pub mod store;

pub use models::{Difficulty, NewScore, Score};
pub use store::ScoreStore;
