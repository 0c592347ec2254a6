pub mod score;

pub use score::{Difficulty, NewScore, Score};
