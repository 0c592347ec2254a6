use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Game difficulty, serialized as a lowercase string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A recorded game-session result.
///
/// `id` and `created_at` are assigned by the store at insertion time and are
/// immutable afterwards. Wire names are camelCase to match the game client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: i64,
    pub player_name: String,
    pub difficulty: Difficulty,
    pub rating: f64,
    pub kills: u32,
    pub time_ms: u64,
    /// Millisecond epoch timestamp, stamped by the store.
    pub created_at: i64,
}

/// Caller-supplied fields of a score, before the store stamps identity.
#[derive(Debug, Clone)]
pub struct NewScore {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub rating: f64,
    pub kills: u32,
    pub time_ms: u64,
}
