use std::cmp::Ordering;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::models::{Difficulty, NewScore, Score};

/// Fallback when a caller passes a non-positive limit. Handlers already
/// reject those, so this is defense in depth rather than a reachable path.
pub const DEFAULT_LIMIT: usize = 20;

/// In-memory, append-only collection of recorded scores.
///
/// The store owns the authoritative data and the identity counter behind a
/// single reader/writer lock: `add` takes the write half, `leaderboard` the
/// read half, so reads never block each other and never observe a
/// half-stamped score. Cloning the handle shares the same underlying state,
/// mirroring how a pooled database handle is passed around.
///
/// The store trusts its caller: all input validation happens in the web
/// layer before either method is invoked, and neither method can fail.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    next_id: i64,
    scores: Vec<Score>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            next_id: 1,
            scores: Vec::new(),
        }
    }
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score, stamping its identity and creation timestamp.
    ///
    /// Identity assignment and the append happen under one exclusive lock
    /// acquisition, so ids are unique and strictly increasing in insertion
    /// order, and `created_at` is non-decreasing with respect to id.
    pub fn add(&self, new: NewScore) -> Score {
        let mut inner = self.inner.write();

        let score = Score {
            id: inner.next_id,
            player_name: new.player_name,
            difficulty: new.difficulty,
            rating: new.rating,
            kills: new.kills,
            time_ms: new.time_ms,
            created_at: Utc::now().timestamp_millis(),
        };
        inner.next_id += 1;
        inner.scores.push(score.clone());

        score
    }

    /// Returns the top scores, optionally restricted to one difficulty,
    /// ranked best-first by rating, kills, completion time, and insertion
    /// order, truncated to `limit` entries. Non-positive limits fall back
    /// to [`DEFAULT_LIMIT`].
    ///
    /// Takes only the shared half of the lock and returns clones; the
    /// stored collection is never reordered or otherwise mutated by reads.
    pub fn leaderboard(&self, difficulty: Option<Difficulty>, limit: i64) -> Vec<Score> {
        let limit = if limit <= 0 {
            DEFAULT_LIMIT
        } else {
            limit as usize
        };

        let inner = self.inner.read();

        let mut ranked: Vec<Score> = inner
            .scores
            .iter()
            .filter(|score| difficulty.is_none_or(|d| score.difficulty == d))
            .cloned()
            .collect();

        ranked.sort_by(rank_order);
        ranked.truncate(limit);
        ranked
    }

    /// Number of recorded scores across all difficulties.
    pub fn len(&self) -> usize {
        self.inner.read().scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ranking order for the leaderboard, best first:
/// higher rating, then more kills, then faster completion, then earlier
/// insertion. Ids are strictly increasing in `created_at` order, so the
/// final key makes this a total order with no residual ties.
fn rank_order(a: &Score, b: &Score) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| b.kills.cmp(&a.kills))
        .then_with(|| a.time_ms.cmp(&b.time_ms))
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}
