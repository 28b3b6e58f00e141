//! Battle statistics accumulated per resolved turn, and the attempt summary
//! handed to the host's persistence collaborator at session end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Final outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    Win,
    Lose,
}

/// Monotonic accumulators written only in response to resolved turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleStats {
    pub total_damage_dealt: u64,
    pub max_single_hit: u32,
    /// Boss attacks fully evaded by the player.
    pub dodge_count: u32,
    pub potions_used: u32,
    pub potions_looted: u32,
    pub correct_answers: u32,
    pub total_answers: u32,
}

impl BattleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self, damage: u32) {
        self.total_damage_dealt += damage as u64;
        if damage > self.max_single_hit {
            self.max_single_hit = damage;
        }
    }

    pub fn record_answer(&mut self, correct: bool) {
        self.total_answers += 1;
        if correct {
            self.correct_answers += 1;
        }
    }

    /// Correct answers as a percentage of all answers, 0.0 for an empty run.
    pub fn accuracy_percent(&self) -> f64 {
        if self.total_answers == 0 {
            0.0
        } else {
            self.correct_answers as f64 * 100.0 / self.total_answers as f64
        }
    }
}

/// End-of-run summary. The engine performs no I/O; the host hands this to
/// whatever stores results and leaderboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub id: Uuid,
    pub nickname: String,
    pub quiz_title: String,
    pub result: BattleResult,
    pub score: u32,
    pub started_at: DateTime<Utc>,
    pub elapsed_seconds: i64,
    pub accuracy_percent: f64,
    pub stats: BattleStats,
}
