//! Quiz payload loading and validation.
//!
//! The host hands the engine a JSON payload (title, difficulty key, boss
//! configuration, question list). Everything is validated here, before a
//! session is constructed. Once a session runs there are no fatal errors.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::types::Question;

/// Configuration problems that prevent a session from starting.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("quiz payload contains no questions")]
    EmptyQuestionSet,
    #[error("unknown difficulty key: {0}")]
    UnknownDifficulty(String),
    #[error("boss and player HP must both be positive")]
    InvalidHp,
}

/// Per-difficulty tuning, selected once from the boss configuration and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub hp_multiplier: f64,
    pub damage_multiplier: f64,
    pub dodge_chance: f64,
    pub boss_heal_chance: f64,
}

/// Boss setup: display name, base HP pools, and the difficulty table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossConfig {
    pub name: String,
    pub boss_hp: u32,
    pub player_hp: u32,
    pub difficulties: HashMap<String, DifficultyProfile>,
}

/// The full quiz payload as delivered by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPayload {
    pub title: String,
    pub difficulty: String,
    pub boss: BossConfig,
    pub questions: Vec<Question>,
}

impl QuizPayload {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks the payload and resolves the selected difficulty profile.
    pub fn validate(&self) -> Result<DifficultyProfile, ConfigError> {
        if self.questions.is_empty() {
            return Err(ConfigError::EmptyQuestionSet);
        }
        if self.boss.boss_hp == 0 || self.boss.player_hp == 0 {
            return Err(ConfigError::InvalidHp);
        }
        self.boss
            .difficulties
            .get(&self.difficulty)
            .copied()
            .ok_or_else(|| ConfigError::UnknownDifficulty(self.difficulty.clone()))
    }
}

/// Shuffles the question order, caps the run to `count` questions, and
/// randomizes option order once for choice-type questions. Ordered-list and
/// true/false questions keep source order; for ordering questions the
/// source order is the answer key.
pub fn prepare_questions(
    mut questions: Vec<Question>,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Question> {
    questions.shuffle(rng);
    questions.truncate(count);
    for question in &mut questions {
        if question.kind.shuffles_options() {
            question.options.shuffle(rng);
        }
    }
    questions
}
