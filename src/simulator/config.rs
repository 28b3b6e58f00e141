//! Simulation configuration.

use crate::core::constants::DEFAULT_QUESTION_COUNT;

/// Configuration for a batch of simulated battles.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Probability that the bot answers a question correctly
    pub accuracy: f64,

    /// Difficulty key of the synthetic payload ("easy", "normal", "hard")
    pub difficulty: String,

    /// Questions in the primary run
    pub question_count: usize,

    /// Probability that the bot drinks a potion while idle
    pub potion_thirst: f64,

    /// Safety cap on turns per battle (the mercy rule can loop a run)
    pub max_turns_per_run: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            accuracy: 0.75,
            difficulty: "normal".to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
            potion_thirst: 0.5,
            max_turns_per_run: 500,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking one difficulty's win rate.
    pub fn difficulty_check(difficulty: &str, accuracy: f64) -> Self {
        Self {
            num_runs: 200,
            difficulty: difficulty.to_string(),
            accuracy,
            ..Default::default()
        }
    }
}
