//! Simulation report generation.

use serde::Serialize;

use super::config::SimConfig;
use crate::core::stats::BattleResult;

/// Statistics from one simulated battle.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub result: BattleResult,
    pub timed_out: bool,
    pub score: u32,
    pub turns: u32,
    pub finish_phases: u32,
    pub accuracy_percent: f64,
    pub total_damage_dealt: u64,
    pub max_single_hit: u32,
    pub potions_looted: u32,
    pub potions_used: u32,
    pub dodge_count: u32,
}

/// Aggregated results from multiple simulated battles.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub difficulty: String,
    pub bot_accuracy: f64,
    pub wins: u32,
    pub losses: u32,
    pub timed_out: u32,
    pub win_rate: f64,
    pub avg_score: f64,
    pub avg_turns: f64,
    pub avg_finish_phases: f64,
    pub avg_damage_dealt: f64,
    pub avg_potions_looted: f64,
    pub avg_potions_used: f64,
    pub max_single_hit: u32,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Aggregates completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let denom = (num_runs as f64).max(1.0);

        let wins = runs
            .iter()
            .filter(|r| !r.timed_out && r.result == BattleResult::Win)
            .count() as u32;
        let timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;
        let losses = num_runs - wins - timed_out;

        let avg = |f: &dyn Fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / denom;

        Self {
            num_runs,
            difficulty: config.difficulty.clone(),
            bot_accuracy: config.accuracy,
            wins,
            losses,
            timed_out,
            win_rate: wins as f64 * 100.0 / denom,
            avg_score: avg(&|r| r.score as f64),
            avg_turns: avg(&|r| r.turns as f64),
            avg_finish_phases: avg(&|r| r.finish_phases as f64),
            avg_damage_dealt: avg(&|r| r.total_damage_dealt as f64),
            avg_potions_looted: avg(&|r| r.potions_looted as f64),
            avg_potions_used: avg(&|r| r.potions_used as f64),
            max_single_hit: runs.iter().map(|r| r.max_single_hit).max().unwrap_or(0),
            run_stats: runs,
        }
    }

    /// Human-readable summary for the terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══════════════════ SIMULATION RESULTS ═══════════════════\n");
        out.push_str(&format!(
            "Runs: {}   Difficulty: {}   Bot accuracy: {:.0}%\n",
            self.num_runs,
            self.difficulty,
            self.bot_accuracy * 100.0
        ));
        out.push_str(&format!(
            "Outcome: {} wins / {} losses / {} timed out  ({:.1}% win rate)\n",
            self.wins, self.losses, self.timed_out, self.win_rate
        ));
        out.push_str(&format!(
            "Averages: score {:.0}, turns {:.1}, finish phases {:.2}\n",
            self.avg_score, self.avg_turns, self.avg_finish_phases
        ));
        out.push_str(&format!(
            "Damage: avg {:.0} dealt per run, biggest hit {}\n",
            self.avg_damage_dealt, self.max_single_hit
        ));
        out.push_str(&format!(
            "Potions: {:.2} looted / {:.2} used per run\n",
            self.avg_potions_looted, self.avg_potions_used
        ));
        out
    }

    /// Full report as pretty JSON, for offline analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
