//! Pure per-turn combat math shared by the session and the simulator.
//!
//! These functions have no side effects; every probability draw comes from
//! the injected `rng`, one uniform draw per named roll, so seeded runs and
//! stub generators reproduce outcomes exactly.

use std::collections::HashSet;

use rand::Rng;

use crate::core::constants::*;
use crate::items::types::{Passive, PotionKind};
use crate::quiz::types::{AnswerInput, Question, QuestionKind};

/// Result of a player hit calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    /// Damage dealt, rounded up after all multipliers.
    pub damage: u32,
    /// Whether the crit roll succeeded.
    pub was_crit: bool,
}

/// Judges the recorded input against the question's answer key.
///
/// An option id that does not belong to the question simply fails the
/// membership check: malformed input is an incorrect answer, not a fault.
pub fn judge_answer(question: &Question, input: &AnswerInput) -> bool {
    match (question.kind, input) {
        (QuestionKind::SingleChoice | QuestionKind::TrueFalse, AnswerInput::Single(id)) => {
            question.correct_option_ids.iter().any(|c| c == id)
        }
        (QuestionKind::MultiSelect, AnswerInput::Multi(ids)) => {
            let chosen: HashSet<&str> = ids.iter().map(String::as_str).collect();
            let correct: HashSet<&str> = question
                .correct_option_ids
                .iter()
                .map(String::as_str)
                .collect();
            // Exact set equality: equal size plus full containment
            chosen == correct
        }
        (QuestionKind::OrderedList, AnswerInput::Ordered(sequence)) => {
            sequence.len() == question.correct_option_ids.len()
                && sequence
                    .iter()
                    .zip(&question.correct_option_ids)
                    .all(|(a, b)| a == b)
        }
        (QuestionKind::FreeText, AnswerInput::Text(text)) => {
            let normalized = text.trim().to_lowercase();
            question
                .accepted_answers
                .iter()
                .any(|a| a.trim().to_lowercase() == normalized)
        }
        (_, AnswerInput::Timeout) => false,
        // Input shape does not match the question kind
        _ => false,
    }
}

/// Score awarded for a correct, non-dodged answer at the given streak
/// (the streak before it is incremented).
pub fn score_gain(streak: u32) -> u32 {
    SCORE_BASE_POINTS + SCORE_STREAK_BONUS * streak
}

/// Rolls the boss dodge against the difficulty's dodge chance.
pub fn roll_boss_dodge(dodge_chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < dodge_chance
}

/// Computes the player's hit: base damage, passive and status multipliers
/// applied in fixed order, then the crit roll, then a final round-up.
pub fn player_hit(
    passive: Option<Passive>,
    has_temp_strength: bool,
    boss_vulnerable: bool,
    rng: &mut impl Rng,
) -> HitResult {
    let mut damage = BASE_DAMAGE;
    if passive == Some(Passive::Fuerza) {
        damage *= FUERZA_DAMAGE_MULTIPLIER;
    }
    if has_temp_strength {
        damage *= STRENGTH_STATUS_MULTIPLIER;
    }
    if boss_vulnerable {
        damage *= VULNERABLE_DAMAGE_MULTIPLIER;
    }

    let crit_chance = if passive == Some(Passive::Certero) {
        CERTERO_CRIT_CHANCE
    } else {
        BASE_CRIT_CHANCE
    };
    let was_crit = rng.gen::<f64>() < crit_chance;
    if was_crit {
        damage *= CRIT_MULTIPLIER;
    }

    HitResult {
        damage: damage.ceil() as u32,
        was_crit,
    }
}

/// Rolls the loot drop; on success picks one potion kind uniformly.
pub fn roll_loot(passive: Option<Passive>, rng: &mut impl Rng) -> Option<PotionKind> {
    let chance = if passive == Some(Passive::Suerte) {
        SUERTE_LOOT_CHANCE
    } else {
        BASE_LOOT_CHANCE
    };
    if rng.gen::<f64>() < chance {
        Some(PotionKind::ALL[rng.gen_range(0..PotionKind::ALL.len())])
    } else {
        None
    }
}

/// Independent 20% evasion roll for the Agil passive. Only drawn when no
/// evasive-smoke status already covers the turn.
pub fn roll_agil_evade(rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < AGIL_EVADE_CHANCE
}

/// Computes the boss counter-attack damage: a fraction of the player's max
/// HP scaled by difficulty, rounded up, reduced by Escudo, doubled while
/// the player is vulnerable.
pub fn boss_strike(
    player_max_hp: u32,
    damage_multiplier: f64,
    passive: Option<Passive>,
    player_vulnerable: bool,
) -> u32 {
    let mut damage = (player_max_hp as f64 * BOSS_DAMAGE_FRACTION * damage_multiplier).ceil();
    if passive == Some(Passive::Escudo) {
        damage = (damage * (1.0 - ESCUDO_DAMAGE_REDUCTION)).ceil();
    }
    let mut damage = damage as u32;
    if player_vulnerable {
        damage *= 2;
    }
    damage
}

/// Rolls the boss heal once its HP has fallen below half.
pub fn roll_boss_heal(boss_heal_chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < boss_heal_chance
}

/// Amount restored by a successful boss heal.
pub fn boss_heal_amount(boss_max_hp: u32) -> u32 {
    (boss_max_hp as f64 * BOSS_HEAL_FRACTION).ceil() as u32
}

/// Boss HP after a revive (finish-phase entry or the mercy rule).
pub fn boss_revive_hp(boss_max_hp: u32) -> u32 {
    ((boss_max_hp as f64 * BOSS_REVIVE_FRACTION).ceil() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::types::AnswerOption;
    use rand::rngs::mock::StepRng;

    /// Never trips a probability roll: f64 draws land just below 1.0.
    fn rng_high() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// Always trips a probability roll: f64 draws are 0.0.
    fn rng_low() -> StepRng {
        StepRng::new(0, 0)
    }

    fn option(id: &str) -> AnswerOption {
        AnswerOption {
            id: id.to_string(),
            text: id.to_string(),
            image: None,
        }
    }

    fn question(kind: QuestionKind, correct: &[&str]) -> Question {
        Question {
            id: "q".to_string(),
            text: "q".to_string(),
            kind,
            options: vec![option("a"), option("b"), option("c"), option("d")],
            correct_option_ids: correct.iter().map(|s| s.to_string()).collect(),
            accepted_answers: Vec::new(),
            time_limit_seconds: None,
        }
    }

    fn multi(ids: &[&str]) -> AnswerInput {
        AnswerInput::Multi(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_single_choice_membership() {
        let q = question(QuestionKind::SingleChoice, &["b"]);
        assert!(judge_answer(&q, &AnswerInput::Single("b".to_string())));
        assert!(!judge_answer(&q, &AnswerInput::Single("a".to_string())));
        // Unknown option id is just an incorrect answer
        assert!(!judge_answer(&q, &AnswerInput::Single("zz".to_string())));
    }

    #[test]
    fn test_multi_select_requires_exact_set_equality() {
        let q = question(QuestionKind::MultiSelect, &["a", "c"]);
        // Correct set in a different insertion order
        assert!(judge_answer(&q, &multi(&["c", "a"])));
        // Equal size, wrong content
        assert!(!judge_answer(&q, &multi(&["a", "b"])));
        // Subset and superset both fail
        assert!(!judge_answer(&q, &multi(&["a"])));
        assert!(!judge_answer(&q, &multi(&["a", "b", "c"])));
    }

    #[test]
    fn test_ordered_list_is_positional() {
        let q = question(QuestionKind::OrderedList, &["a", "b", "c"]);
        assert!(judge_answer(
            &q,
            &AnswerInput::Ordered(vec!["a".into(), "b".into(), "c".into()])
        ));
        assert!(!judge_answer(
            &q,
            &AnswerInput::Ordered(vec!["a".into(), "c".into(), "b".into()])
        ));
        assert!(!judge_answer(
            &q,
            &AnswerInput::Ordered(vec!["a".into(), "b".into()])
        ));
    }

    #[test]
    fn test_free_text_is_trimmed_and_case_folded() {
        let mut q = question(QuestionKind::FreeText, &[]);
        q.accepted_answers = vec!["Madrid".to_string(), "capital de españa".to_string()];
        assert!(judge_answer(&q, &AnswerInput::Text("  madrid ".to_string())));
        assert!(judge_answer(
            &q,
            &AnswerInput::Text("CAPITAL DE ESPAÑA".to_string())
        ));
        assert!(!judge_answer(&q, &AnswerInput::Text("Barcelona".to_string())));
    }

    #[test]
    fn test_timeout_is_always_incorrect() {
        let q = question(QuestionKind::SingleChoice, &["a"]);
        assert!(!judge_answer(&q, &AnswerInput::Timeout));
    }

    #[test]
    fn test_mismatched_input_shape_is_incorrect() {
        let q = question(QuestionKind::MultiSelect, &["a"]);
        assert!(!judge_answer(&q, &AnswerInput::Single("a".to_string())));
    }

    #[test]
    fn test_score_gain_formula() {
        assert_eq!(score_gain(0), 100);
        assert_eq!(score_gain(3), 130);
    }

    #[test]
    fn test_base_hit_no_multipliers() {
        let hit = player_hit(None, false, false, &mut rng_high());
        assert!(!hit.was_crit);
        assert_eq!(hit.damage, 100);
    }

    #[test]
    fn test_fuerza_and_vulnerable_compose() {
        // 100 × 1.2 × 2 = 240, ceil of an integer stays exact
        let hit = player_hit(Some(Passive::Fuerza), false, true, &mut rng_high());
        assert_eq!(hit.damage, 240);

        // Same multipliers with the crit landing: 240 × 1.5 = 360
        let hit = player_hit(Some(Passive::Fuerza), false, true, &mut rng_low());
        assert!(hit.was_crit);
        assert_eq!(hit.damage, 360);
    }

    #[test]
    fn test_temp_strength_multiplier() {
        let hit = player_hit(None, true, false, &mut rng_high());
        assert_eq!(hit.damage, 150);
    }

    #[test]
    fn test_damage_rounds_up_after_all_multipliers() {
        // 100 × 1.2 = 120, × 1.5 crit = 180 exact; Fuerza alone with a
        // crit stays integral, but Escudo below exercises fractional paths.
        let hit = player_hit(Some(Passive::Fuerza), false, false, &mut rng_low());
        assert!(hit.was_crit);
        assert_eq!(hit.damage, 180);
    }

    #[test]
    fn test_loot_roll_draws_a_kind_on_success() {
        assert!(roll_loot(None, &mut rng_low()).is_some());
        assert!(roll_loot(None, &mut rng_high()).is_none());
        assert!(roll_loot(Some(Passive::Suerte), &mut rng_low()).is_some());
    }

    #[test]
    fn test_boss_strike_base() {
        // ceil(500 × 0.2 × 1.0) = 100
        assert_eq!(boss_strike(500, 1.0, None, false), 100);
        // ceil(500 × 0.2 × 1.5) = 150
        assert_eq!(boss_strike(500, 1.5, None, false), 150);
    }

    #[test]
    fn test_boss_strike_escudo_rounds_up() {
        // ceil(100 × 0.85) = 85; fractional case: ceil(110 × 0.85) = ceil(93.5) = 94
        assert_eq!(boss_strike(500, 1.0, Some(Passive::Escudo), false), 85);
        assert_eq!(boss_strike(550, 1.0, Some(Passive::Escudo), false), 94);
    }

    #[test]
    fn test_boss_strike_doubles_on_player_vulnerable() {
        assert_eq!(boss_strike(500, 1.0, None, true), 200);
        // Escudo applies before the vulnerability doubling
        assert_eq!(boss_strike(500, 1.0, Some(Passive::Escudo), true), 170);
    }

    #[test]
    fn test_revive_and_heal_amounts() {
        assert_eq!(boss_revive_hp(1000), 100);
        assert_eq!(boss_revive_hp(5), 1);
        assert_eq!(boss_heal_amount(1000), 100);
        assert_eq!(boss_heal_amount(1005), 101);
    }
}
