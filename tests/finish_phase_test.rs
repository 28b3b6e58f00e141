//! Finish-phase flows: both entry paths, the mercy rule, and the
//! revive/clear loop, driven through the public session API.
//!
//! `StepRng::new(u64::MAX, 0)` keeps shuffles at identity and never trips
//! a probability roll, so question order and damage are exact.

use quizboss::core::events::BattleEvent;
use quizboss::core::session::{BattleSession, Phase};
use quizboss::core::stats::BattleResult;
use quizboss::quiz::payload::{BossConfig, DifficultyProfile, QuizPayload};
use quizboss::quiz::queue::QuestionQueue;
use quizboss::quiz::types::{AnswerInput, AnswerOption, Question, QuestionKind};
use rand::rngs::mock::StepRng;
use std::collections::HashMap;

/// Turn-resolution stub; construction uses an incrementing rng because
/// the question shuffle rejects the constant max draw.
fn rng_calm() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn rng_seq() -> StepRng {
    StepRng::new(0, 1)
}

fn questions(question_count: usize) -> Vec<Question> {
    (0..question_count)
        .map(|i| Question {
            id: format!("q{i}"),
            text: format!("question {i}"),
            kind: QuestionKind::TrueFalse,
            options: vec![
                AnswerOption {
                    id: "true".to_string(),
                    text: "True".to_string(),
                    image: None,
                },
                AnswerOption {
                    id: "false".to_string(),
                    text: "False".to_string(),
                    image: None,
                },
            ],
            correct_option_ids: vec!["true".to_string()],
            accepted_answers: Vec::new(),
            time_limit_seconds: None,
        })
        .collect()
}

fn payload(question_count: usize, boss_hp: u32) -> QuizPayload {
    let mut difficulties = HashMap::new();
    difficulties.insert(
        "easy".to_string(),
        DifficultyProfile {
            hp_multiplier: 1.0,
            damage_multiplier: 1.0,
            dodge_chance: 0.0,
            boss_heal_chance: 0.0,
        },
    );
    QuizPayload {
        title: "Geography".to_string(),
        difficulty: "easy".to_string(),
        boss: BossConfig {
            name: "Atlas".to_string(),
            boss_hp,
            player_hp: 500,
            difficulties,
        },
        questions: questions(question_count),
    }
}

/// A playing session with the questions pinned back to id order, so the
/// turn number tells you which question is up.
fn ready_session(question_count: usize, boss_hp: u32) -> BattleSession {
    let mut session =
        BattleSession::new(payload(question_count, boss_hp), "tester", question_count, &mut rng_seq())
            .unwrap();
    session.queue = QuestionQueue::new(questions(question_count));
    session.start();
    session.choose_passive(None);
    session
}

fn answer_right(session: &mut BattleSession) -> Vec<BattleEvent> {
    session.submit_answer(AnswerInput::Single("true".to_string()), &mut rng_calm())
}

fn answer_wrong(session: &mut BattleSession) -> Vec<BattleEvent> {
    session.submit_answer(AnswerInput::Single("false".to_string()), &mut rng_calm())
}

#[test]
fn boss_down_with_misses_pending_revives_into_finish_phase() {
    // Boss 500: one miss up front, then five 100-damage hits drop it
    // with q0 still owed.
    let mut session = ready_session(10, 500);

    answer_wrong(&mut session);
    for _ in 0..4 {
        answer_right(&mut session);
    }
    assert_eq!(session.boss_hp, 100);

    let events = answer_right(&mut session);
    assert_eq!(session.phase, Phase::FinishIt);
    assert_eq!(session.boss_hp, 50, "revived at 10% of max");
    assert!(events
        .iter()
        .any(|e| matches!(e, BattleEvent::Revive { boss_hp: 50, .. })));
    assert_eq!(session.current_question().unwrap().id, "q0");

    // Clearing the single owed question ends the run.
    let events = answer_right(&mut session);
    assert_eq!(session.phase, Phase::Stats);
    assert_eq!(session.result, Some(BattleResult::Win));
    assert!(events
        .iter()
        .any(|e| matches!(e, BattleEvent::Victory { .. })));
}

#[test]
fn primary_exhaustion_enters_finish_phase_without_reviving() {
    // Boss 1000: a miss on q0 leaves only nine hits, so the primary run
    // ends with the boss at 100 HP and no revive.
    let mut session = ready_session(10, 1000);

    answer_wrong(&mut session);
    let mut events = Vec::new();
    for _ in 0..9 {
        events = answer_right(&mut session);
    }

    assert_eq!(session.phase, Phase::FinishIt);
    assert_eq!(session.boss_hp, 100, "no revive on the exhaustion path");
    assert!(!events
        .iter()
        .any(|e| matches!(e, BattleEvent::Revive { .. })));

    answer_right(&mut session);
    assert_eq!(session.result, Some(BattleResult::Win));
}

#[test]
fn mercy_rule_returns_to_playing_past_the_saved_cursor() {
    let mut session = ready_session(10, 500);

    answer_wrong(&mut session); // q0 missed
    for _ in 0..5 {
        answer_right(&mut session); // q1..q5, boss down at q5
    }
    assert_eq!(session.phase, Phase::FinishIt);

    let events = answer_wrong(&mut session);
    assert_eq!(session.phase, Phase::Playing);
    assert_eq!(session.boss_hp, 50);
    assert!(events
        .iter()
        .any(|e| matches!(e, BattleEvent::Revive { boss_hp: 50, .. })));
    // Resume one past where the primary run stopped; the retry set is
    // discarded but the missed record survives.
    assert_eq!(session.current_question().unwrap().id, "q6");
    assert_eq!(session.queue.retry_count(), 0);
    assert_eq!(session.queue.missed_count(), 1);
}

#[test]
fn mercy_loop_can_be_recovered_and_won() {
    let mut session = ready_session(10, 500);

    answer_wrong(&mut session);
    for _ in 0..5 {
        answer_right(&mut session);
    }
    answer_wrong(&mut session); // mercy: back to Playing at q6, boss 50

    // One more hit downs the 50 HP boss; misses are still pending, so
    // the finish phase opens a second time.
    answer_right(&mut session);
    assert_eq!(session.phase, Phase::FinishIt);
    assert_eq!(session.boss_hp, 50);
    assert_eq!(session.current_question().unwrap().id, "q0");

    answer_right(&mut session);
    assert_eq!(session.phase, Phase::Stats);
    assert_eq!(session.result, Some(BattleResult::Win));
}

#[test]
fn exhaustion_with_clean_record_and_boss_alive_is_a_loss() {
    // Ten perfect answers deal 1000, but the boss has 2000.
    let mut session = ready_session(10, 2000);

    let mut events = Vec::new();
    for _ in 0..10 {
        events = answer_right(&mut session);
    }

    assert_eq!(session.phase, Phase::Stats);
    assert_eq!(session.result, Some(BattleResult::Lose));
    assert!(events
        .iter()
        .any(|e| matches!(e, BattleEvent::Defeat { .. })));
}
