//! Simulation runner: plays complete sessions through the real engine so
//! balance numbers match actual gameplay behavior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::events::BattleEvent;
use crate::core::session::{BattleSession, Phase};
use crate::core::stats::BattleResult;
use crate::items::types::Passive;
use crate::quiz::payload::{BossConfig, DifficultyProfile, QuizPayload};
use crate::quiz::types::{AnswerInput, AnswerOption, Question, QuestionKind};
use std::collections::HashMap;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed + run_idx as u64),
            None => StdRng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?}, score {}, {} turns, {} finish phases",
                run_idx + 1,
                config.num_runs,
                run_stats.result,
                run_stats.score,
                run_stats.turns,
                run_stats.finish_phases
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config)
}

/// Plays one session with a bot that answers correctly with probability
/// `config.accuracy` and drinks potions while idle.
fn simulate_single_run(config: &SimConfig, rng: &mut StdRng) -> RunStats {
    let payload = synthetic_payload(config.question_count, &config.difficulty);
    let mut session = BattleSession::new(payload, "simbot", config.question_count, rng)
        .expect("synthetic payload is always valid");

    session.start();
    let passive = Passive::ALL[rng.gen_range(0..Passive::ALL.len())];
    session.choose_passive(Some(passive));

    let mut turns = 0u32;
    let mut finish_phases = 0u32;

    while session.phase.in_battle() && turns < config.max_turns_per_run {
        // Drink something while idle, before committing to the answer
        if !session.inventory.is_empty() && rng.gen::<f64>() < config.potion_thirst {
            let kind = session.inventory.potions()[0];
            session.use_potion(kind);
        }

        let question = session
            .current_question()
            .expect("battle phases always have a current question");
        let input = bot_input(question, config.accuracy, rng);
        let events = session.submit_answer(input, rng);
        turns += 1;

        for event in &events {
            if matches!(event, BattleEvent::Revive { .. }) {
                finish_phases += 1;
            }
        }
    }

    let timed_out = session.phase != Phase::Stats;
    RunStats {
        result: session.result.unwrap_or(BattleResult::Lose),
        timed_out,
        score: session.score,
        turns,
        finish_phases,
        accuracy_percent: session.stats.accuracy_percent(),
        total_damage_dealt: session.stats.total_damage_dealt,
        max_single_hit: session.stats.max_single_hit,
        potions_looted: session.stats.potions_looted,
        potions_used: session.stats.potions_used,
        dodge_count: session.stats.dodge_count,
    }
}

/// Builds the bot's answer: the question's own answer key when the
/// accuracy roll succeeds, a wrong submission otherwise.
fn bot_input(question: &Question, accuracy: f64, rng: &mut impl Rng) -> AnswerInput {
    let answers_right = rng.gen::<f64>() < accuracy;
    if answers_right {
        match question.kind {
            QuestionKind::SingleChoice | QuestionKind::TrueFalse => {
                AnswerInput::Single(question.correct_option_ids[0].clone())
            }
            QuestionKind::MultiSelect => AnswerInput::Multi(question.correct_option_ids.clone()),
            QuestionKind::OrderedList => AnswerInput::Ordered(question.correct_option_ids.clone()),
            QuestionKind::FreeText => AnswerInput::Text(question.accepted_answers[0].clone()),
        }
    } else if rng.gen::<f64>() < 0.1 {
        // Occasionally the bot just runs out the clock
        AnswerInput::Timeout
    } else {
        match question.kind {
            QuestionKind::FreeText => AnswerInput::Text("no idea".to_string()),
            QuestionKind::OrderedList => {
                let mut sequence = question.correct_option_ids.clone();
                sequence.reverse();
                AnswerInput::Ordered(sequence)
            }
            QuestionKind::MultiSelect => {
                AnswerInput::Multi(vec![question.options[0].id.clone()])
            }
            _ => AnswerInput::Single("not-an-option".to_string()),
        }
    }
}

/// A synthetic payload mixing every question kind, with the stock
/// difficulty table.
pub fn synthetic_payload(question_count: usize, difficulty: &str) -> QuizPayload {
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
    difficulties.insert(
        "normal".to_string(),
        DifficultyProfile {
            hp_multiplier: 1.5,
            damage_multiplier: 1.5,
            dodge_chance: 0.10,
            boss_heal_chance: 0.15,
        },
    );
    difficulties.insert(
        "hard".to_string(),
        DifficultyProfile {
            hp_multiplier: 2.0,
            damage_multiplier: 2.0,
            dodge_chance: 0.20,
            boss_heal_chance: 0.25,
        },
    );

    let questions = (0..question_count).map(synthetic_question).collect();

    QuizPayload {
        title: "Synthetic Balance Quiz".to_string(),
        difficulty: difficulty.to_string(),
        boss: BossConfig {
            name: "Simulacrum".to_string(),
            boss_hp: 1000,
            player_hp: 500,
            difficulties,
        },
        questions,
    }
}

fn synthetic_question(index: usize) -> Question {
    let id = format!("q{index}");
    let option = |suffix: &str| AnswerOption {
        id: format!("{id}-{suffix}"),
        text: format!("option {suffix}"),
        image: None,
    };
    let ids = |suffixes: &[&str]| -> Vec<String> {
        suffixes.iter().map(|s| format!("{id}-{s}")).collect()
    };

    match index % 5 {
        0 => Question {
            id: id.clone(),
            text: "pick one".to_string(),
            kind: QuestionKind::SingleChoice,
            options: vec![option("a"), option("b"), option("c"), option("d")],
            correct_option_ids: ids(&["a"]),
            accepted_answers: Vec::new(),
            time_limit_seconds: Some(20),
        },
        1 => Question {
            id: id.clone(),
            text: "true or false".to_string(),
            kind: QuestionKind::TrueFalse,
            options: vec![option("true"), option("false")],
            correct_option_ids: ids(&["true"]),
            accepted_answers: Vec::new(),
            time_limit_seconds: Some(10),
        },
        2 => Question {
            id: id.clone(),
            text: "pick all that apply".to_string(),
            kind: QuestionKind::MultiSelect,
            options: vec![option("a"), option("b"), option("c"), option("d")],
            correct_option_ids: ids(&["a", "c"]),
            accepted_answers: Vec::new(),
            time_limit_seconds: Some(30),
        },
        3 => Question {
            id: id.clone(),
            text: "put in order".to_string(),
            kind: QuestionKind::OrderedList,
            options: vec![option("a"), option("b"), option("c")],
            correct_option_ids: ids(&["a", "b", "c"]),
            accepted_answers: Vec::new(),
            time_limit_seconds: Some(30),
        },
        _ => Question {
            id,
            text: "type the answer".to_string(),
            kind: QuestionKind::FreeText,
            options: Vec::new(),
            correct_option_ids: Vec::new(),
            accepted_answers: vec!["answer".to_string()],
            time_limit_seconds: Some(25),
        },
    }
}
