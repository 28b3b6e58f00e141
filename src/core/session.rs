//! The battle session: one owned aggregate holding all mutable game state,
//! advanced only through explicit transition functions.
//!
//! The host feeds player input and clock ticks in; the session judges the
//! answer, applies damage and statuses, advances the question queue, and
//! returns the [`BattleEvent`] list that drives presentation. No ambient
//! state, no hidden timing beyond the countdown owned here.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::constants::BOSS_HEAL_THRESHOLD;
use crate::core::events::BattleEvent;
use crate::core::resolver;
use crate::core::stats::{AttemptSummary, BattleResult, BattleStats};
use crate::core::status::StatusBoard;
use crate::items::types::{Actor, Inventory, Passive, PotionKind, StatusKind};
use crate::quiz::payload::{prepare_questions, ConfigError, DifficultyProfile, QuizPayload};
use crate::quiz::queue::{ActivePartition, AdvanceResult, QuestionQueue};
use crate::quiz::types::{AnswerInput, Question};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Lobby,
    Roulette,
    Playing,
    FinishIt,
    Stats,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Lobby => "Lobby",
            Phase::Roulette => "Roulette",
            Phase::Playing => "Playing",
            Phase::FinishIt => "Finish It",
            Phase::Stats => "Stats",
        }
    }

    /// Phases in which turns are resolved.
    pub fn in_battle(&self) -> bool {
        matches!(self, Phase::Playing | Phase::FinishIt)
    }
}

/// Per-turn sub-state. Input is accepted only while `Idle`; a resolution
/// always runs to completion, so `Resolving` is never observable between
/// calls. It exists so any re-entrant event is idempotently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    Idle,
    Resolving,
    Victory,
    Defeat,
}

/// One quiz boss battle from lobby to summary.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub nickname: String,
    pub quiz_title: String,
    pub boss_name: String,
    pub profile: DifficultyProfile,
    pub boss_hp: u32,
    pub boss_max_hp: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub score: u32,
    pub streak: u32,
    pub passive: Option<Passive>,
    pub inventory: Inventory,
    pub statuses: StatusBoard,
    pub phase: Phase,
    pub turn_state: TurnState,
    pub queue: QuestionQueue,
    /// Seconds left on the current question, `None` when untimed or idle.
    pub countdown: Option<f64>,
    pub stats: BattleStats,
    pub result: Option<BattleResult>,
    pub started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl BattleSession {
    /// Builds a session from a validated payload. The primary question run
    /// is shuffled and capped to `question_count`; choice-type option
    /// orders are randomized once here.
    pub fn new(
        payload: QuizPayload,
        nickname: &str,
        question_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        let profile = payload.validate()?;
        let boss_max_hp = ((payload.boss.boss_hp as f64 * profile.hp_multiplier).ceil() as u32).max(1);
        let player_max_hp = payload.boss.player_hp;
        let questions = prepare_questions(payload.questions, question_count, rng);

        Ok(Self {
            nickname: nickname.to_string(),
            quiz_title: payload.title,
            boss_name: payload.boss.name,
            profile,
            boss_hp: boss_max_hp,
            boss_max_hp,
            player_hp: player_max_hp,
            player_max_hp,
            score: 0,
            streak: 0,
            passive: None,
            inventory: Inventory::new(),
            statuses: StatusBoard::new(),
            phase: Phase::Lobby,
            turn_state: TurnState::Idle,
            queue: QuestionQueue::new(questions),
            countdown: None,
            stats: BattleStats::new(),
            result: None,
            started_at: Utc::now(),
            ended_at: None,
        })
    }

    /// Lobby → Roulette.
    pub fn start(&mut self) {
        if self.phase == Phase::Lobby {
            self.phase = Phase::Roulette;
        }
    }

    /// Roulette → Playing, recording the roulette's single passive
    /// selection (or none, when the player declines the spin).
    pub fn choose_passive(&mut self, passive: Option<Passive>) {
        if self.phase != Phase::Roulette {
            return;
        }
        self.passive = passive;
        self.phase = Phase::Playing;
        self.arm_countdown();
    }

    fn active_partition(&self) -> ActivePartition {
        match self.phase {
            Phase::FinishIt => ActivePartition::Retry,
            _ => ActivePartition::Primary,
        }
    }

    /// The question awaiting an answer, if the session is mid-battle.
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase.in_battle() {
            self.queue.current(self.active_partition())
        } else {
            None
        }
    }

    /// Re-arms the countdown for the question that just became current.
    fn arm_countdown(&mut self) {
        self.countdown = self
            .current_question()
            .and_then(|q| q.time_limit_seconds)
            .map(f64::from);
    }

    /// Advances the countdown by `dt` seconds. Expiry resolves the current
    /// turn as a timeout. Ticks outside `Idle` are ignored.
    pub fn tick(&mut self, dt: f64, rng: &mut impl Rng) -> Vec<BattleEvent> {
        if self.turn_state != TurnState::Idle || !self.phase.in_battle() {
            return Vec::new();
        }
        let Some(remaining) = self.countdown else {
            return Vec::new();
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.countdown = Some(remaining);
            return Vec::new();
        }
        self.resolve_turn(AnswerInput::Timeout, rng)
    }

    /// Feeds the player's submission into turn resolution. Input arriving
    /// outside `Idle` (duplicate events, late submissions) is ignored.
    pub fn submit_answer(&mut self, input: AnswerInput, rng: &mut impl Rng) -> Vec<BattleEvent> {
        if self.turn_state != TurnState::Idle || !self.phase.in_battle() {
            return Vec::new();
        }
        self.resolve_turn(input, rng)
    }

    /// Drinks one potion from the inventory. Permitted only while idle
    /// mid-battle; does not consume a turn or touch the resolver.
    pub fn use_potion(&mut self, kind: PotionKind) -> Vec<BattleEvent> {
        if self.turn_state != TurnState::Idle || !self.phase.in_battle() {
            return Vec::new();
        }
        if !self.inventory.remove(kind) {
            return Vec::new();
        }
        self.stats.potions_used += 1;

        match kind.status_effect() {
            None => {
                // Healing: instant full restore
                self.player_hp = self.player_max_hp;
            }
            Some((actor, status, turns)) => {
                self.statuses.apply(actor, status, turns);
            }
        }

        vec![BattleEvent::PotionUsed {
            potion: kind,
            message: format!("You drink the {}.", kind.name()),
        }]
    }

    /// Resolves one turn: judge, roll, apply damage and statuses, tick
    /// effects, then evaluate the post-turn transition rules in order.
    fn resolve_turn(&mut self, input: AnswerInput, rng: &mut impl Rng) -> Vec<BattleEvent> {
        let Some(question) = self.current_question().cloned() else {
            return Vec::new();
        };
        self.turn_state = TurnState::Resolving;
        self.countdown = None;

        let mut events = Vec::new();
        let correct = resolver::judge_answer(&question, &input);
        self.stats.record_answer(correct);

        let mut boss_attacks = !correct;
        if correct {
            if resolver::roll_boss_dodge(self.profile.dodge_chance, rng) {
                // A dodge converts the hit into a no-damage event; the
                // answer still counts as correct for accuracy.
                events.push(BattleEvent::BossDodged {
                    message: format!("{} dodged your attack!", self.boss_name),
                });
                self.streak = 0;
                boss_attacks = true;
            } else {
                self.score += resolver::score_gain(self.streak);
                self.streak += 1;

                let hit = resolver::player_hit(
                    self.passive,
                    self.statuses.has(Actor::Player, StatusKind::TempStrength),
                    self.statuses.has(Actor::Boss, StatusKind::Vulnerable),
                    rng,
                );
                self.boss_hp = self.boss_hp.saturating_sub(hit.damage);
                self.stats.record_hit(hit.damage);
                let message = if hit.was_crit {
                    format!(
                        "Critical hit! {} takes {} damage!",
                        self.boss_name, hit.damage
                    )
                } else {
                    format!("You hit {} for {} damage!", self.boss_name, hit.damage)
                };
                events.push(BattleEvent::PlayerHit {
                    damage: hit.damage,
                    was_crit: hit.was_crit,
                    message,
                });

                if let Some(potion) = resolver::roll_loot(self.passive, rng) {
                    self.inventory.add(potion);
                    self.stats.potions_looted += 1;
                    events.push(BattleEvent::LootDrop {
                        potion,
                        message: format!("You found a {}!", potion.name()),
                    });
                }
            }
        } else {
            self.queue.record_miss(&question);
            self.streak = 0;
        }

        if boss_attacks {
            self.resolve_boss_attack(&mut events, rng);
        }

        // Status durations burn down once per resolved turn, for both
        // actors, before any win/loss check.
        self.statuses.tick(Actor::Player);
        self.statuses.tick(Actor::Boss);

        self.apply_transition_rules(!correct, &mut events);
        events
    }

    /// The shared miss-processing branch: evasion check, boss strike, and
    /// the below-half-HP heal roll.
    fn resolve_boss_attack(&mut self, events: &mut Vec<BattleEvent>, rng: &mut impl Rng) {
        let evaded = self.statuses.has(Actor::Player, StatusKind::EvasiveSmoke)
            || (self.passive == Some(Passive::Agil) && resolver::roll_agil_evade(rng));
        if evaded {
            self.stats.dodge_count += 1;
            events.push(BattleEvent::PlayerEvaded {
                message: format!("You evaded {}'s attack!", self.boss_name),
            });
            return;
        }

        let damage = resolver::boss_strike(
            self.player_max_hp,
            self.profile.damage_multiplier,
            self.passive,
            self.statuses.has(Actor::Player, StatusKind::Vulnerable),
        );
        self.player_hp = self.player_hp.saturating_sub(damage);
        events.push(BattleEvent::BossHit {
            damage,
            message: format!("{} hits you for {} damage!", self.boss_name, damage),
        });

        if (self.boss_hp as f64) < self.boss_max_hp as f64 * BOSS_HEAL_THRESHOLD
            && resolver::roll_boss_heal(self.profile.boss_heal_chance, rng)
        {
            let amount = resolver::boss_heal_amount(self.boss_max_hp);
            self.boss_hp = (self.boss_hp + amount).min(self.boss_max_hp);
            events.push(BattleEvent::BossHeal {
                amount,
                message: format!("{} recovers {} HP!", self.boss_name, amount),
            });
        }
    }

    /// Post-turn transition rules, evaluated in fixed order.
    fn apply_transition_rules(&mut self, answer_wrong: bool, events: &mut Vec<BattleEvent>) {
        // 1. Player death wins every tie.
        if self.player_hp == 0 {
            self.finish(BattleResult::Lose, events);
            return;
        }

        // 2. Boss down: finish phase if anything is pending, else victory.
        if self.boss_hp == 0 {
            if self.phase != Phase::FinishIt && self.queue.has_pending_retry_or_missed() {
                self.enter_finish_phase(true, events);
            } else {
                self.finish(BattleResult::Win, events);
            }
            return;
        }

        // 3. Mercy rule: one mistake in the finish phase sends the player
        //    back to the main round instead of ending the run.
        if self.phase == Phase::FinishIt && answer_wrong {
            self.boss_hp = resolver::boss_revive_hp(self.boss_max_hp);
            self.queue.revert_to_primary();
            self.phase = Phase::Playing;
            events.push(BattleEvent::Revive {
                boss_hp: self.boss_hp,
                message: format!(
                    "{} shakes it off and surges back with {} HP!",
                    self.boss_name, self.boss_hp
                ),
            });
            self.turn_state = TurnState::Idle;
            self.arm_countdown();
            return;
        }

        // 4. Advance the queue.
        match self.queue.advance(self.active_partition()) {
            AdvanceResult::NextInPhase => {
                self.turn_state = TurnState::Idle;
                self.arm_countdown();
            }
            AdvanceResult::PhaseExhausted => match self.phase {
                Phase::Playing if self.queue.missed_count() > 0 => {
                    // Boss HP is untouched on this path; only rule 2
                    // revives the boss at a fraction.
                    self.enter_finish_phase(false, events);
                }
                Phase::Playing => {
                    // Out of questions with the boss still standing.
                    self.finish(BattleResult::Lose, events);
                }
                _ => {
                    self.finish(BattleResult::Win, events);
                }
            },
        }
    }

    fn enter_finish_phase(&mut self, revive_boss: bool, events: &mut Vec<BattleEvent>) {
        self.queue.start_finish_phase();
        self.phase = Phase::FinishIt;
        if revive_boss {
            self.boss_hp = resolver::boss_revive_hp(self.boss_max_hp);
            events.push(BattleEvent::Revive {
                boss_hp: self.boss_hp,
                message: format!(
                    "{} refuses to fall! Finish it! Clear the questions you missed!",
                    self.boss_name
                ),
            });
        }
        self.turn_state = TurnState::Idle;
        self.arm_countdown();
    }

    fn finish(&mut self, result: BattleResult, events: &mut Vec<BattleEvent>) {
        self.result = Some(result);
        self.phase = Phase::Stats;
        self.countdown = None;
        self.ended_at = Some(Utc::now());
        match result {
            BattleResult::Win => {
                self.turn_state = TurnState::Victory;
                events.push(BattleEvent::Victory {
                    score: self.score,
                    message: format!("{} is defeated! Final score: {}", self.boss_name, self.score),
                });
            }
            BattleResult::Lose => {
                self.turn_state = TurnState::Defeat;
                events.push(BattleEvent::Defeat {
                    message: format!("{} has bested the class...", self.boss_name),
                });
            }
        }
    }

    /// The end-of-run summary, available once the session reached `Stats`.
    pub fn summary(&self) -> Option<AttemptSummary> {
        let result = self.result?;
        let ended_at = self.ended_at?;
        Some(AttemptSummary {
            id: Uuid::new_v4(),
            nickname: self.nickname.clone(),
            quiz_title: self.quiz_title.clone(),
            result,
            score: self.score,
            started_at: self.started_at,
            elapsed_seconds: (ended_at - self.started_at).num_seconds(),
            accuracy_percent: self.stats.accuracy_percent(),
            stats: self.stats.clone(),
        })
    }
}
