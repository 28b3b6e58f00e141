//! Per-actor timed status effects.
//!
//! Effects are appended, never merged; game balance only ever asks "is any
//! effect of kind X present". Each effect loses one turn at the end of every
//! resolved turn and is dropped at zero.

use serde::{Deserialize, Serialize};

use crate::items::types::{Actor, StatusKind};

/// One timed effect attached to a single actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub remaining_turns: u32,
}

/// Both actors' status lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusBoard {
    player: Vec<StatusEffect>,
    boss: Vec<StatusEffect>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_mut(&mut self, actor: Actor) -> &mut Vec<StatusEffect> {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Boss => &mut self.boss,
        }
    }

    pub fn list(&self, actor: Actor) -> &[StatusEffect] {
        match actor {
            Actor::Player => &self.player,
            Actor::Boss => &self.boss,
        }
    }

    /// Appends a new effect. Durations below one turn are lifted to one.
    pub fn apply(&mut self, actor: Actor, kind: StatusKind, turns: u32) {
        self.list_mut(actor).push(StatusEffect {
            kind,
            remaining_turns: turns.max(1),
        });
    }

    /// Decrements every effect on `actor` by one turn and drops the expired
    /// ones. Called exactly once per resolved turn per actor, before any
    /// win/loss check.
    pub fn tick(&mut self, actor: Actor) {
        let list = self.list_mut(actor);
        for effect in list.iter_mut() {
            effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
        }
        list.retain(|e| e.remaining_turns > 0);
    }

    pub fn has(&self, actor: Actor, kind: StatusKind) -> bool {
        self.list(actor).iter().any(|e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_turn_effect_gone_after_one_tick() {
        let mut board = StatusBoard::new();
        board.apply(Actor::Player, StatusKind::EvasiveSmoke, 1);
        assert!(board.has(Actor::Player, StatusKind::EvasiveSmoke));

        board.tick(Actor::Player);
        assert!(!board.has(Actor::Player, StatusKind::EvasiveSmoke));
    }

    #[test]
    fn test_effects_tick_down_independently() {
        let mut board = StatusBoard::new();
        board.apply(Actor::Boss, StatusKind::Poison, 3);
        board.apply(Actor::Boss, StatusKind::Vulnerable, 1);

        board.tick(Actor::Boss);
        assert!(board.has(Actor::Boss, StatusKind::Poison));
        assert!(!board.has(Actor::Boss, StatusKind::Vulnerable));

        board.tick(Actor::Boss);
        board.tick(Actor::Boss);
        assert!(!board.has(Actor::Boss, StatusKind::Poison));
    }

    #[test]
    fn test_duplicate_kinds_are_kept_as_separate_entries() {
        let mut board = StatusBoard::new();
        board.apply(Actor::Player, StatusKind::TempStrength, 1);
        board.apply(Actor::Player, StatusKind::TempStrength, 3);
        assert_eq!(board.list(Actor::Player).len(), 2);

        // The short copy expires, the long one keeps the kind present
        board.tick(Actor::Player);
        assert_eq!(board.list(Actor::Player).len(), 1);
        assert!(board.has(Actor::Player, StatusKind::TempStrength));
    }

    #[test]
    fn test_actors_are_tracked_separately() {
        let mut board = StatusBoard::new();
        board.apply(Actor::Boss, StatusKind::Vulnerable, 2);
        assert!(!board.has(Actor::Player, StatusKind::Vulnerable));

        board.tick(Actor::Player);
        assert!(board.has(Actor::Boss, StatusKind::Vulnerable));
    }

    #[test]
    fn test_zero_turn_apply_is_lifted_to_one() {
        let mut board = StatusBoard::new();
        board.apply(Actor::Player, StatusKind::Weaken, 0);
        assert!(board.has(Actor::Player, StatusKind::Weaken));
        board.tick(Actor::Player);
        assert!(!board.has(Actor::Player, StatusKind::Weaken));
    }
}
