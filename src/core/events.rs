//! Battle events emitted by turn resolution.
//!
//! The presentation layer maps these to animations, audio cues, and the
//! combat log. The engine never touches UI concerns directly; every variant
//! carries a prerendered `message` the host can show as-is.

use crate::items::types::PotionKind;

/// A single event produced while resolving a turn or using a potion.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // ── Player turn ─────────────────────────────────────────────
    /// The player's correct answer landed a hit on the boss.
    PlayerHit {
        damage: u32,
        was_crit: bool,
        message: String,
    },

    /// The boss dodged an otherwise-successful hit (still counts as a
    /// correct answer for accuracy).
    BossDodged { message: String },

    /// A potion dropped after a successful hit.
    LootDrop {
        potion: PotionKind,
        message: String,
    },

    // ── Boss counter-attack ─────────────────────────────────────
    /// The boss attack was fully evaded (smoke status or Agil roll).
    PlayerEvaded { message: String },

    /// The boss counter-attack landed on the player.
    BossHit { damage: u32, message: String },

    /// The boss healed below half HP.
    BossHeal { amount: u32, message: String },

    // ── Items ───────────────────────────────────────────────────
    /// A potion was drunk from the inventory.
    PotionUsed {
        potion: PotionKind,
        message: String,
    },

    // ── Phase outcomes ──────────────────────────────────────────
    /// The boss came back at a fraction of its HP (finish phase entry or
    /// the finish-phase mercy rule).
    Revive { boss_hp: u32, message: String },

    /// The session ended in a win.
    Victory { score: u32, message: String },

    /// The session ended in a loss.
    Defeat { message: String },
}
