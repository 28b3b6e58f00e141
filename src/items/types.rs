use serde::{Deserialize, Serialize};

use crate::core::constants::{
    EVASION_POTION_TURNS, POISON_POTION_TURNS, STRENGTH_POTION_TURNS, VULNERABILITY_POTION_TURNS,
    WEAKEN_POTION_TURNS,
};

/// A permanent perk chosen once per session on the roulette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Passive {
    /// +20% damage on every hit.
    Fuerza,
    /// Crit chance raised from 10% to 30%.
    Certero,
    /// Loot chance raised from 10% to 25%.
    Suerte,
    /// 20% chance to fully evade a boss attack.
    Agil,
    /// Boss attacks deal 15% less damage.
    Escudo,
}

impl Passive {
    pub const ALL: [Passive; 5] = [
        Passive::Fuerza,
        Passive::Certero,
        Passive::Suerte,
        Passive::Agil,
        Passive::Escudo,
    ];

    /// Returns the display name for this passive.
    pub fn name(&self) -> &'static str {
        match self {
            Passive::Fuerza => "Fuerza",
            Passive::Certero => "Certero",
            Passive::Suerte => "Suerte",
            Passive::Agil => "Agil",
            Passive::Escudo => "Escudo",
        }
    }
}

/// Consumable potion kinds. Healing applies instantly; every other kind
/// attaches a timed [`StatusKind`] to one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionKind {
    Healing,
    Poison,
    Weaken,
    Vulnerability,
    Evasion,
    Strength,
}

/// Which actor a status effect is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Boss,
}

/// Timed status kinds. Balance only ever checks presence, never stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Poison,
    Weaken,
    Vulnerable,
    EvasiveSmoke,
    TempStrength,
}

impl PotionKind {
    pub const ALL: [PotionKind; 6] = [
        PotionKind::Healing,
        PotionKind::Poison,
        PotionKind::Weaken,
        PotionKind::Vulnerability,
        PotionKind::Evasion,
        PotionKind::Strength,
    ];

    /// Returns the display name for this potion.
    pub fn name(&self) -> &'static str {
        match self {
            PotionKind::Healing => "Healing Potion",
            PotionKind::Poison => "Poison Vial",
            PotionKind::Weaken => "Weakening Brew",
            PotionKind::Vulnerability => "Vulnerability Hex",
            PotionKind::Evasion => "Evasive Smoke",
            PotionKind::Strength => "Strength Tonic",
        }
    }

    /// The status this potion attaches, the target actor, and the duration
    /// in turns. `None` for the instant healing potion.
    pub fn status_effect(&self) -> Option<(Actor, StatusKind, u32)> {
        match self {
            PotionKind::Healing => None,
            PotionKind::Poison => Some((Actor::Boss, StatusKind::Poison, POISON_POTION_TURNS)),
            PotionKind::Weaken => Some((Actor::Boss, StatusKind::Weaken, WEAKEN_POTION_TURNS)),
            PotionKind::Vulnerability => Some((
                Actor::Boss,
                StatusKind::Vulnerable,
                VULNERABILITY_POTION_TURNS,
            )),
            PotionKind::Evasion => Some((
                Actor::Player,
                StatusKind::EvasiveSmoke,
                EVASION_POTION_TURNS,
            )),
            PotionKind::Strength => Some((
                Actor::Player,
                StatusKind::TempStrength,
                STRENGTH_POTION_TURNS,
            )),
        }
    }
}

/// An ordered multiset of potions. Duplicates are kept in pickup order and
/// consumed first-in first-out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    potions: Vec<PotionKind>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: PotionKind) {
        self.potions.push(kind);
    }

    /// Removes the oldest matching potion. Returns false if none was held.
    pub fn remove(&mut self, kind: PotionKind) -> bool {
        match self.potions.iter().position(|p| *p == kind) {
            Some(idx) => {
                self.potions.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, kind: PotionKind) -> usize {
        self.potions.iter().filter(|p| **p == kind).count()
    }

    pub fn len(&self) -> usize {
        self.potions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.potions.is_empty()
    }

    pub fn potions(&self) -> &[PotionKind] {
        &self.potions
    }
}
