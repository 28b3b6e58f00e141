// Score constants
pub const SCORE_BASE_POINTS: u32 = 100;
pub const SCORE_STREAK_BONUS: u32 = 10;

// Player damage constants
pub const BASE_DAMAGE: f64 = 100.0;
pub const FUERZA_DAMAGE_MULTIPLIER: f64 = 1.2;
pub const STRENGTH_STATUS_MULTIPLIER: f64 = 1.5;
pub const VULNERABLE_DAMAGE_MULTIPLIER: f64 = 2.0;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const BASE_CRIT_CHANCE: f64 = 0.10;
pub const CERTERO_CRIT_CHANCE: f64 = 0.30;

// Loot constants
pub const BASE_LOOT_CHANCE: f64 = 0.10;
pub const SUERTE_LOOT_CHANCE: f64 = 0.25;

// Boss attack constants
pub const BOSS_DAMAGE_FRACTION: f64 = 0.2;
pub const ESCUDO_DAMAGE_REDUCTION: f64 = 0.15;
pub const AGIL_EVADE_CHANCE: f64 = 0.2;

// Boss recovery constants
pub const BOSS_HEAL_THRESHOLD: f64 = 0.5;
pub const BOSS_HEAL_FRACTION: f64 = 0.1;
pub const BOSS_REVIVE_FRACTION: f64 = 0.1;

// Potion durations (turns)
pub const POISON_POTION_TURNS: u32 = 3;
pub const WEAKEN_POTION_TURNS: u32 = 3;
pub const VULNERABILITY_POTION_TURNS: u32 = 3;
pub const EVASION_POTION_TURNS: u32 = 2;
pub const STRENGTH_POTION_TURNS: u32 = 3;

// Session defaults
pub const DEFAULT_QUESTION_COUNT: usize = 10;
