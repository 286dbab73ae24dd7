//! # spellduel
//!
//! Finds the least mana a wizard must spend to beat an opponent in a
//! deterministic duel.
//!
//! ## Rules
//!
//! Each round the player casts one spell, then the opponent attacks for
//! `max(damage - armour, 1)`. Timed effects (shield, poison, recharge) tick
//! at the start of both sides' turns. Hard mode also drains 1 HP from the
//! player at the start of each of their turns.
//!
//! ## Modules
//!
//! - `core`: Battle state, spells, scenario configuration
//! - `effects`: Timed effect ticks
//! - `rules`: Round resolution and the `RulesEngine` trait
//! - `solver`: Bounded minimum-cost search

pub mod core;
pub mod effects;
pub mod rules;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Battle, BattleKey, CastError, Difficulty, EffectTimers, Opponent, Player, Scenario, Spell,
};

pub use crate::effects::{apply_effects, EffectTick};

pub use crate::rules::{Branch, BranchStatus, RoundOutcome, RulesEngine, TurnEngine};

pub use crate::solver::{
    solve, Search, SearchConfig, SearchNode, SearchOutcome, SearchStats, SearchStrategy,
};
