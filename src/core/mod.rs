//! Core duel types: combatants, battle state, spells, scenario configuration.
//!
//! Everything here is a plain value. Turn order lives in `rules`, the
//! search in `solver`.

pub mod config;
pub mod error;
pub mod spell;
pub mod state;

pub use config::{Difficulty, Scenario};
pub use error::CastError;
pub use spell::Spell;
pub use state::{Battle, BattleKey, EffectTimers, Opponent, Player};
