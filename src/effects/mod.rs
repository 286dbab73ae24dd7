//! Timed effect resolution.
//!
//! Three effects run on countdown timers:
//! - Shield: armour 7 while active
//! - Poison: 3 damage to the opponent per tick
//! - Recharge: 101 mana to the player per tick
//!
//! `apply_effects` is called once at the start of each side's turn.

mod timers;

pub use timers::{apply_effects, EffectTick, POISON_DAMAGE, RECHARGE_MANA, SHIELD_ARMOUR};
