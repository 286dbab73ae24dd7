//! Errors for rejected spell casts.
//!
//! A rejected cast is an ordinary outcome during search (the branch is simply
//! not taken), so these are plain values rather than panics.

use super::spell::Spell;

/// Why a spell could not be cast against a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("Caster is dead")]
    CasterDead,

    #[error("Not enough mana: spell costs {cost}, caster has {mana}")]
    InsufficientMana { cost: i32, mana: i32 },

    /// The spell's effect is still running; it cannot be refreshed or stacked.
    #[error("{spell} is still active for {turns_left} more turn(s)")]
    EffectActive { spell: Spell, turns_left: u8 },
}
