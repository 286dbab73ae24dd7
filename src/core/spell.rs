//! The spell catalog.
//!
//! Five fixed spells, each with a mana cost and an immediate effect:
//!
//! | Spell | Cost | Effect |
//! |---|---|---|
//! | Magic Missile | 53 | 4 damage |
//! | Drain | 73 | 2 damage, heal 2 |
//! | Shield | 113 | shield for 6 turns |
//! | Poison | 173 | poison for 6 turns |
//! | Recharge | 229 | recharge for 5 turns |
//!
//! Casting is "check, then apply": `Spell::check` decides legality and
//! `Spell::cast` returns a new battle, leaving its input untouched.
//!
//! ```
//! use spellduel::core::{Battle, Opponent, Player, Spell};
//!
//! let battle = Battle::new(Player::new(10, 250), Opponent::new(13, 8));
//! let next = Spell::Poison.cast(&battle).unwrap();
//!
//! assert_eq!(next.timers.poison, 6);
//! assert_eq!(next.player.mana, 77);
//! assert_eq!(next.cost, 173);
//! assert_eq!(battle.cost, 0);
//! ```

use serde::{Deserialize, Serialize};

use super::error::CastError;
use super::state::{Battle, EffectTimers};

/// Turns a freshly cast shield lasts.
pub const SHIELD_TURNS: u8 = 6;

/// Turns a freshly cast poison lasts.
pub const POISON_TURNS: u8 = 6;

/// Turns a freshly cast recharge lasts.
pub const RECHARGE_TURNS: u8 = 5;

/// A castable spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Spell {
    MagicMissile,
    Drain,
    Shield,
    Poison,
    Recharge,
}

impl Spell {
    /// All spells in ascending cost order. Branching follows this order.
    pub const ALL: [Spell; 5] = [
        Spell::MagicMissile,
        Spell::Drain,
        Spell::Shield,
        Spell::Poison,
        Spell::Recharge,
    ];

    /// Mana cost.
    #[must_use]
    pub const fn cost(self) -> i32 {
        match self {
            Spell::MagicMissile => 53,
            Spell::Drain => 73,
            Spell::Shield => 113,
            Spell::Poison => 173,
            Spell::Recharge => 229,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Spell::MagicMissile => "Magic Missile",
            Spell::Drain => "Drain",
            Spell::Shield => "Shield",
            Spell::Poison => "Poison",
            Spell::Recharge => "Recharge",
        }
    }

    /// Remaining turns of this spell's effect, or `None` for instant spells.
    #[must_use]
    pub const fn timer(self, timers: &EffectTimers) -> Option<u8> {
        match self {
            Spell::MagicMissile | Spell::Drain => None,
            Spell::Shield => Some(timers.shield),
            Spell::Poison => Some(timers.poison),
            Spell::Recharge => Some(timers.recharge),
        }
    }

    /// Check whether this spell may be cast against `battle`.
    ///
    /// Legal iff the player is alive, can pay the cost, and the spell's own
    /// effect (if it has one) is not still running.
    pub fn check(self, battle: &Battle) -> Result<(), CastError> {
        if battle.player.is_dead() {
            return Err(CastError::CasterDead);
        }
        if !battle.player.can_afford(self.cost()) {
            return Err(CastError::InsufficientMana {
                cost: self.cost(),
                mana: battle.player.mana,
            });
        }
        match self.timer(&battle.timers) {
            Some(turns_left) if turns_left > 0 => Err(CastError::EffectActive {
                spell: self,
                turns_left,
            }),
            _ => Ok(()),
        }
    }

    /// Cast against a copy of `battle`.
    ///
    /// Returns the new battle with mana paid, the effect applied and the
    /// spell's cost added to the running total.
    pub fn cast(self, battle: &Battle) -> Result<Battle, CastError> {
        self.check(battle)?;
        let mut next = *battle;
        next.cost += self.apply(&mut next);
        Ok(next)
    }

    /// Apply this spell without any legality check.
    ///
    /// Pays the mana and applies the immediate effect. Returns the cost so
    /// the caller can add it to the running total.
    pub fn apply(self, battle: &mut Battle) -> i32 {
        battle.player.mana -= self.cost();
        match self {
            Spell::MagicMissile => {
                battle.opponent.hit_points -= 4;
            }
            Spell::Drain => {
                battle.opponent.hit_points -= 2;
                battle.player.hit_points += 2;
            }
            Spell::Shield => battle.timers.shield = SHIELD_TURNS,
            Spell::Poison => battle.timers.poison = POISON_TURNS,
            Spell::Recharge => battle.timers.recharge = RECHARGE_TURNS,
        }
        self.cost()
    }

    /// Iterate over the spells legal against `battle`, in cost order.
    pub fn castable(battle: &Battle) -> impl Iterator<Item = Spell> + '_ {
        Self::ALL.into_iter().filter(move |spell| spell.check(battle).is_ok())
    }
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
