//! Duel state: player, opponent, active effects and spend.
//!
//! ## Battle
//!
//! A `Battle` is a small `Copy` value. The search never shares one between
//! branches: each candidate spell works on its own copy, so a parent state is
//! never observed half-updated.
//!
//! ## BattleKey
//!
//! The battle minus its accumulated cost. Two battles with the same key have
//! identical futures, which lets the search skip states it has already
//! expanded more cheaply.

use serde::{Deserialize, Serialize};

/// The spell caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Dead at zero or below.
    pub hit_points: i32,

    /// Only ever written by effect resolution (7 while shielded, else 0).
    pub armour: i32,

    pub mana: i32,
}

impl Player {
    /// Create a player with no armour.
    #[must_use]
    pub const fn new(hit_points: i32, mana: i32) -> Self {
        Self {
            hit_points,
            armour: 0,
            mana,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.hit_points <= 0
    }

    /// Check if the player has at least `cost` mana.
    #[inline]
    #[must_use]
    pub const fn can_afford(&self, cost: i32) -> bool {
        self.mana >= cost
    }
}

/// The opponent. Its attack strength is fixed for the whole duel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opponent {
    pub hit_points: i32,
    pub damage: i32,
}

impl Opponent {
    #[must_use]
    pub const fn new(hit_points: i32, damage: i32) -> Self {
        Self { hit_points, damage }
    }

    #[inline]
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.hit_points <= 0
    }
}

/// Remaining ticks for each timed effect. Zero means inactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectTimers {
    pub shield: u8,
    pub poison: u8,
    pub recharge: u8,
}

impl EffectTimers {
    /// Check if any effect is still running.
    #[must_use]
    pub const fn any_active(&self) -> bool {
        self.shield > 0 || self.poison > 0 || self.recharge > 0
    }
}

/// One node of the duel: both combatants, running effects and mana spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Battle {
    pub player: Player,
    pub opponent: Opponent,
    pub timers: EffectTimers,

    /// Total mana spent on spells so far. Never decreases along a path.
    pub cost: i32,
}

impl Battle {
    /// Create a fresh battle: no effects running, nothing spent.
    #[must_use]
    pub const fn new(player: Player, opponent: Opponent) -> Self {
        Self {
            player,
            opponent,
            timers: EffectTimers {
                shield: 0,
                poison: 0,
                recharge: 0,
            },
            cost: 0,
        }
    }

    /// Key identifying this battle's future, independent of what it cost to reach.
    #[must_use]
    pub const fn key(&self) -> BattleKey {
        BattleKey {
            player: self.player,
            opponent: self.opponent,
            timers: self.timers,
        }
    }

    /// Player won: the opponent is dead.
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.opponent.is_dead()
    }

    /// Player lost: the player is dead.
    #[inline]
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.player.is_dead()
    }
}

/// A battle without its cost. See module docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BattleKey {
    player: Player,
    opponent: Opponent,
    timers: EffectTimers,
}
