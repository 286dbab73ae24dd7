//! Effect ticks.

use serde::{Deserialize, Serialize};

use crate::core::Battle;

/// Armour granted while the shield is up.
pub const SHIELD_ARMOUR: i32 = 7;

/// Opponent damage dealt per poison tick.
pub const POISON_DAMAGE: i32 = 3;

/// Player mana gained per recharge tick.
pub const RECHARGE_MANA: i32 = 101;

/// What happened during a single effect tick.
///
/// `*_expired` is set when the tick consumed the effect's last turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTick {
    pub shielded: bool,
    pub poisoned: bool,
    pub recharged: bool,
    pub shield_expired: bool,
    pub poison_expired: bool,
    pub recharge_expired: bool,
}

impl EffectTick {
    /// Check if no effect fired.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !(self.shielded || self.poisoned || self.recharged)
    }
}

/// Run one tick of every active effect.
///
/// All three effects are checked independently and each applies at most once.
/// Armour is rewritten on every tick: 7 if the shield was active going in,
/// otherwise 0.
pub fn apply_effects(battle: &mut Battle) -> EffectTick {
    let mut tick = EffectTick::default();
    let timers = &mut battle.timers;

    if timers.shield > 0 {
        battle.player.armour = SHIELD_ARMOUR;
        timers.shield -= 1;
        tick.shielded = true;
        tick.shield_expired = timers.shield == 0;
    } else {
        battle.player.armour = 0;
    }

    if timers.poison > 0 {
        battle.opponent.hit_points -= POISON_DAMAGE;
        timers.poison -= 1;
        tick.poisoned = true;
        tick.poison_expired = timers.poison == 0;
    }

    if timers.recharge > 0 {
        battle.player.mana += RECHARGE_MANA;
        timers.recharge -= 1;
        tick.recharged = true;
        tick.recharge_expired = timers.recharge == 0;
    }

    if !tick.is_idle() {
        tracing::trace!(?tick, timers = ?battle.timers, "effects ticked");
    }

    tick
}
