//! Round resolution.
//!
//! One round is the player's turn followed by the opponent's:
//!
//! 1. Hard mode: player loses 1 HP, dying ends the round in defeat
//! 2. Effects tick (player upkeep)
//! 3. Opponent dead: victory at the current cost
//! 4. For each castable spell, in cost order:
//!    cast, effects tick (opponent upkeep), then either the opponent is dead
//!    (victory) or it attacks for `max(damage - armour, 1)`
//!
//! `RulesEngine` is the seam the search drives; `TurnEngine` is the duel's
//! implementation of it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Battle, Difficulty, Spell};
use crate::effects::apply_effects;

/// Where a branch ended up after the opponent's half of the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchStatus {
    /// Opponent died before it could attack.
    Victory,
    /// Both alive; the duel continues next round.
    Ongoing,
    /// Player died to the attack. Never expanded further.
    Defeat,
}

/// One candidate continuation: the spell cast and the resulting battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub spell: Spell,
    pub battle: Battle,
    pub status: BranchStatus,
}

/// Branches from a single round. At most one per spell.
pub type Branches = SmallVec<[Branch; 5]>;

/// Result of resolving a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player died before acting.
    Defeat,
    /// Opponent died during the player's upkeep. No spell was cast.
    Victory(Battle),
    /// One branch per castable spell. Empty when nothing is castable.
    Branches(Branches),
}

impl RoundOutcome {
    /// Check if this round produced no way forward at all.
    #[must_use]
    pub fn is_dead_end(&self) -> bool {
        match self {
            RoundOutcome::Defeat => true,
            RoundOutcome::Victory(_) => false,
            RoundOutcome::Branches(branches) => branches
                .iter()
                .all(|b| b.status == BranchStatus::Defeat),
        }
    }
}

/// Rules engine trait.
///
/// Implementations must be deterministic: the search relies on the same
/// battle always producing the same branches in the same order.
pub trait RulesEngine {
    /// Resolve one full round starting at the beginning of the player's turn.
    fn resolve_round(&self, battle: &Battle) -> RoundOutcome;
}

/// The duel's rules for a given difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEngine {
    difficulty: Difficulty,
}

impl TurnEngine {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Resolve the opponent's half of the round for a battle where `spell`
    /// has just been cast.
    fn finish_round(spell: Spell, mut battle: Battle) -> Branch {
        apply_effects(&mut battle);

        let status = if battle.is_won() {
            BranchStatus::Victory
        } else {
            opponent_strike(&mut battle);
            if battle.is_lost() {
                BranchStatus::Defeat
            } else {
                BranchStatus::Ongoing
            }
        };

        Branch {
            spell,
            battle,
            status,
        }
    }
}

impl RulesEngine for TurnEngine {
    fn resolve_round(&self, battle: &Battle) -> RoundOutcome {
        let mut battle = *battle;

        let attrition = self.difficulty.attrition();
        if attrition > 0 {
            battle.player.hit_points -= attrition;
            if battle.is_lost() {
                return RoundOutcome::Defeat;
            }
        }

        apply_effects(&mut battle);
        if battle.is_won() {
            return RoundOutcome::Victory(battle);
        }

        let branches: Branches = Spell::ALL
            .into_iter()
            .filter_map(|spell| spell.cast(&battle).ok().map(|next| (spell, next)))
            .map(|(spell, next)| Self::finish_round(spell, next))
            .collect();

        tracing::trace!(
            difficulty = %self.difficulty,
            cost = battle.cost,
            branches = branches.len(),
            "round resolved"
        );

        RoundOutcome::Branches(branches)
    }
}

/// The opponent attacks. Always deals at least 1 damage.
///
/// Returns the damage dealt.
pub fn opponent_strike(battle: &mut Battle) -> i32 {
    let damage = (battle.opponent.damage - battle.player.armour).max(1);
    battle.player.hit_points -= damage;
    damage
}
