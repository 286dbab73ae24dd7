//! Frontier nodes.

use im::Vector;

use crate::core::{Battle, Spell};
use crate::rules::{Branch, BranchStatus};

/// A battle waiting in the frontier, with the spells that led to it.
///
/// `spells` is a persistent vector: siblings share their parent's history
/// and cloning is O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub battle: Battle,

    /// Spells cast from the seed, in order.
    pub spells: Vector<Spell>,

    /// Rounds resolved to reach this node. The seed is round 0.
    pub round: u32,

    /// Opponent is dead; popping this node ends a cost-ordered search.
    pub is_victory: bool,
}

impl SearchNode {
    /// Create the seed node.
    #[must_use]
    pub fn root(battle: Battle) -> Self {
        Self {
            battle,
            spells: Vector::new(),
            round: 0,
            is_victory: battle.is_won(),
        }
    }

    /// Node for a branch produced by resolving this node's round.
    #[must_use]
    pub fn child(&self, branch: &Branch) -> Self {
        let mut spells = self.spells.clone();
        spells.push_back(branch.spell);
        Self {
            battle: branch.battle,
            spells,
            round: self.round + 1,
            is_victory: branch.status == BranchStatus::Victory,
        }
    }

    /// Node for an opponent killed during upkeep, before any spell.
    #[must_use]
    pub fn upkeep_victory(&self, battle: Battle) -> Self {
        Self {
            battle,
            spells: self.spells.clone(),
            round: self.round + 1,
            is_victory: true,
        }
    }

    /// Mana spent to reach this node.
    #[inline]
    #[must_use]
    pub fn cost(&self) -> i32 {
        self.battle.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Opponent, Player};

    #[test]
    fn test_child_extends_history() {
        let root = SearchNode::root(Battle::new(Player::new(10, 250), Opponent::new(13, 8)));
        let next = Spell::Poison.cast(&root.battle).unwrap();

        let child = root.child(&Branch {
            spell: Spell::Poison,
            battle: next,
            status: BranchStatus::Ongoing,
        });

        assert_eq!(child.round, 1);
        assert_eq!(child.cost(), 173);
        assert_eq!(child.spells.iter().copied().collect::<Vec<_>>(), vec![Spell::Poison]);
        assert!(!child.is_victory);
        assert!(root.spells.is_empty());
    }

    #[test]
    fn test_upkeep_victory_keeps_history() {
        let root = SearchNode::root(Battle::new(Player::new(10, 250), Opponent::new(13, 8)));
        let mut won = root.battle;
        won.opponent.hit_points = 0;

        let node = root.upkeep_victory(won);
        assert!(node.is_victory);
        assert_eq!(node.round, 1);
        assert!(node.spells.is_empty());
    }

    #[test]
    fn test_root_already_won() {
        let root = SearchNode::root(Battle::new(Player::new(10, 250), Opponent::new(0, 8)));
        assert!(root.is_victory);
    }
}
