//! Scenario configuration.
//!
//! A `Scenario` fixes the starting stats of both combatants. The default is
//! the compiled-in duel: a 50 HP / 500 mana player against a 58 HP opponent
//! hitting for 9.
//!
//! `Difficulty` selects the rule variant. Hard mode costs the player one hit
//! point at the start of each of their turns.

use serde::{Deserialize, Serialize};

use super::state::{Battle, Opponent, Player};

/// Rule variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    /// Player loses 1 HP at the start of every player turn.
    Hard,
}

impl Difficulty {
    /// Hit points lost at the start of each player turn.
    #[must_use]
    pub const fn attrition(self) -> i32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Hard => 1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Starting stats for one duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Player starting hit points.
    pub player_hit_points: i32,

    /// Player starting mana.
    pub player_mana: i32,

    /// Opponent starting hit points.
    pub opponent_hit_points: i32,

    /// Opponent damage per attack, before armour.
    pub opponent_damage: i32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            player_hit_points: 50,
            player_mana: 500,
            opponent_hit_points: 58,
            opponent_damage: 9,
        }
    }
}

impl Scenario {
    /// Create a scenario from explicit stats.
    #[must_use]
    pub const fn new(
        player_hit_points: i32,
        player_mana: i32,
        opponent_hit_points: i32,
        opponent_damage: i32,
    ) -> Self {
        Self {
            player_hit_points,
            player_mana,
            opponent_hit_points,
            opponent_damage,
        }
    }

    /// Set player hit points.
    #[must_use]
    pub fn with_player_hit_points(mut self, hit_points: i32) -> Self {
        self.player_hit_points = hit_points;
        self
    }

    /// Set player mana.
    #[must_use]
    pub fn with_player_mana(mut self, mana: i32) -> Self {
        self.player_mana = mana;
        self
    }

    /// Set opponent hit points and damage.
    #[must_use]
    pub fn with_opponent(mut self, hit_points: i32, damage: i32) -> Self {
        self.opponent_hit_points = hit_points;
        self.opponent_damage = damage;
        self
    }

    /// The opening battle: nothing spent, no effects running.
    #[must_use]
    pub const fn initial_battle(&self) -> Battle {
        Battle::new(
            Player::new(self.player_hit_points, self.player_mana),
            Opponent::new(self.opponent_hit_points, self.opponent_damage),
        )
    }
}
