//! Minimum-cost search over duel states.
//!
//! The search is seeded with the scenario's opening battle and repeatedly
//! asks the rules engine to resolve one round from a frontier node. Winning
//! branches end the search; ongoing branches are admitted to the frontier
//! until the configured capacity runs out.

use std::time::Instant;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Battle, BattleKey, Difficulty, Scenario, Spell};
use crate::rules::{BranchStatus, RoundOutcome, RulesEngine, TurnEngine};

use super::config::{SearchConfig, SearchStrategy};
use super::frontier::{self, Frontier};
use super::node::SearchNode;
use super::stats::SearchStats;

/// Result of a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The opponent can be beaten.
    Won {
        /// Mana spent by the cheapest winning sequence found.
        cost: i32,
        /// Spells of that sequence, in casting order.
        spells: Vec<Spell>,
        /// Rounds resolved before the opponent died.
        rounds: u32,
    },
    /// Every line of play ends with the player dead or out of mana.
    Lost,
    /// The frontier filled up before a win was found.
    Exhausted,
}

impl SearchOutcome {
    #[must_use]
    pub fn won(&self) -> bool {
        matches!(self, SearchOutcome::Won { .. })
    }

    /// Mana spent on the winning sequence, or 0 without a win.
    #[must_use]
    pub fn cost(&self) -> i32 {
        match self {
            SearchOutcome::Won { cost, .. } => *cost,
            SearchOutcome::Lost | SearchOutcome::Exhausted => 0,
        }
    }

    /// `(won, cost)`.
    #[must_use]
    pub fn as_tuple(&self) -> (bool, i32) {
        (self.won(), self.cost())
    }

    fn from_node(node: SearchNode) -> Self {
        SearchOutcome::Won {
            cost: node.cost(),
            spells: node.spells.iter().copied().collect(),
            rounds: node.round,
        }
    }
}

/// Main search context.
///
/// Generic over the rules engine. Owns the configuration and the statistics
/// of the most recent run.
pub struct Search<E: RulesEngine> {
    engine: E,
    config: SearchConfig,
    stats: SearchStats,
}

impl Search<TurnEngine> {
    /// Search context for the duel rules at `difficulty`.
    pub fn for_difficulty(difficulty: Difficulty, config: SearchConfig) -> Self {
        Self::new(TurnEngine::new(difficulty), config)
    }
}

impl<E: RulesEngine> Search<E> {
    /// Create a new search context.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search from the scenario's opening battle.
    pub fn run(&mut self, scenario: &Scenario) -> SearchOutcome {
        self.run_from(scenario.initial_battle())
    }

    /// Search from an arbitrary battle at the start of the player's turn.
    pub fn run_from(&mut self, battle: Battle) -> SearchOutcome {
        let start = Instant::now();
        self.stats.reset();

        let outcome = self.explore(battle);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        tracing::debug!(
            strategy = ?self.config.strategy,
            won = outcome.won(),
            cost = outcome.cost(),
            expanded = self.stats.states_expanded,
            admitted = self.stats.states_admitted,
            peak_frontier = self.stats.peak_frontier,
            time_us = self.stats.time_us,
            "search finished"
        );

        outcome
    }

    fn explore(&mut self, seed: Battle) -> SearchOutcome {
        let eager = self.config.strategy == SearchStrategy::BreadthFirst;
        let dedupe = self.config.dedupes();
        let capacity = self.config.frontier_capacity as u64;

        let mut frontier = frontier::for_strategy(self.config.strategy);
        let mut expanded: FxHashSet<BattleKey> = FxHashSet::default();

        frontier.push(SearchNode::root(seed));
        self.stats.states_admitted = 1;
        self.stats.observe_frontier(frontier.len());

        while let Some(node) = frontier.pop() {
            if node.is_victory {
                return SearchOutcome::from_node(node);
            }
            if dedupe && !expanded.insert(node.battle.key()) {
                self.stats.duplicates_skipped += 1;
                continue;
            }

            self.stats.states_expanded += 1;
            self.stats.max_round = self.stats.max_round.max(node.round);

            let branches = match self.engine.resolve_round(&node.battle) {
                RoundOutcome::Defeat => {
                    self.stats.dead_ends += 1;
                    continue;
                }
                RoundOutcome::Victory(battle) => {
                    let won = node.upkeep_victory(battle);
                    if let Some(outcome) = self.victory(won, eager, frontier.as_mut()) {
                        return outcome;
                    }
                    continue;
                }
                RoundOutcome::Branches(branches) => branches,
            };

            if branches.is_empty() {
                self.stats.dead_ends += 1;
                continue;
            }

            for branch in &branches {
                match branch.status {
                    BranchStatus::Defeat => self.stats.dead_ends += 1,
                    BranchStatus::Victory => {
                        let won = node.child(branch);
                        if let Some(outcome) = self.victory(won, eager, frontier.as_mut()) {
                            return outcome;
                        }
                    }
                    BranchStatus::Ongoing => {
                        if self.stats.states_admitted >= capacity {
                            tracing::warn!(
                                capacity,
                                round = node.round,
                                "frontier capacity exhausted, reporting loss"
                            );
                            return SearchOutcome::Exhausted;
                        }
                        frontier.push(node.child(branch));
                        self.stats.states_admitted += 1;
                    }
                }
            }

            self.stats.observe_frontier(frontier.len());
        }

        SearchOutcome::Lost
    }

    /// Handle a winning node: report it now, or queue it so cheaper
    /// states are still expanded first.
    fn victory(
        &mut self,
        node: SearchNode,
        eager: bool,
        frontier: &mut dyn Frontier,
    ) -> Option<SearchOutcome> {
        self.stats.victories_seen += 1;
        tracing::trace!(cost = node.cost(), round = node.round, "victory found");

        if eager {
            Some(SearchOutcome::from_node(node))
        } else {
            frontier.push(node);
            None
        }
    }

    /// Get statistics of the last run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the engine reference.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Solve a scenario at `difficulty` with the default configuration.
pub fn solve(scenario: &Scenario, difficulty: Difficulty) -> SearchOutcome {
    Search::for_difficulty(difficulty, SearchConfig::default()).run(scenario)
}
