//! End-to-end duel searches.
//!
//! These tests run the full solver against known duels and replay the
//! reported spell sequences through the turn rules to check they really win
//! at the reported cost.

use spellduel::core::{Battle, Difficulty, Scenario, Spell};
use spellduel::rules::{BranchStatus, RoundOutcome, RulesEngine, TurnEngine};
use spellduel::solver::{solve, Search, SearchConfig, SearchOutcome, SearchStrategy};

/// Replay `spells` from the scenario's opening battle.
///
/// Returns the final battle if the sequence wins, panicking if any spell is
/// not castable or the player dies on the way.
fn replay(scenario: &Scenario, difficulty: Difficulty, spells: &[Spell]) -> Battle {
    let engine = TurnEngine::new(difficulty);
    let mut battle = scenario.initial_battle();

    for (i, &spell) in spells.iter().enumerate() {
        let branch = match engine.resolve_round(&battle) {
            RoundOutcome::Branches(branches) => branches
                .into_iter()
                .find(|b| b.spell == spell)
                .unwrap_or_else(|| panic!("{} not castable in round {}", spell, i + 1)),
            other => panic!("round {} ended early: {:?}", i + 1, other),
        };

        assert_eq!(branch.battle.cost, battle.cost + spell.cost());
        battle = branch.battle;

        match branch.status {
            BranchStatus::Victory => {
                assert_eq!(i + 1, spells.len(), "won before the sequence ended");
                return battle;
            }
            BranchStatus::Ongoing => {}
            BranchStatus::Defeat => panic!("player died after {}", spell),
        }
    }

    // Last kill came from an effect tick at the start of the next turn.
    match engine.resolve_round(&battle) {
        RoundOutcome::Victory(won) => won,
        other => panic!("sequence did not win: {:?}", other),
    }
}

fn assert_replays(scenario: &Scenario, difficulty: Difficulty, outcome: &SearchOutcome) {
    let SearchOutcome::Won { cost, spells, .. } = outcome else {
        panic!("expected a win, got {:?}", outcome);
    };

    let won = replay(scenario, difficulty, spells);
    assert!(won.is_won());
    assert_eq!(won.cost, *cost);
    assert_eq!(spells.iter().map(|s| s.cost()).sum::<i32>(), *cost);
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_poison_then_missile() {
    let scenario = Scenario::new(10, 250, 13, 8);
    let outcome = solve(&scenario, Difficulty::Easy);

    assert_eq!(
        outcome,
        SearchOutcome::Won {
            cost: 226,
            spells: vec![Spell::Poison, Spell::MagicMissile],
            rounds: 2,
        }
    );
    assert_replays(&scenario, Difficulty::Easy, &outcome);
}

#[test]
fn test_five_spell_example() {
    let scenario = Scenario::new(10, 250, 14, 8);
    let outcome = solve(&scenario, Difficulty::Easy);

    assert_eq!(outcome.as_tuple(), (true, 641));
    assert_replays(&scenario, Difficulty::Easy, &outcome);
}

#[test]
fn test_small_examples_lost_in_hard_mode() {
    for scenario in [Scenario::new(10, 250, 13, 8), Scenario::new(10, 250, 14, 8)] {
        assert_eq!(solve(&scenario, Difficulty::Hard), SearchOutcome::Lost);
    }
}

// =============================================================================
// Built-in Duel
// =============================================================================

#[test]
fn test_default_duel_easy() {
    let scenario = Scenario::default();
    let outcome = solve(&scenario, Difficulty::Easy);

    assert_eq!(outcome.as_tuple(), (true, 1269));
    assert_replays(&scenario, Difficulty::Easy, &outcome);
}

#[test]
fn test_default_duel_hard() {
    let scenario = Scenario::default();
    let easy = solve(&scenario, Difficulty::Easy);
    let hard = solve(&scenario, Difficulty::Hard);

    assert_eq!(hard.as_tuple(), (true, 1309));
    assert!(hard.cost() >= easy.cost());
    assert_replays(&scenario, Difficulty::Hard, &hard);
}

#[test]
fn test_strategies_agree_on_default_duel() {
    let scenario = Scenario::default();

    for difficulty in [Difficulty::Easy, Difficulty::Hard] {
        let ordered = solve(&scenario, difficulty);

        let mut fifo = Search::for_difficulty(
            difficulty,
            SearchConfig::default().with_strategy(SearchStrategy::BreadthFirst),
        );
        let layered = fifo.run(&scenario);

        assert_eq!(layered.cost(), ordered.cost(), "{} mode", difficulty);
        assert_replays(&scenario, difficulty, &layered);
    }
}

#[test]
fn test_dedupe_does_not_change_cost() {
    let scenario = Scenario::default();

    let mut plain = Search::for_difficulty(Difficulty::Easy, SearchConfig::default().with_dedupe(false));
    let mut deduped = Search::for_difficulty(Difficulty::Easy, SearchConfig::default());

    let a = plain.run(&scenario);
    let b = deduped.run(&scenario);

    assert_eq!(a.cost(), b.cost());
    assert!(deduped.stats().states_expanded <= plain.stats().states_expanded);
    assert_eq!(plain.stats().duplicates_skipped, 0);
}

// =============================================================================
// Bounds and Dead Ends
// =============================================================================

#[test]
fn test_capacity_exhaustion_reports_loss() {
    let scenario = Scenario::default();

    for strategy in [SearchStrategy::CostOrdered, SearchStrategy::BreadthFirst] {
        let mut search = Search::for_difficulty(
            Difficulty::Easy,
            SearchConfig::default().with_capacity(10).with_strategy(strategy),
        );
        let outcome = search.run(&scenario);

        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(outcome.as_tuple(), (false, 0));
        assert_eq!(search.stats().states_admitted, 10);
    }
}

#[test]
fn test_no_affordable_spell_is_lost() {
    let scenario = Scenario::default().with_player_mana(52);
    let mut search = Search::for_difficulty(Difficulty::Easy, SearchConfig::default());

    assert_eq!(search.run(&scenario), SearchOutcome::Lost);
    assert_eq!(search.stats().states_expanded, 1);
    assert_eq!(search.stats().dead_ends, 1);
}

#[test]
fn test_dead_player_is_lost() {
    let scenario = Scenario::default().with_player_hit_points(0);
    assert_eq!(solve(&scenario, Difficulty::Easy), SearchOutcome::Lost);
}

#[test]
fn test_stats_populated() {
    let mut search = Search::for_difficulty(Difficulty::Easy, SearchConfig::default());
    search.run(&Scenario::default());

    let stats = search.stats();
    assert!(stats.states_expanded > 0);
    assert!(stats.states_admitted >= stats.states_expanded);
    assert!(stats.victories_seen >= 1);
    assert!(stats.max_round > 0);
    assert!(stats.peak_frontier > 0);
}
