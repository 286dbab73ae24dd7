//! Prints the cheapest win for the built-in duel in both difficulties.

use spellduel::core::{Difficulty, Scenario};
use spellduel::solver::{Search, SearchConfig, SearchOutcome};

fn report(difficulty: Difficulty, outcome: &SearchOutcome) -> String {
    let (won, cost) = outcome.as_tuple();
    format!(
        "{} mode : player {}, cost {}",
        difficulty,
        if won { "won" } else { "lost" },
        cost
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let scenario = Scenario::default();

    for difficulty in [Difficulty::Easy, Difficulty::Hard] {
        let mut search = Search::for_difficulty(difficulty, SearchConfig::default());
        let outcome = search.run(&scenario);

        if let SearchOutcome::Won { spells, rounds, .. } = &outcome {
            tracing::info!(
                %difficulty,
                rounds,
                spells = ?spells.iter().map(|s| s.name()).collect::<Vec<_>>(),
                expanded = search.stats().states_expanded,
                "cheapest win"
            );
        }

        println!("{}", report(difficulty, &outcome));
    }
}
