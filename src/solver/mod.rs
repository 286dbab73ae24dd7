//! Minimum-cost search for a winning spell sequence.
//!
//! The solver explores the duel's state graph from the opening battle,
//! driving a `RulesEngine` one round at a time, and reports the cheapest
//! winning sequence it finds within a bounded frontier.
//!
//! ## Usage
//!
//! ```
//! use spellduel::core::{Difficulty, Scenario};
//! use spellduel::solver::{Search, SearchConfig};
//!
//! let scenario = Scenario::new(10, 250, 13, 8);
//! let mut search = Search::for_difficulty(Difficulty::Easy, SearchConfig::default());
//!
//! assert_eq!(search.run(&scenario).as_tuple(), (true, 226));
//! ```

pub mod config;
pub mod frontier;
pub mod node;
pub mod search;
pub mod stats;

pub use config::{SearchConfig, SearchStrategy};
pub use frontier::{CostFrontier, FifoFrontier, Frontier};
pub use node::SearchNode;
pub use search::{solve, Search, SearchOutcome};
pub use stats::SearchStats;
