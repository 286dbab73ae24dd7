//! Turn rules.
//!
//! `RulesEngine` resolves one round of the duel into its possible
//! continuations. The search drives it without knowing the duel's rules.

pub mod engine;

pub use engine::{opponent_strike, Branch, BranchStatus, Branches, RoundOutcome, RulesEngine, TurnEngine};
