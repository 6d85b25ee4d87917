//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently visited solutions, preventing cycling
//! and encouraging exploration of new regions of the search space.
//!
//! The loop in [`TabuRunner`] is shared; a [`TabuProblem`] supplies the
//! solution representation, the neighborhood and the policies that make
//! each concrete search behave the way it does.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;
mod types;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{IterationTrace, TabuResult, TabuRunner};
pub use types::{Acceptance, Aspiration, Objective, SearchState, TabuProblem};
