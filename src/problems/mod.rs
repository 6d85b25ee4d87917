//! Concrete searches built on the shared [`TabuRunner`](crate::tabu::TabuRunner).
//!
//! | Search | Solution | Objective | Aspiration | Moves |
//! |---|---|---|---|---|
//! | [`continuous`] | `f64` in `[start, end]` | maximize `x·cos(3πx)` | none | improving only |
//! | [`knapsack`] | inclusion vector | maximize value | improves best | best admissible |
//! | [`tsp`] | city permutation | minimize tour length | none | best admissible |

pub mod continuous;
pub mod knapsack;
pub mod tsp;

pub use continuous::{ContinuousProblem, ContinuousSearch};
pub use knapsack::{KnapsackProblem, KnapsackSearch, KnapsackSolution};
pub use tsp::{Tour, TspProblem, TspSearch};
