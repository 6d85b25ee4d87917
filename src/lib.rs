//! Tabu Search engine for three classic problems.
//!
//! - **Continuous**: maximize `f(x) = x·cos(3πx)` over an interval.
//! - **Knapsack**: maximize packed value under a weight capacity.
//! - **TSP**: minimize the length of a closed tour through a set of cities.
//!
//! # Architecture
//!
//! A single loop in [`tabu::TabuRunner`] drives every search. Each problem
//! implements [`tabu::TabuProblem`]: initial solution, evaluation,
//! neighborhood, feasibility and equality, plus the acceptance and
//! aspiration policies that distinguish it. Progress goes to a caller-owned
//! [`progress::ProgressSink`] at iterations 1, 2, 10 and the last one.
//!
//! Runs are synchronous and single-threaded. All randomness comes from the
//! generator passed in, so a seeded generator reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_tabu::model::Item;
//! use u_tabu::problems::KnapsackSearch;
//! use u_tabu::progress::RecordingSink;
//! use u_tabu::random::create_rng;
//! use u_tabu::tabu::TabuConfig;
//!
//! let items = vec![Item::new(1, 2.0, 3.0), Item::new(2, 3.0, 4.0), Item::new(3, 4.0, 5.0)];
//! let search = KnapsackSearch::new(TabuConfig::new(50, 5), items, 5.0, create_rng(42))?;
//!
//! let mut sink = RecordingSink::new();
//! let best = search.optimize(&mut sink)?;
//! assert_eq!(best.value, 7.0);
//! assert_eq!(sink.iterations(), vec![1, 2, 10, 50]);
//! # Ok::<(), u_tabu::TabuError>(())
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod problems;
pub mod progress;
pub mod random;
pub mod tabu;

pub use error::{Result, TabuError};
