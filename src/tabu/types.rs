//! Core trait and policies for Tabu Search problems.

use rand::Rng;

use crate::error::Result;

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Larger values are better.
    Maximize,
    /// Smaller values are better.
    Minimize,
}

impl Objective {
    /// Returns `true` if `candidate` is strictly better than `reference`.
    pub fn is_better(self, candidate: f64, reference: f64) -> bool {
        match self {
            Objective::Maximize => candidate > reference,
            Objective::Minimize => candidate < reference,
        }
    }

    /// The value every real solution beats.
    pub fn worst(self) -> f64 {
        match self {
            Objective::Maximize => f64::NEG_INFINITY,
            Objective::Minimize => f64::INFINITY,
        }
    }
}

/// When a tabu neighbor may still be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspiration {
    /// Tabu neighbors are never chosen.
    None,
    /// A tabu neighbor is admissible if it strictly beats the global best.
    ImprovesBest,
}

/// How the search moves between solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Move to the best admissible neighbor every iteration, even if it is
    /// worse than the current solution, then record the current solution in
    /// the tabu list (also when no move was possible).
    BestAdmissible,
    /// Move only to a neighbor that strictly beats the best solution; only
    /// accepted solutions are recorded in the tabu list.
    ImproveOnly,
}

/// Snapshot handed to [`TabuProblem::progress_message`].
#[derive(Debug, Clone, Copy)]
pub struct SearchState<'a, S> {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Current solution.
    pub current: &'a S,
    /// Objective value of the current solution.
    pub current_value: f64,
    /// Best solution so far.
    pub best: &'a S,
    /// Objective value of the best solution.
    pub best_value: f64,
}

/// Defines an optimization problem for Tabu Search.
///
/// Users implement this trait to specify:
/// - How to create an initial solution
/// - How to evaluate a solution
/// - How to generate the neighborhood of a solution
/// - Which solutions are feasible and when two solutions are the same
///
/// The policies (`objective`, `aspiration`, `acceptance`) select how the
/// shared loop in [`TabuRunner`](super::TabuRunner) treats the problem.
pub trait TabuProblem {
    /// The solution representation.
    type Solution: Clone;

    /// Creates the starting solution.
    ///
    /// May fail when the instance admits no usable starting point.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution>;

    /// Objective value of a solution.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Generates neighbors of `solution`.
    ///
    /// Infeasible neighbors may be returned; the runner drops them.
    fn neighbors<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Vec<Self::Solution>;

    /// Whether a solution satisfies the hard constraints.
    fn is_feasible(&self, _solution: &Self::Solution) -> bool {
        true
    }

    /// Whether two solutions are the same for tabu purposes.
    fn equals(&self, a: &Self::Solution, b: &Self::Solution) -> bool;

    /// Optimization direction.
    fn objective(&self) -> Objective;

    /// Aspiration policy.
    fn aspiration(&self) -> Aspiration {
        Aspiration::None
    }

    /// Move/record policy.
    fn acceptance(&self) -> Acceptance {
        Acceptance::BestAdmissible
    }

    /// Status line reported at the scheduled iterations.
    fn progress_message(&self, state: &SearchState<'_, Self::Solution>) -> String;

    /// Extra text appended to the message of the final iteration.
    fn final_summary(&self, _best: &Self::Solution, _best_value: f64) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_is_better() {
        assert!(Objective::Maximize.is_better(2.0, 1.0));
        assert!(!Objective::Maximize.is_better(1.0, 1.0));
        assert!(Objective::Minimize.is_better(1.0, 2.0));
        assert!(!Objective::Minimize.is_better(2.0, 2.0));
    }

    #[test]
    fn test_objective_worst() {
        assert!(Objective::Maximize.is_better(-1e300, Objective::Maximize.worst()));
        assert!(Objective::Minimize.is_better(1e300, Objective::Minimize.worst()));
    }
}
