//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate initial solution (it is both current and best)
//! 2. At each iteration:
//!    a. Generate neighborhood, drop infeasible neighbors
//!    b. Select per the problem's acceptance policy:
//!       - best admissible: best non-tabu neighbor (or tabu neighbor
//!         satisfying aspiration), move to it, record current in the tabu list
//!       - improve only: accept a non-tabu neighbor only if it beats the
//!         best, record it in the tabu list
//!    c. Update global best if strictly improved
//!    d. Report progress at iterations 1, 2, 10 and the last one
//! 3. Terminate after max iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use rand::Rng;

use super::config::TabuConfig;
use super::list::TabuList;
use super::types::{Acceptance, Aspiration, SearchState, TabuProblem};
use crate::error::Result;
use crate::progress::{is_report_iteration, ProgressSink};

/// State observed at the end of one iteration.
#[derive(Debug, Clone)]
pub struct IterationTrace<S> {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Current solution after the iteration.
    pub current: S,
    /// Objective value of the current solution.
    pub current_value: f64,
    /// Best objective value so far.
    pub best_value: f64,
    /// Tabu list length after the iteration.
    pub tabu_len: usize,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S> {
    /// Best solution found.
    pub best: S,
    /// Objective value of the best solution.
    pub best_value: f64,
    /// Current solution when the run ended.
    pub current: S,
    /// Objective value of the final current solution.
    pub current_value: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = initial solution).
    pub best_iteration: usize,
    /// Best value at the end of each iteration.
    pub best_history: Vec<f64>,
    /// Per-iteration trace, empty unless [`TabuConfig::record_trace`] is set.
    pub trace: Vec<IterationTrace<S>>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    ///
    /// The configuration is validated before anything else happens. All
    /// randomness comes from `rng`, so a seeded generator gives
    /// reproducible runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::Rng;
    /// use u_tabu::progress::NoopSink;
    /// use u_tabu::random::create_rng;
    /// use u_tabu::tabu::{Objective, SearchState, TabuConfig, TabuProblem, TabuRunner};
    ///
    /// struct Climb;
    /// impl TabuProblem for Climb {
    ///     type Solution = i32;
    ///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> u_tabu::Result<i32> { Ok(0) }
    ///     fn evaluate(&self, x: &i32) -> f64 { -((x - 3) * (x - 3)) as f64 }
    ///     fn neighbors<R: Rng>(&self, x: &i32, _rng: &mut R) -> Vec<i32> { vec![x - 1, x + 1] }
    ///     fn equals(&self, a: &i32, b: &i32) -> bool { a == b }
    ///     fn objective(&self) -> Objective { Objective::Maximize }
    ///     fn progress_message(&self, s: &SearchState<'_, i32>) -> String {
    ///         format!("best = {}", s.best)
    ///     }
    /// }
    ///
    /// let config = TabuConfig::new(20, 3);
    /// let result = TabuRunner::run(&Climb, &config, &mut create_rng(1), &mut NoopSink).unwrap();
    /// assert_eq!(result.best, 3);
    /// ```
    pub fn run<P, R, K>(
        problem: &P,
        config: &TabuConfig,
        rng: &mut R,
        sink: &mut K,
    ) -> Result<TabuResult<P::Solution>>
    where
        P: TabuProblem,
        R: Rng,
        K: ProgressSink + ?Sized,
    {
        config.validate()?;

        let objective = problem.objective();
        let aspiration = problem.aspiration();
        let acceptance = problem.acceptance();

        // Initialize
        let mut current = problem.initial_solution(rng)?;
        let mut current_value = problem.evaluate(&current);
        let mut best = current.clone();
        let mut best_value = current_value;
        let mut best_iteration = 0;

        tracing::debug!(
            ?objective,
            ?aspiration,
            ?acceptance,
            max_iterations = config.max_iterations,
            tabu_list_size = config.tabu_list_size,
            initial_value = best_value,
            "tabu search started"
        );

        let mut tabu: TabuList<P::Solution> = TabuList::new(config.tabu_list_size);
        let mut best_history = Vec::with_capacity(config.max_iterations);
        let mut trace = Vec::new();

        for iteration in 1..=config.max_iterations {
            let neighbors = problem.neighbors(&current, rng);

            match acceptance {
                Acceptance::BestAdmissible => {
                    let mut chosen = None;
                    let mut chosen_value = objective.worst();

                    for candidate in neighbors {
                        if !problem.is_feasible(&candidate) {
                            continue;
                        }
                        let is_tabu = tabu.contains_by(|entry| problem.equals(entry, &candidate));
                        let value = problem.evaluate(&candidate);

                        if is_tabu {
                            // Aspiration: override tabu if this produces a new global best
                            let aspires = aspiration == Aspiration::ImprovesBest
                                && objective.is_better(value, best_value);
                            if !aspires {
                                continue;
                            }
                        }

                        if objective.is_better(value, chosen_value) {
                            chosen_value = value;
                            chosen = Some(candidate);
                        }
                    }

                    if let Some(next) = chosen {
                        if objective.is_better(chosen_value, best_value) {
                            best = next.clone();
                            best_value = chosen_value;
                            best_iteration = iteration;
                            tracing::debug!(iteration, best_value, "new best");
                        }
                        current = next;
                        current_value = chosen_value;
                    } else {
                        tracing::trace!(iteration, "no admissible neighbor");
                    }

                    // Recorded even when no move happened.
                    tabu.push(current.clone());
                }
                Acceptance::ImproveOnly => {
                    for candidate in neighbors {
                        if !problem.is_feasible(&candidate) {
                            continue;
                        }
                        let is_tabu = tabu.contains_by(|entry| problem.equals(entry, &candidate));
                        if is_tabu && aspiration == Aspiration::None {
                            continue;
                        }

                        // A tabu candidate that aspires is accepted by the same test.
                        let value = problem.evaluate(&candidate);
                        if objective.is_better(value, best_value) {
                            best = candidate.clone();
                            best_value = value;
                            best_iteration = iteration;
                            current = candidate.clone();
                            current_value = value;
                            tabu.push(candidate);
                            tracing::debug!(iteration, best_value, "new best");
                        }
                    }
                }
            }

            tracing::trace!(
                iteration,
                current_value,
                best_value,
                tabu_len = tabu.len(),
                "iteration done"
            );

            best_history.push(best_value);
            if config.record_trace {
                trace.push(IterationTrace {
                    iteration,
                    current: current.clone(),
                    current_value,
                    best_value,
                    tabu_len: tabu.len(),
                });
            }

            if is_report_iteration(iteration, config.max_iterations) {
                let state = SearchState {
                    iteration,
                    current: &current,
                    current_value,
                    best: &best,
                    best_value,
                };
                let mut message = problem.progress_message(&state);
                if iteration == config.max_iterations {
                    if let Some(summary) = problem.final_summary(&best, best_value) {
                        message.push('\n');
                        message.push_str(&summary);
                    }
                }
                sink.on_iteration(iteration, &message);
            }
        }

        tracing::info!(
            iterations = config.max_iterations,
            best_value,
            best_iteration,
            "tabu search finished"
        );

        Ok(TabuResult {
            best,
            best_value,
            current,
            current_value,
            iterations: config.max_iterations,
            best_iteration,
            best_history,
            trace,
        })
    }
}
