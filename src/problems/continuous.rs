//! Maximization of `f(x) = x·cos(3πx)` over a closed interval.
//!
//! Each iteration draws one candidate by shifting the best point by
//! uniform noise in `[-0.5, 0.5)` and clamping it into the interval.
//! Only strict improvements are accepted, and only accepted points enter
//! the tabu list. The tabu test is exact float equality, so it rarely
//! rejects anything.

use std::f64::consts::PI;

use rand::Rng;

use crate::error::{Result, TabuError};
use crate::progress::ProgressSink;
use crate::tabu::{
    Acceptance, Aspiration, Objective, SearchState, TabuConfig, TabuProblem, TabuResult,
    TabuRunner,
};

/// The function being maximized.
///
/// ```
/// use u_tabu::problems::continuous::evaluate;
///
/// assert_eq!(evaluate(0.0), 0.0);
/// assert!((evaluate(1.0) + 1.0).abs() < 1e-12);
/// ```
pub fn evaluate(x: f64) -> f64 {
    x * (3.0 * PI * x).cos()
}

/// The continuous problem over `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousProblem {
    start: f64,
    end: f64,
}

impl ContinuousProblem {
    /// Creates the problem, rejecting empty or non-finite intervals.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(TabuError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Lower bound.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound.
    pub fn end(&self) -> f64 {
        self.end
    }

    fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.start, self.end)
    }
}

impl TabuProblem for ContinuousProblem {
    type Solution = f64;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<f64> {
        Ok(self.start + rng.random::<f64>() * (self.end - self.start))
    }

    fn evaluate(&self, &x: &f64) -> f64 {
        evaluate(x)
    }

    fn neighbors<R: Rng>(&self, &x: &f64, rng: &mut R) -> Vec<f64> {
        vec![self.clamp(x + (rng.random::<f64>() - 0.5))]
    }

    fn is_feasible(&self, &x: &f64) -> bool {
        (self.start..=self.end).contains(&x)
    }

    fn equals(&self, a: &f64, b: &f64) -> bool {
        a == b
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn aspiration(&self) -> Aspiration {
        Aspiration::None
    }

    fn acceptance(&self) -> Acceptance {
        Acceptance::ImproveOnly
    }

    fn progress_message(&self, state: &SearchState<'_, f64>) -> String {
        format!(
            "Iteration {} : best x = {}, f(x) = {}",
            state.iteration, state.best, state.best_value
        )
    }
}

/// One continuous search run.
///
/// # Examples
///
/// ```
/// use u_tabu::problems::continuous::{evaluate, ContinuousSearch};
/// use u_tabu::progress::NoopSink;
/// use u_tabu::random::create_rng;
/// use u_tabu::tabu::TabuConfig;
///
/// let search = ContinuousSearch::new(TabuConfig::new(200, 10), -2.0, 3.0, create_rng(5)).unwrap();
/// let x = search.optimize(&mut NoopSink).unwrap();
/// assert!((-2.0..=3.0).contains(&x));
/// assert!(evaluate(x) > 0.0);
/// ```
#[derive(Debug)]
pub struct ContinuousSearch<R> {
    problem: ContinuousProblem,
    config: TabuConfig,
    rng: R,
}

impl<R: Rng> ContinuousSearch<R> {
    /// Validates the configuration and interval.
    pub fn new(config: TabuConfig, start: f64, end: f64, rng: R) -> Result<Self> {
        config.validate()?;
        let problem = ContinuousProblem::new(start, end)?;
        Ok(Self {
            problem,
            config,
            rng,
        })
    }

    /// The problem being solved.
    pub fn problem(&self) -> &ContinuousProblem {
        &self.problem
    }

    /// Runs the search and returns the full result.
    pub fn run<K: ProgressSink + ?Sized>(mut self, sink: &mut K) -> Result<TabuResult<f64>> {
        TabuRunner::run(&self.problem, &self.config, &mut self.rng, sink)
    }

    /// Runs the search and returns the best `x`.
    pub fn optimize<K: ProgressSink + ?Sized>(self, sink: &mut K) -> Result<f64> {
        self.run(sink).map(|result| result.best)
    }
}
