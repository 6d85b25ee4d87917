//! 0/1 knapsack: maximize packed value subject to a weight capacity.
//!
//! Solutions are inclusion vectors. The neighborhood is every one-bit and
//! two-bit flip of the current vector that stays within capacity. A tabu
//! neighbor may still be chosen when it beats the global best.

use std::fmt;

use rand::Rng;

use crate::error::{Result, TabuError};
use crate::model::Item;
use crate::progress::ProgressSink;
use crate::tabu::{
    Acceptance, Aspiration, Objective, SearchState, TabuConfig, TabuProblem, TabuResult,
    TabuRunner,
};

/// Number of random vectors sampled before giving up on a feasible start.
pub const MAX_INITIAL_ATTEMPTS: usize = 10_000;

/// Renders an inclusion vector as `[1 0 1 ]`.
///
/// ```
/// use u_tabu::problems::knapsack::solution_to_string;
///
/// assert_eq!(solution_to_string(&[true, false, true]), "[1 0 1 ]");
/// ```
pub fn solution_to_string(selected: &[bool]) -> String {
    let mut out = String::with_capacity(2 * selected.len() + 2);
    out.push('[');
    for &bit in selected {
        out.push(if bit { '1' } else { '0' });
        out.push(' ');
    }
    out.push(']');
    out
}

/// A knapsack instance.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Creates the instance.
    ///
    /// Fails if there are no items, the capacity is not a number, or an
    /// item has a negative or non-finite weight or value.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self> {
        if items.is_empty() {
            return Err(TabuError::EmptyInstance("items"));
        }
        if capacity.is_nan() {
            return Err(TabuError::InvalidConfig("capacity must be a number".into()));
        }
        if let Some(item) = items
            .iter()
            .find(|it| !(it.weight.is_finite() && it.weight >= 0.0))
        {
            return Err(TabuError::InvalidConfig(format!(
                "item {} has invalid weight {}",
                item.id, item.weight
            )));
        }
        if let Some(item) = items
            .iter()
            .find(|it| !(it.value.is_finite() && it.value >= 0.0))
        {
            return Err(TabuError::InvalidConfig(format!(
                "item {} has invalid value {}",
                item.id, item.value
            )));
        }
        Ok(Self { items, capacity })
    }

    /// The items, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Weight capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total weight of the selected items.
    pub fn weight(&self, selected: &[bool]) -> f64 {
        self.selected_items(selected).map(|it| it.weight).sum()
    }

    /// Total value of the selected items, ignoring capacity.
    pub fn value(&self, selected: &[bool]) -> f64 {
        self.selected_items(selected).map(|it| it.value).sum()
    }

    fn selected_items<'a>(&'a self, selected: &'a [bool]) -> impl Iterator<Item = &'a Item> {
        self.items
            .iter()
            .zip(selected)
            .filter_map(|(item, &bit)| bit.then_some(item))
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        (0..self.items.len()).map(|_| rng.random::<f64>() < 0.5).collect()
    }

    /// Packages a selection with its totals.
    pub fn solution(&self, selected: Vec<bool>) -> KnapsackSolution {
        let items = self.selected_items(&selected).copied().collect();
        KnapsackSolution {
            value: self.value(&selected),
            weight: self.weight(&selected),
            capacity: self.capacity,
            items,
            selected,
        }
    }
}

impl TabuProblem for KnapsackProblem {
    type Solution = Vec<bool>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Vec<bool>> {
        for attempt in 1..=MAX_INITIAL_ATTEMPTS {
            let candidate = self.random_solution(rng);
            if self.is_feasible(&candidate) {
                tracing::debug!(attempt, "feasible initial selection found");
                return Ok(candidate);
            }
        }
        // The empty selection fits whenever any selection does.
        let empty = vec![false; self.items.len()];
        if self.is_feasible(&empty) {
            tracing::debug!(
                attempts = MAX_INITIAL_ATTEMPTS,
                "starting from the empty selection"
            );
            return Ok(empty);
        }
        tracing::warn!(
            attempts = MAX_INITIAL_ATTEMPTS,
            capacity = self.capacity,
            "no feasible initial selection"
        );
        Err(TabuError::NoFeasibleInitialSolution {
            attempts: MAX_INITIAL_ATTEMPTS,
        })
    }

    /// Packed value, or negative infinity when over capacity.
    fn evaluate(&self, selected: &Vec<bool>) -> f64 {
        if self.is_feasible(selected) {
            self.value(selected)
        } else {
            f64::NEG_INFINITY
        }
    }

    fn neighbors<R: Rng>(&self, selected: &Vec<bool>, _rng: &mut R) -> Vec<Vec<bool>> {
        let n = selected.len();
        let mut neighbors = Vec::with_capacity(n + n * n.saturating_sub(1) / 2);

        // flips 1 bit
        for i in 0..n {
            let mut flipped = selected.clone();
            flipped[i] = !flipped[i];
            neighbors.push(flipped);
        }

        // flips 2 bits
        for i in 0..n {
            for j in (i + 1)..n {
                let mut flipped = selected.clone();
                flipped[i] = !flipped[i];
                flipped[j] = !flipped[j];
                neighbors.push(flipped);
            }
        }

        neighbors.retain(|s| self.is_feasible(s));
        neighbors
    }

    fn is_feasible(&self, selected: &Vec<bool>) -> bool {
        self.weight(selected) <= self.capacity
    }

    fn equals(&self, a: &Vec<bool>, b: &Vec<bool>) -> bool {
        a == b
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn aspiration(&self) -> Aspiration {
        Aspiration::ImprovesBest
    }

    fn acceptance(&self) -> Acceptance {
        Acceptance::BestAdmissible
    }

    fn progress_message(&self, state: &SearchState<'_, Vec<bool>>) -> String {
        format!(
            "Iter {:>3} -> curr={:.2}, best={:.2}",
            state.iteration, state.current_value, state.best_value
        )
    }

    fn final_summary(&self, best: &Vec<bool>, best_value: f64) -> Option<String> {
        Some(format!(
            "Final result\nBest solution: {}\nValue = {:.2}, Weight = {:.2}/{:.2}",
            solution_to_string(best),
            best_value,
            self.weight(best),
            self.capacity
        ))
    }
}

/// The best selection found, with its totals.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution {
    /// One flag per input item.
    pub selected: Vec<bool>,
    /// The packed items, in input order.
    pub items: Vec<Item>,
    /// Total value.
    pub value: f64,
    /// Total weight.
    pub weight: f64,
    /// Capacity of the instance.
    pub capacity: f64,
}

impl KnapsackSolution {
    /// Ids of the packed items.
    pub fn item_ids(&self) -> Vec<i64> {
        self.items.iter().map(|it| it.id).collect()
    }
}

impl fmt::Display for KnapsackSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value={:.2} weight={:.2}/{:.2}",
            solution_to_string(&self.selected),
            self.value,
            self.weight,
            self.capacity
        )
    }
}

/// One knapsack search run.
#[derive(Debug)]
pub struct KnapsackSearch<R> {
    problem: KnapsackProblem,
    config: TabuConfig,
    rng: R,
}

impl<R: Rng> KnapsackSearch<R> {
    /// Validates the configuration and instance.
    pub fn new(config: TabuConfig, items: Vec<Item>, capacity: f64, rng: R) -> Result<Self> {
        config.validate()?;
        let problem = KnapsackProblem::new(items, capacity)?;
        Ok(Self {
            problem,
            config,
            rng,
        })
    }

    /// The instance being solved.
    pub fn problem(&self) -> &KnapsackProblem {
        &self.problem
    }

    /// Runs the search and returns the full result.
    pub fn run<K: ProgressSink + ?Sized>(mut self, sink: &mut K) -> Result<TabuResult<Vec<bool>>> {
        TabuRunner::run(&self.problem, &self.config, &mut self.rng, sink)
    }

    /// Runs the search and returns the best selection.
    pub fn optimize<K: ProgressSink + ?Sized>(mut self, sink: &mut K) -> Result<KnapsackSolution> {
        let result = TabuRunner::run(&self.problem, &self.config, &mut self.rng, sink)?;
        Ok(self.problem.solution(result.best))
    }
}
