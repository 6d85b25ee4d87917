//! Traveling salesman: minimize the length of a closed tour.
//!
//! A route is a permutation of city indices. The neighborhood is every
//! pairwise position swap, `n(n-1)/2` routes. Tabu routes are never
//! chosen, even when they would beat the best tour.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, TabuError};
use crate::model::City;
use crate::progress::ProgressSink;
use crate::tabu::{
    Acceptance, Aspiration, Objective, SearchState, TabuConfig, TabuProblem, TabuResult,
    TabuRunner,
};

/// Length of the closed tour visiting `route` in order.
///
/// ```
/// use u_tabu::model::City;
/// use u_tabu::problems::tsp::tour_distance;
///
/// let square = [
///     City::new(1, 0.0, 0.0),
///     City::new(2, 0.0, 1.0),
///     City::new(3, 1.0, 1.0),
///     City::new(4, 1.0, 0.0),
/// ];
/// assert!((tour_distance(&square) - 4.0).abs() < 1e-12);
/// ```
pub fn tour_distance(route: &[City]) -> f64 {
    match (route.first(), route.last()) {
        (Some(first), Some(last)) => {
            let open: f64 = route.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
            open + last.distance_to(first)
        }
        _ => 0.0,
    }
}

/// Renders a route as space-separated city ids.
pub fn route_to_string(route: &[City]) -> String {
    route
        .iter()
        .map(|c| c.id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A TSP instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TspProblem {
    cities: Vec<City>,
}

impl TspProblem {
    /// Creates the instance. Fails if there are no cities.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(TabuError::EmptyInstance("cities"));
        }
        if let Some(city) = cities.iter().find(|c| !(c.x.is_finite() && c.y.is_finite())) {
            return Err(TabuError::InvalidConfig(format!(
                "city {} has non-finite coordinates",
                city.id
            )));
        }
        Ok(Self { cities })
    }

    /// The cities, in input order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Length of the closed tour over city indices.
    ///
    /// # Panics
    ///
    /// Panics if an index is not below the number of cities.
    pub fn distance(&self, route: &[usize]) -> f64 {
        match (route.first(), route.last()) {
            (Some(&first), Some(&last)) => {
                let open: f64 = route
                    .windows(2)
                    .map(|w| self.cities[w[0]].distance_to(&self.cities[w[1]]))
                    .sum();
                open + self.cities[last].distance_to(&self.cities[first])
            }
            _ => 0.0,
        }
    }

    /// Resolves city indices to cities.
    ///
    /// # Panics
    ///
    /// Panics if an index is not below the number of cities.
    pub fn route(&self, route: &[usize]) -> Vec<City> {
        route.iter().map(|&i| self.cities[i]).collect()
    }
}

impl TabuProblem for TspProblem {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Vec<usize>> {
        let mut route: Vec<usize> = (0..self.cities.len()).collect();
        route.shuffle(rng);
        Ok(route)
    }

    fn evaluate(&self, route: &Vec<usize>) -> f64 {
        self.distance(route)
    }

    fn neighbors<R: Rng>(&self, route: &Vec<usize>, _rng: &mut R) -> Vec<Vec<usize>> {
        let n = route.len();
        let mut neighbors = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let mut swapped = route.clone();
                swapped.swap(i, j);
                neighbors.push(swapped);
            }
        }
        neighbors
    }

    /// Routes are the same when they visit the same city ids in the same order.
    fn equals(&self, a: &Vec<usize>, b: &Vec<usize>) -> bool {
        a.len() == b.len()
            && a
                .iter()
                .zip(b)
                .all(|(&x, &y)| self.cities[x].id == self.cities[y].id)
    }

    fn objective(&self) -> Objective {
        Objective::Minimize
    }

    fn aspiration(&self) -> Aspiration {
        Aspiration::None
    }

    fn acceptance(&self) -> Acceptance {
        Acceptance::BestAdmissible
    }

    fn progress_message(&self, state: &SearchState<'_, Vec<usize>>) -> String {
        format!(
            "Iteration {} : route distance = {}",
            state.iteration, state.best_value
        )
    }
}

/// The best tour found.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Cities in visiting order.
    pub cities: Vec<City>,
    /// Closed tour length.
    pub distance: f64,
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", route_to_string(&self.cities), self.distance)
    }
}

/// One TSP search run.
#[derive(Debug)]
pub struct TspSearch<R> {
    problem: TspProblem,
    config: TabuConfig,
    rng: R,
}

impl<R: Rng> TspSearch<R> {
    /// Validates the configuration and instance.
    pub fn new(config: TabuConfig, cities: Vec<City>, rng: R) -> Result<Self> {
        config.validate()?;
        let problem = TspProblem::new(cities)?;
        Ok(Self {
            problem,
            config,
            rng,
        })
    }

    /// The instance being solved.
    pub fn problem(&self) -> &TspProblem {
        &self.problem
    }

    /// Runs the search and returns the full result over city indices.
    pub fn run<K: ProgressSink + ?Sized>(mut self, sink: &mut K) -> Result<TabuResult<Vec<usize>>> {
        TabuRunner::run(&self.problem, &self.config, &mut self.rng, sink)
    }

    /// Runs the search and returns the best tour.
    pub fn optimize<K: ProgressSink + ?Sized>(mut self, sink: &mut K) -> Result<Tour> {
        let result = TabuRunner::run(&self.problem, &self.config, &mut self.rng, sink)?;
        Ok(Tour {
            cities: self.problem.route(&result.best),
            distance: result.best_value,
        })
    }
}
