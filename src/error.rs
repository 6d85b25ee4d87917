//! Error types for the tabu search engine and its loaders.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TabuError>;

/// Everything that can go wrong before or while running a search.
///
/// Configuration and instance problems are reported before the first
/// iteration; a search that has started always runs to completion.
#[derive(Error, Debug)]
pub enum TabuError {
    /// A run parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The problem instance has nothing to optimize over.
    #[error("empty instance: no {0} given")]
    EmptyInstance(&'static str),

    /// The continuous search interval is empty or not finite.
    #[error("invalid interval: start ({start}) must be finite and less than end ({end})")]
    InvalidInterval {
        /// Lower bound.
        start: f64,
        /// Upper bound.
        end: f64,
    },

    /// Random restarts never produced a solution satisfying the constraints.
    #[error("no feasible initial solution after {attempts} attempts")]
    NoFeasibleInitialSolution {
        /// Number of sampled candidates.
        attempts: usize,
    },

    /// I/O error while reading input data.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV stream.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
