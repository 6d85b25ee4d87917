//! Tabu Search configuration.

use crate::error::{Result, TabuError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tabu::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_list_size(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_list_size, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations to run. The search always runs all of them.
    pub max_iterations: usize,
    /// Maximum number of solutions remembered in the tabu list.
    pub tabu_list_size: usize,
    /// Whether to record a per-iteration trace in the result.
    pub record_trace: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tabu_list_size: 10,
            record_trace: false,
        }
    }
}

impl TabuConfig {
    /// Creates a configuration with the given budget and list size.
    pub fn new(max_iterations: usize, tabu_list_size: usize) -> Self {
        Self {
            max_iterations,
            tabu_list_size,
            ..Self::default()
        }
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list size.
    pub fn with_tabu_list_size(mut self, size: usize) -> Self {
        self.tabu_list_size = size;
        self
    }

    /// Enables or disables the per-iteration trace.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(TabuError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.tabu_list_size == 0 {
            return Err(TabuError::InvalidConfig(
                "tabu_list_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.tabu_list_size, 10);
        assert!(!config.record_trace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = TabuConfig::new(50, 5).with_trace(true);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.tabu_list_size, 5);
        assert!(config.record_trace);
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = TabuConfig::default().with_max_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(TabuError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_list_size() {
        let config = TabuConfig::default().with_tabu_list_size(0);
        assert!(matches!(
            config.validate(),
            Err(TabuError::InvalidConfig(_))
        ));
    }
}
