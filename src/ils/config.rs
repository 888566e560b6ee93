//! ILS configuration.

use crate::construct::InitialStrategy;
use crate::error::{KnapsackError, Result};

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use u_knapsack::{IlsConfig, InitialStrategy};
///
/// let config = IlsConfig::default()
///     .with_iterations(500)
///     .with_perturbation_level(3)
///     .with_max_no_improve(50)
///     .with_initial_strategy(InitialStrategy::Empty)
///     .with_seed(7);
/// assert_eq!(config.iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct IlsConfig {
    /// Maximum number of perturbation + local search cycles.
    pub iterations: usize,

    /// Number of bits flipped by each perturbation.
    pub perturbation_level: usize,

    /// Penalty per unit of weight above capacity.
    pub violation_rate: f64,

    /// Consecutive iterations without a new best before stopping.
    pub max_no_improve: usize,

    /// Random seed (None for default seed).
    pub seed: Option<u64>,

    /// How the starting solution is built.
    pub initial_strategy: InitialStrategy,

    /// Run local search to a local optimum instead of a single step.
    pub full_descent: bool,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            perturbation_level: 1,
            violation_rate: 20.0,
            max_no_improve: 100,
            seed: None,
            initial_strategy: InitialStrategy::default(),
            full_descent: false,
        }
    }
}

impl IlsConfig {
    /// Sets the maximum number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the number of bits flipped per perturbation.
    pub fn with_perturbation_level(mut self, k: usize) -> Self {
        self.perturbation_level = k;
        self
    }

    /// Sets the penalty per unit of overweight.
    pub fn with_violation_rate(mut self, rate: f64) -> Self {
        self.violation_rate = rate;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the initial solution strategy.
    pub fn with_initial_strategy(mut self, strategy: InitialStrategy) -> Self {
        self.initial_strategy = strategy;
        self
    }

    /// Enables or disables local search to a local optimum.
    pub fn with_full_descent(mut self, enabled: bool) -> Self {
        self.full_descent = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == usize::MAX {
            return Err(KnapsackError::InvalidConfig(
                "iterations must be less than usize::MAX".into(),
            ));
        }
        if self.perturbation_level == 0 {
            return Err(KnapsackError::InvalidConfig(
                "perturbation_level must be at least 1".into(),
            ));
        }
        if self.max_no_improve == 0 {
            return Err(KnapsackError::InvalidConfig(
                "max_no_improve must be at least 1".into(),
            ));
        }
        if !self.violation_rate.is_finite() || self.violation_rate < 0.0 {
            return Err(KnapsackError::InvalidConfig(format!(
                "violation_rate must be a finite non-negative number, got {}",
                self.violation_rate
            )));
        }
        Ok(())
    }
}
