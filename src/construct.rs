//! Initial solution strategies.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::KnapsackError;
use crate::greedy::GreedyOrder;
use crate::problem::KnapsackProblem;
use crate::solution::Solution;

/// How the ILS builds its starting solution.
///
/// Parsed from the names `random`, `empty`, `full`, `by-weight`,
/// `by-value` and `by-density`.
///
/// # Examples
///
/// ```
/// use u_knapsack::{GreedyOrder, InitialStrategy};
///
/// let s: InitialStrategy = "by-density".parse().unwrap();
/// assert_eq!(s, InitialStrategy::Greedy(GreedyOrder::Density));
/// assert!("sorted".parse::<InitialStrategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum InitialStrategy {
    /// Each bit independently 0 or 1 with probability 1/2.
    #[default]
    Random,
    /// No items.
    Empty,
    /// Every item, usually infeasible.
    Full,
    /// Capacity-respecting greedy fill.
    Greedy(GreedyOrder),
}

impl InitialStrategy {
    /// Every supported strategy.
    pub const ALL: [InitialStrategy; 6] = [
        InitialStrategy::Random,
        InitialStrategy::Empty,
        InitialStrategy::Full,
        InitialStrategy::Greedy(GreedyOrder::Weight),
        InitialStrategy::Greedy(GreedyOrder::Value),
        InitialStrategy::Greedy(GreedyOrder::Density),
    ];

    /// Builds a starting solution for `problem`.
    ///
    /// Only [`InitialStrategy::Random`] draws from `rng`.
    pub fn generate<R: Rng>(self, problem: &KnapsackProblem, rng: &mut R) -> Solution {
        let n = problem.len();
        match self {
            InitialStrategy::Random => Solution::from(
                (0..n)
                    .map(|_| u8::from(rng.random_bool(0.5)))
                    .collect::<Vec<u8>>(),
            ),
            InitialStrategy::Empty => Solution::empty(n),
            InitialStrategy::Full => Solution::full(n),
            InitialStrategy::Greedy(order) => order.fill(problem),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InitialStrategy::Random => "random",
            InitialStrategy::Empty => "empty",
            InitialStrategy::Full => "full",
            InitialStrategy::Greedy(GreedyOrder::Weight) => "by-weight",
            InitialStrategy::Greedy(GreedyOrder::Value) => "by-value",
            InitialStrategy::Greedy(GreedyOrder::Density) => "by-density",
        }
    }
}

impl FromStr for InitialStrategy {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| KnapsackError::UnsupportedStrategy(s.to_string()))
    }
}

impl TryFrom<String> for InitialStrategy {
    type Error = KnapsackError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InitialStrategy> for String {
    fn from(strategy: InitialStrategy) -> Self {
        strategy.name().to_string()
    }
}

impl fmt::Display for InitialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
