//! Penalized solution evaluation.
//!
//! Capacity is relaxed: an overweight solution is not rejected but scored
//! `value - (weight - capacity) * violation_rate`. With a large enough
//! rate the search is pushed back into the feasible region while still
//! being allowed to cross infeasible solutions on the way.

use crate::error::{KnapsackError, Result};
use crate::problem::KnapsackProblem;
use crate::solution::Solution;

/// Totals and penalized score of one solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Sum of included item values.
    pub value: f64,
    /// Sum of included item weights.
    pub weight: f64,
    /// Value minus the overweight penalty. Higher is better.
    pub score: f64,
}

impl Evaluation {
    /// Whether the total weight fits the given capacity.
    pub fn is_feasible(&self, capacity: f64) -> bool {
        self.weight <= capacity
    }
}

/// Scores solutions of one problem under a fixed violation rate.
///
/// Stateless apart from its borrowed inputs; every call recomputes the
/// totals from scratch.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    problem: &'a KnapsackProblem,
    violation_rate: f64,
}

impl<'a> Evaluator<'a> {
    pub fn new(problem: &'a KnapsackProblem, violation_rate: f64) -> Self {
        Self {
            problem,
            violation_rate,
        }
    }

    pub fn problem(&self) -> &'a KnapsackProblem {
        self.problem
    }

    pub fn violation_rate(&self) -> f64 {
        self.violation_rate
    }

    /// Computes total value, total weight and penalized score.
    ///
    /// # Errors
    ///
    /// - [`KnapsackError::LengthMismatch`] if the solution length differs
    ///   from the catalog size.
    /// - [`KnapsackError::InvalidIndicator`] on any entry other than 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{Evaluator, Item, KnapsackProblem, Solution};
    ///
    /// let problem = KnapsackProblem::from_items(
    ///     vec![
    ///         Item::new("A", 2.0, 3.0).unwrap(),
    ///         Item::new("B", 3.0, 4.0).unwrap(),
    ///         Item::new("C", 4.0, 5.0).unwrap(),
    ///     ],
    ///     5.0,
    /// )
    /// .unwrap();
    /// let eval = Evaluator::new(&problem, 20.0)
    ///     .evaluate(&Solution::from(vec![1, 1, 1]))
    ///     .unwrap();
    ///
    /// assert_eq!(eval.weight, 9.0);
    /// assert_eq!(eval.value, 12.0);
    /// assert_eq!(eval.score, -68.0);
    /// ```
    pub fn evaluate(&self, solution: &Solution) -> Result<Evaluation> {
        self.problem.check_length(solution)?;

        let mut value = 0.0;
        let mut weight = 0.0;
        for (i, (&bit, item)) in solution
            .bits()
            .iter()
            .zip(self.problem.items())
            .enumerate()
        {
            match bit {
                0 => {}
                1 => {
                    value += item.value();
                    weight += item.weight();
                }
                other => {
                    return Err(KnapsackError::InvalidIndicator {
                        position: i,
                        value: other,
                    })
                }
            }
        }

        Ok(Evaluation {
            value,
            weight,
            score: self.penalize(value, weight),
        })
    }

    /// Shorthand for `evaluate(solution)?.score`.
    pub fn score(&self, solution: &Solution) -> Result<f64> {
        Ok(self.evaluate(solution)?.score)
    }

    fn penalize(&self, value: f64, weight: f64) -> f64 {
        let capacity = self.problem.capacity();
        if weight > capacity {
            value - (weight - capacity) * self.violation_rate
        } else {
            value
        }
    }
}
