//! Greedy baseline heuristics.
//!
//! Items are sorted by one criterion and packed in that order, each item
//! taken if it still fits. The same fill seeds the ILS through the
//! `by-weight`, `by-value` and `by-density` initial strategies, and serves
//! as a comparison baseline for its results.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::catalog::Item;
use crate::error::Result;
use crate::eval::{Evaluation, Evaluator};
use crate::problem::KnapsackProblem;
use crate::solution::Solution;

/// Sort criterion for the greedy fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreedyOrder {
    /// Ascending weight, ties by ascending value.
    Weight,
    /// Descending value, ties by ascending weight.
    Value,
    /// Descending value density, ties by descending value.
    Density,
}

impl GreedyOrder {
    /// All orderings, in reporting order.
    pub const ALL: [GreedyOrder; 3] = [
        GreedyOrder::Weight,
        GreedyOrder::Value,
        GreedyOrder::Density,
    ];

    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            GreedyOrder::Weight => a
                .weight()
                .total_cmp(&b.weight())
                .then(a.value().total_cmp(&b.value())),
            GreedyOrder::Value => b
                .value()
                .total_cmp(&a.value())
                .then(a.weight().total_cmp(&b.weight())),
            GreedyOrder::Density => b
                .density()
                .total_cmp(&a.density())
                .then(b.value().total_cmp(&a.value())),
        }
    }

    /// Catalog positions sorted by this criterion.
    ///
    /// The sort is stable, so items equal on both keys keep catalog order.
    pub fn order(self, items: &[Item]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| self.compare(&items[a], &items[b]));
        order
    }

    /// Packs items in this order while the running weight stays within
    /// capacity. Every item is considered exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{GreedyOrder, Item, KnapsackProblem};
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
    /// assert_eq!(GreedyOrder::Weight.fill(&problem).bits(), &[1, 1, 0]);
    /// ```
    pub fn fill(self, problem: &KnapsackProblem) -> Solution {
        let items = problem.items();
        let mut solution = Solution::empty(items.len());
        let mut load = 0.0;

        for i in self.order(items) {
            let weight = items[i].weight();
            if load + weight <= problem.capacity() {
                solution.flip(i);
                load += weight;
            }
        }
        solution
    }
}

impl fmt::Display for GreedyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GreedyOrder::Weight => "weight",
            GreedyOrder::Value => "value",
            GreedyOrder::Density => "density",
        };
        f.write_str(name)
    }
}

/// Outcome of one greedy baseline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// Ordering used.
    pub order: GreedyOrder,
    /// Packed solution.
    pub solution: Solution,
    /// Totals of the packed solution. Greedy fills never exceed capacity,
    /// so `score == value`.
    pub evaluation: Evaluation,
    /// Names of the packed items, in catalog order.
    pub selected: Vec<String>,
}

/// Greedy baseline runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs one greedy baseline.
    pub fn run(problem: &KnapsackProblem, order: GreedyOrder) -> Result<GreedyResult> {
        let solution = order.fill(problem);
        // The rate is irrelevant: fills are feasible by construction.
        let evaluation = Evaluator::new(problem, 0.0).evaluate(&solution)?;
        let selected = problem
            .selected_names(&solution)?
            .into_iter()
            .map(str::to_string)
            .collect();

        debug!(
            event = "greedy_baseline",
            order = %order,
            value = evaluation.value,
            weight = evaluation.weight,
        );

        Ok(GreedyResult {
            order,
            solution,
            evaluation,
            selected,
        })
    }

    /// Runs every baseline, in [`GreedyOrder::ALL`] order.
    pub fn run_all(problem: &KnapsackProblem) -> Result<Vec<GreedyResult>> {
        GreedyOrder::ALL
            .iter()
            .map(|&order| Self::run(problem, order))
            .collect()
    }
}
