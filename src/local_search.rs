//! Best-improvement bit-flip local search.
//!
//! The neighborhood of a solution is every solution at Hamming distance 1.
//! [`LocalSearch::step`] scans it once from the same base solution and
//! moves to the single best neighbor if that neighbor is strictly better.
//! One call performs at most one flip, so its result is not necessarily
//! a local optimum; [`LocalSearch::descend`] repeats the step until none
//! improves.

use tracing::trace;

use crate::error::Result;
use crate::eval::Evaluator;
use crate::solution::Solution;

/// Outcome of a local search call.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchOutcome {
    /// Resulting solution.
    pub solution: Solution,
    /// Its penalized score.
    pub score: f64,
    /// Number of flips applied.
    pub moves: usize,
}

/// Local search over 1-bit-flip neighborhoods.
#[derive(Debug, Clone, Copy)]
pub struct LocalSearch<'a> {
    evaluator: Evaluator<'a>,
}

impl<'a> LocalSearch<'a> {
    pub fn new(evaluator: Evaluator<'a>) -> Self {
        Self { evaluator }
    }

    /// One best-improvement step.
    ///
    /// Every position is flipped in turn on a copy of `start`, and the
    /// neighbor with the strictly highest score is kept, so the lowest
    /// index wins ties. Returns that neighbor if it beats `start`,
    /// otherwise `start` itself with its own score.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{Evaluator, Item, KnapsackProblem, LocalSearch, Solution};
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
    /// let ls = LocalSearch::new(Evaluator::new(&problem, 20.0));
    /// let out = ls.step(&Solution::empty(3)).unwrap();
    ///
    /// assert_eq!(out.solution.bits(), &[0, 0, 1]);
    /// assert_eq!(out.score, 5.0);
    /// ```
    pub fn step(&self, start: &Solution) -> Result<LocalSearchOutcome> {
        let start_score = self.evaluator.score(start)?;

        let mut best: Option<(usize, f64)> = None;
        for i in 0..start.len() {
            let score = self.evaluator.score(&start.flipped(i))?;
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((i, score));
            }
        }

        match best {
            Some((i, score)) if score > start_score => {
                trace!(from = start_score, to = score, flipped = i, "local search step");
                Ok(LocalSearchOutcome {
                    solution: start.flipped(i),
                    score,
                    moves: 1,
                })
            }
            _ => {
                trace!(score = start_score, "local search found no improvement");
                Ok(LocalSearchOutcome {
                    solution: start.clone(),
                    score: start_score,
                    moves: 0,
                })
            }
        }
    }

    /// Repeats [`step`](Self::step) until no neighbor improves.
    ///
    /// Terminates because every accepted step strictly raises the score
    /// and the search space is finite.
    pub fn descend(&self, start: &Solution) -> Result<LocalSearchOutcome> {
        let mut current = self.step(start)?;
        let mut moves = current.moves;
        while current.moves > 0 {
            current = self.step(&current.solution)?;
            moves += current.moves;
        }
        current.moves = moves;
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::error::KnapsackError;
    use crate::problem::KnapsackProblem;

    fn abc() -> KnapsackProblem {
        KnapsackProblem::from_items(
            vec![
                Item::new("A", 2.0, 3.0).unwrap(),
                Item::new("B", 3.0, 4.0).unwrap(),
                Item::new("C", 4.0, 5.0).unwrap(),
            ],
            5.0,
        )
        .unwrap()
    }

    #[test]
    fn test_step_from_empty_picks_best_single_item() {
        let problem = abc();
        let ls = LocalSearch::new(Evaluator::new(&problem, 20.0));
        let out = ls.step(&Solution::empty(3)).unwrap();
        assert_eq!(out.solution.bits(), &[0, 0, 1]);
        assert_eq!(out.score, 5.0);
        assert_eq!(out.moves, 1);
    }

    #[test]
    fn test_step_flips_at_most_one_bit() {
        let problem = abc();
        let ls = LocalSearch::new(Evaluator::new(&problem, 20.0));
        let start = Solution::full(3);
        let out = ls.step(&start).unwrap();
        // Dropping C leaves weight 5, value 7.
        assert_eq!(out.solution.bits(), &[1, 1, 0]);
        assert_eq!(out.score, 7.0);
        assert_eq!(start.hamming_distance(&out.solution), 1);
    }

    #[test]
    fn test_step_keeps_local_optimum() {
        let problem = abc();
        let ls = LocalSearch::new(Evaluator::new(&problem, 20.0));
        let start = Solution::from(vec![1, 1, 0]);
        let out = ls.step(&start).unwrap();
        assert_eq!(out.solution, start);
        assert_eq!(out.score, 7.0);
        assert_eq!(out.moves, 0);
    }

    #[test]
    fn test_step_tie_goes_to_lowest_index() {
        let problem = KnapsackProblem::from_items(
            vec![
                Item::new("x", 1.0, 4.0).unwrap(),
                Item::new("y", 1.0, 4.0).unwrap(),
            ],
            1.0,
        )
        .unwrap();
        let ls = LocalSearch::new(Evaluator::new(&problem, 20.0));
        let out = ls.step(&Solution::empty(2)).unwrap();
        assert_eq!(out.solution.bits(), &[1, 0]);
    }

    #[test]
    fn test_descend_reaches_local_optimum() {
        let problem = abc();
        let ls = LocalSearch::new(Evaluator::new(&problem, 20.0));
        let out = ls.descend(&Solution::empty(3)).unwrap();
        // Empty -> C (5). From C no single flip is feasible and better.
        assert_eq!(out.solution.bits(), &[0, 0, 1]);
        assert_eq!(out.score, 5.0);
        assert_eq!(out.moves, 1);

        let again = ls.step(&out.solution).unwrap();
        assert_eq!(again.moves, 0, "descend must stop at a local optimum");
    }

    #[test]
    fn test_descend_multiple_moves() {
        let problem = abc();
        let ls = LocalSearch::new(Evaluator::new(&problem, 0.0));
        // With no penalty every addition improves.
        let out = ls.descend(&Solution::empty(3)).unwrap();
        assert_eq!(out.solution.bits(), &[1, 1, 1]);
        assert_eq!(out.moves, 3);
    }

    #[test]
    fn test_step_propagates_invalid_indicator() {
        let problem = abc();
        let ls = LocalSearch::new(Evaluator::new(&problem, 20.0));
        let result = ls.step(&Solution::from(vec![0, 5, 0]));
        assert!(matches!(
            result,
            Err(KnapsackError::InvalidIndicator { position: 1, .. })
        ));
    }
}
