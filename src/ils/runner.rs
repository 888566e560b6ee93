//! Iterated Local Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial solution x₀ with the configured strategy
//! 2. Warm-up: x = best = LocalSearch(x₀); history = [f(best)]
//! 3. For each iteration, until the budget or the stagnation limit:
//!    a. **Perturbation**: x' = Perturb(x, k)
//!    b. **Local search**: x'' = LocalSearch(x')
//!    c. **Acceptance**: if f(x'') > f(x), set x = x''
//!    d. **Best update**: if f(x'') > f(best), set best = x'' and reset
//!    the stagnation counter; otherwise increment it
//!    e. Append f(best) to the history
//! 4. Pad the history to `iterations + 1` entries and return best
//!
//! By default local search is a single best-improvement step per call, so
//! x'' is not guaranteed to be a local optimum. Enable
//! [`IlsConfig::full_descent`] to descend all the way.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::config::IlsConfig;
use crate::error::Result;
use crate::eval::{Evaluation, Evaluator};
use crate::greedy::{GreedyResult, GreedyRunner};
use crate::local_search::{LocalSearch, LocalSearchOutcome};
use crate::perturb::perturb;
use crate::problem::KnapsackProblem;
use crate::solution::Solution;

const DEFAULT_SEED: u64 = 42;

/// Result of an ILS run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsResult {
    /// Best solution found.
    pub best: Solution,
    /// Penalized score of the best solution.
    pub best_score: f64,
    /// Totals of the best solution.
    pub evaluation: Evaluation,
    /// Total weight of the best solution.
    pub capacity_used: f64,
    /// Names of the items in the best solution, in catalog order.
    pub selected: Vec<String>,
    /// Score of the initial solution, before the warm-up local search.
    pub initial_score: f64,
    /// Iterations actually executed.
    pub iterations: usize,
    /// Candidates that replaced the current solution.
    pub accepted_moves: usize,
    /// Iteration at which the best solution was found (0 = warm-up).
    pub best_iteration: usize,
    /// Whether the stagnation limit ended the run.
    pub stopped_early: bool,
    /// Best score after the warm-up and after each iteration.
    ///
    /// Always `config.iterations + 1` entries long; an early stop repeats
    /// the final best score.
    pub score_history: Vec<f64>,
}

impl IlsResult {
    /// Whether the best solution respects the capacity of `problem`.
    pub fn is_feasible(&self, problem: &KnapsackProblem) -> bool {
        self.evaluation.is_feasible(problem.capacity())
    }
}

/// An ILS run alongside the greedy baselines on the same problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub ils: IlsResult,
    pub baselines: Vec<GreedyResult>,
}

impl Comparison {
    /// Baseline with the highest value; the first one wins ties.
    pub fn best_baseline(&self) -> Option<&GreedyResult> {
        self.baselines.iter().fold(None, |best, r| match best {
            Some(b) if b.evaluation.value >= r.evaluation.value => Some(b),
            _ => Some(r),
        })
    }

    /// ILS score minus the best baseline value.
    pub fn gain(&self) -> Option<f64> {
        self.best_baseline()
            .map(|b| self.ils.best_score - b.evaluation.value)
    }
}

/// Strict acceptance: ties with the incumbent are discarded.
fn improves(candidate: f64, incumbent: f64) -> bool {
    candidate > incumbent
}

/// Iterated Local Search runner.
pub struct IlsRunner;

impl IlsRunner {
    /// Executes ILS on the given problem.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::InvalidConfig`](crate::KnapsackError) for a
    /// configuration rejected by [`IlsConfig::validate`]. Evaluation errors
    /// abort the run and are returned as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{IlsConfig, IlsRunner, InitialStrategy, Item, KnapsackProblem};
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
    /// let config = IlsConfig::default()
    ///     .with_iterations(100)
    ///     .with_perturbation_level(2)
    ///     .with_initial_strategy(InitialStrategy::Empty)
    ///     .with_seed(42);
    ///
    /// let result = IlsRunner::run(&problem, &config).unwrap();
    /// assert_eq!(result.best_score, 7.0);
    /// assert_eq!(result.selected, vec!["A", "B"]);
    /// assert_eq!(result.score_history.len(), 101);
    /// ```
    pub fn run(problem: &KnapsackProblem, config: &IlsConfig) -> Result<IlsResult> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));
        let evaluator = Evaluator::new(problem, config.violation_rate);
        let local_search = LocalSearch::new(evaluator);
        let improve = |s: &Solution| -> Result<LocalSearchOutcome> {
            if config.full_descent {
                local_search.descend(s)
            } else {
                local_search.step(s)
            }
        };

        info!(
            event = "ils_start",
            items = problem.len(),
            capacity = problem.capacity(),
            iterations = config.iterations,
            perturbation_level = config.perturbation_level,
            strategy = %config.initial_strategy,
        );

        // Initialize with local search
        let initial = config.initial_strategy.generate(problem, &mut rng);
        let initial_score = evaluator.score(&initial)?;
        let warm = improve(&initial)?;

        info!(
            event = "ils_warm_up",
            initial_score = initial_score,
            score = warm.score,
        );

        let mut current = warm.solution;
        let mut current_score = warm.score;
        let mut best = current.clone();
        let mut best_score = current_score;
        let mut best_iteration = 0;

        let mut score_history = Vec::with_capacity(config.iterations + 1);
        score_history.push(best_score);

        let mut no_improve_count = 0;
        let mut accepted_moves = 0;
        let mut executed = 0;
        let mut stopped_early = false;

        for iteration in 1..=config.iterations {
            let perturbed = perturb(&current, config.perturbation_level, &mut rng);
            let candidate = improve(&perturbed)?;

            // best >= current always holds, so a new best is also accepted
            if improves(candidate.score, best_score) {
                best = candidate.solution.clone();
                best_score = candidate.score;
                best_iteration = iteration;
                no_improve_count = 0;
                debug!(event = "new_best", iteration, score = best_score);
            } else {
                no_improve_count += 1;
            }

            if improves(candidate.score, current_score) {
                accepted_moves += 1;
                current = candidate.solution;
                current_score = candidate.score;
            }

            score_history.push(best_score);
            executed = iteration;

            // Stagnation check
            if no_improve_count >= config.max_no_improve {
                stopped_early = true;
                debug!(
                    event = "stagnation_stop",
                    iteration,
                    no_improve = no_improve_count,
                );
                break;
            }
        }

        score_history.resize(config.iterations + 1, best_score);

        let evaluation = evaluator.evaluate(&best)?;
        let selected = problem
            .selected_names(&best)?
            .into_iter()
            .map(str::to_string)
            .collect();

        info!(
            event = "ils_end",
            iterations = executed,
            best_iteration,
            stopped_early,
            score = best_score,
            value = evaluation.value,
            weight = evaluation.weight,
        );

        Ok(IlsResult {
            best,
            best_score,
            evaluation,
            capacity_used: evaluation.weight,
            selected,
            initial_score,
            iterations: executed,
            accepted_moves,
            best_iteration,
            stopped_early,
            score_history,
        })
    }

    /// Runs ILS and every greedy baseline on the same problem.
    pub fn compare(problem: &KnapsackProblem, config: &IlsConfig) -> Result<Comparison> {
        let ils = Self::run(problem, config)?;
        let baselines = GreedyRunner::run_all(problem)?;
        Ok(Comparison { ils, baselines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::construct::InitialStrategy;
    use crate::error::KnapsackError;
    use crate::greedy::GreedyOrder;

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

    // ---- Deterministic 30-item instance ----

    fn thirty_items() -> KnapsackProblem {
        let items = (0..30)
            .map(|i| {
                let weight = 1 + (i * 7) % 13;
                let value = 1 + (i * 11) % 17;
                Item::new(format!("item{i}"), weight as f64, value as f64).unwrap()
            })
            .collect();
        KnapsackProblem::from_items(items, 50.0).unwrap()
    }

    #[test]
    fn test_improves_is_strict() {
        assert!(improves(7.0, 5.0));
        assert!(!improves(5.0, 5.0));
        assert!(!improves(-12.0, 5.0));
    }

    #[test]
    fn test_ils_counts_only_strict_acceptances() {
        // The first kick from {C} always lands on {A, B} = 7. Every later
        // kick swaps C back in and the step falls back to {C} = 5.
        let problem = abc();
        let config = IlsConfig::default()
            .with_iterations(30)
            .with_perturbation_level(2)
            .with_max_no_improve(30)
            .with_initial_strategy(InitialStrategy::Empty)
            .with_seed(8);

        let result = IlsRunner::run(&problem, &config).unwrap();

        assert_eq!(result.accepted_moves, 1);
        assert_eq!(result.best_iteration, 1);
        assert_eq!(result.best.bits(), &[1, 1, 0]);
        let mut expected = vec![5.0];
        expected.extend(std::iter::repeat_n(7.0, 30));
        assert_eq!(result.score_history, expected);
    }

    #[test]
    fn test_ils_zero_iterations_is_warm_up_only() {
        let problem = abc();
        let config = IlsConfig::default()
            .with_iterations(0)
            .with_initial_strategy(InitialStrategy::Empty);

        let result = IlsRunner::run(&problem, &config).unwrap();

        assert_eq!(result.best.bits(), &[0, 0, 1]);
        assert_eq!(result.best_score, 5.0);
        assert_eq!(result.initial_score, 0.0);
        assert_eq!(result.score_history, vec![5.0]);
        assert_eq!(result.iterations, 0);
        assert!(!result.stopped_early);
    }

    #[test]
    fn test_ils_finds_optimum_with_level_two() {
        let problem = abc();
        let config = IlsConfig::default()
            .with_iterations(50)
            .with_perturbation_level(2)
            .with_initial_strategy(InitialStrategy::Empty)
            .with_seed(42);

        let result = IlsRunner::run(&problem, &config).unwrap();

        assert_eq!(result.best.bits(), &[1, 1, 0]);
        assert_eq!(result.best_score, 7.0);
        assert_eq!(result.capacity_used, 5.0);
        assert_eq!(result.selected, vec!["A", "B"]);
        assert!(result.is_feasible(&problem));
        assert!(result.best_iteration >= 1);
    }

    #[test]
    fn test_ils_stagnation_termination() {
        // With single-bit kicks the search cannot leave {C}: every kick adds
        // an item, and the following step removes it again.
        let problem = abc();
        let config = IlsConfig::default()
            .with_iterations(100)
            .with_perturbation_level(1)
            .with_max_no_improve(5)
            .with_initial_strategy(InitialStrategy::Empty)
            .with_seed(1);

        let result = IlsRunner::run(&problem, &config).unwrap();

        assert!(result.stopped_early);
        assert_eq!(result.iterations, 5);
        assert_eq!(
            result.accepted_moves, 0,
            "equal-score candidates must not replace the current solution"
        );
        assert_eq!(result.best_score, 5.0);
        assert_eq!(result.score_history.len(), 101);
        assert!(result.score_history.iter().all(|&s| s == 5.0));
    }

    #[test]
    fn test_ils_history_length_and_monotone() {
        let problem = thirty_items();
        for seed in 0..5 {
            let config = IlsConfig::default()
                .with_iterations(200)
                .with_perturbation_level(3)
                .with_max_no_improve(20)
                .with_seed(seed);

            let result = IlsRunner::run(&problem, &config).unwrap();

            assert_eq!(result.score_history.len(), 201);
            for window in result.score_history.windows(2) {
                assert!(
                    window[1] >= window[0],
                    "best score history should be non-decreasing: {} < {}",
                    window[1],
                    window[0]
                );
            }
            assert_eq!(*result.score_history.last().unwrap(), result.best_score);
            assert!(result.best_iteration <= result.iterations);
        }
    }

    #[test]
    fn test_ils_reproducible_with_seed() {
        let problem = thirty_items();
        let config = IlsConfig::default()
            .with_iterations(100)
            .with_perturbation_level(2)
            .with_seed(2024);

        let a = IlsRunner::run(&problem, &config).unwrap();
        let b = IlsRunner::run(&problem, &config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_ils_reported_totals_match_best() {
        let problem = thirty_items();
        let config = IlsConfig::default().with_iterations(100).with_seed(3);

        let result = IlsRunner::run(&problem, &config).unwrap();
        let eval = Evaluator::new(&problem, config.violation_rate)
            .evaluate(&result.best)
            .unwrap();

        assert_eq!(result.evaluation, eval);
        assert_eq!(result.best_score, eval.score);
        assert_eq!(result.capacity_used, eval.weight);
        assert_eq!(result.selected.len(), result.best.count_ones());
    }

    #[test]
    fn test_ils_not_worse_than_greedy_start() {
        let problem = thirty_items();
        let start = InitialStrategy::Greedy(GreedyOrder::Density);
        let greedy = GreedyRunner::run(&problem, GreedyOrder::Density).unwrap();
        let config = IlsConfig::default()
            .with_iterations(300)
            .with_perturbation_level(2)
            .with_initial_strategy(start)
            .with_seed(11);

        let result = IlsRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_score >= greedy.evaluation.value,
            "ILS ({}) should not lose to its greedy start ({})",
            result.best_score,
            greedy.evaluation.value
        );
    }

    #[test]
    fn test_ils_full_descent_ends_in_local_optimum() {
        let problem = thirty_items();
        let config = IlsConfig::default()
            .with_iterations(50)
            .with_perturbation_level(2)
            .with_full_descent(true)
            .with_seed(5);

        let result = IlsRunner::run(&problem, &config).unwrap();

        let ls = LocalSearch::new(Evaluator::new(&problem, config.violation_rate));
        let step = ls.step(&result.best).unwrap();
        assert_eq!(step.moves, 0, "best should be a 1-flip local optimum");
        assert!(result.is_feasible(&problem));
    }

    #[test]
    fn test_ils_rejects_invalid_config() {
        let problem = abc();
        let config = IlsConfig::default().with_perturbation_level(0);
        assert!(matches!(
            IlsRunner::run(&problem, &config),
            Err(KnapsackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_compare_includes_all_baselines() {
        let problem = abc();
        let config = IlsConfig::default()
            .with_iterations(50)
            .with_perturbation_level(2)
            .with_initial_strategy(InitialStrategy::Empty)
            .with_seed(42);

        let comparison = IlsRunner::compare(&problem, &config).unwrap();

        assert_eq!(comparison.baselines.len(), 3);
        let best = comparison.best_baseline().unwrap();
        assert_eq!(best.order, GreedyOrder::Weight);
        assert_eq!(best.evaluation.value, 7.0);
        assert_eq!(comparison.gain(), Some(0.0));
    }
}
