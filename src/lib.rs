//! 0/1 knapsack optimization via Iterated Local Search.
//!
//! Provides a penalty-relaxed Iterated Local Search (ILS) for the 0/1
//! knapsack problem, together with greedy baselines to compare against:
//!
//! - **Catalog**: ordered, uniquely named items; the order fixes the bit
//!   positions of every [`Solution`].
//! - **Evaluator**: total value, total weight and a penalized score that
//!   charges `violation_rate` per unit of overweight.
//! - **Initial strategies**: random, empty, full, or a greedy fill by
//!   weight, value or value density.
//! - **Perturbation**: balanced multi-bit flips (half removals, half
//!   additions).
//! - **Local search**: best-improvement over single bit flips.
//! - **ILS**: perturbation + local search cycles with strict acceptance
//!   and stagnation-based early stopping.
//! - **Greedy baselines**: the three greedy fills as stand-alone solvers.
//!
//! # Example
//!
//! ```
//! use u_knapsack::{IlsConfig, IlsRunner, Item, KnapsackProblem};
//!
//! let problem = KnapsackProblem::from_items(
//!     vec![
//!         Item::new("A", 2.0, 3.0).unwrap(),
//!         Item::new("B", 3.0, 4.0).unwrap(),
//!         Item::new("C", 4.0, 5.0).unwrap(),
//!     ],
//!     5.0,
//! )
//! .unwrap();
//!
//! let config = IlsConfig::default().with_iterations(200).with_perturbation_level(2);
//! let result = IlsRunner::run(&problem, &config).unwrap();
//! assert!(result.best_score <= 7.0);
//! assert_eq!(result.score_history.len(), 201);
//! ```
//!
//! # Architecture
//!
//! Single-threaded and deterministic: each run owns one seeded `StdRng`,
//! and the initial strategy and perturbations draw from it in call order.
//! Progress is reported through `tracing` events; install a subscriber to
//! see them.

pub mod catalog;
pub mod construct;
pub mod error;
pub mod eval;
pub mod greedy;
pub mod ils;
pub mod local_search;
pub mod perturb;
pub mod problem;
pub mod solution;

pub use catalog::{Catalog, FieldNames, Item, Record};
pub use construct::InitialStrategy;
pub use error::{KnapsackError, Result};
pub use eval::{Evaluation, Evaluator};
pub use greedy::{GreedyOrder, GreedyResult, GreedyRunner};
pub use ils::{Comparison, IlsConfig, IlsResult, IlsRunner};
pub use local_search::{LocalSearch, LocalSearchOutcome};
pub use perturb::{perturb, select_flips};
pub use problem::KnapsackProblem;
pub use solution::Solution;
