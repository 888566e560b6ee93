//! Iterated Local Search (ILS) for the 0/1 knapsack problem.
//!
//! A single-solution metaheuristic that alternates a small random
//! perturbation with local search. The perturbation kicks the search out
//! of the current local optimum; local search pulls it back towards a
//! (possibly different) optimum. Only strict improvements are accepted,
//! and the run stops early once the best score has stagnated for a
//! configurable number of iterations.
//!
//! # References
//!
//! - Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//!   Search", *Handbook of Metaheuristics*, 320-353.

mod config;
mod runner;

pub use config::IlsConfig;
pub use runner::{Comparison, IlsResult, IlsRunner};
