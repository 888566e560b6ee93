//! Balanced multi-bit perturbation.
//!
//! A perturbation of level `k` flips `k` bits of the current solution. To
//! avoid drifting towards ever fuller (or emptier) knapsacks, about half of
//! the flips remove items and the rest add items:
//!
//! - `remove = min(ones, k / 2)` positions are drawn from the 1-bits,
//! - `add = k - remove` positions are drawn from the 0-bits,
//!
//! each without replacement. When the 0-bits cannot supply `add`
//! positions, the shortfall is moved onto removals. Since `k` is clamped
//! to `n = ones + zeros`, the two sets can always cover `k` flips; on an
//! all-ones solution this draws `k` positions uniformly from the whole
//! range.

use rand::seq::index::sample;
use rand::Rng;

use crate::solution::Solution;

/// Chooses the positions a level-`level` perturbation flips.
///
/// Returned positions are distinct; their count is `min(level, n)`.
pub fn select_flips<R: Rng>(solution: &Solution, level: usize, rng: &mut R) -> Vec<usize> {
    let n = solution.len();
    let k = level.min(n);
    if k == 0 {
        return Vec::new();
    }

    let ones = solution.ones();
    let zeros = solution.zeros();
    let add = (k - ones.len().min(k / 2)).min(zeros.len());
    let remove = k - add;

    let mut flips = Vec::with_capacity(k);
    flips.extend(sample(rng, ones.len(), remove).into_iter().map(|j| ones[j]));
    flips.extend(sample(rng, zeros.len(), add).into_iter().map(|j| zeros[j]));
    flips
}

/// Returns a copy of `solution` with `min(level, n)` bits flipped.
///
/// The input is left untouched.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_knapsack::{perturb, Solution};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let start = Solution::from(vec![1, 0, 1, 0, 1, 0]);
/// let next = perturb(&start, 2, &mut rng);
///
/// assert_eq!(start.hamming_distance(&next), 2);
/// // one removal, one addition
/// assert_eq!(next.count_ones(), start.count_ones());
/// ```
pub fn perturb<R: Rng>(solution: &Solution, level: usize, rng: &mut R) -> Solution {
    let mut next = solution.clone();
    for i in select_flips(solution, level, rng) {
        next.flip(i);
    }
    next
}
