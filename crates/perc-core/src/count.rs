//! Exact arrangement counts.
//!
//! Counts are computed as falling products over arbitrary-precision integers,
//! which equals `n! / (n-r)!` and `n! / (r! (n-r)!)` without building the full
//! factorials.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::mode::SelectionMode;

/// Number of ordered selections of `r` items out of `n`.
pub fn permutation_count(n: usize, r: usize) -> BigUint {
    if r > n {
        return BigUint::zero();
    }
    ((n - r + 1)..=n).fold(BigUint::one(), |acc, k| acc * BigUint::from(k))
}

/// Number of unordered selections of `r` items out of `n`.
pub fn combination_count(n: usize, r: usize) -> BigUint {
    if r > n {
        return BigUint::zero();
    }
    let k = r.min(n - r);
    // acc holds C(n, i) at the top of each step, so the division is exact.
    (0..k).fold(BigUint::one(), |acc, i| acc * BigUint::from(n - i) / BigUint::from(i + 1))
}

/// Count for a possibly negative selection size. Negative `r` counts as zero.
pub fn total_count(n: usize, r: i64, mode: SelectionMode) -> BigUint {
    let Ok(r) = usize::try_from(r) else {
        return BigUint::zero();
    };
    match mode {
        SelectionMode::Ordered => permutation_count(n, r),
        SelectionMode::Unordered => combination_count(n, r),
    }
}
