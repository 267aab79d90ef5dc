//! PerC combinatorics engine.
//!
//! Given a list of item labels, a selection size and a mode, this crate
//! computes the exact number of arrangements (arbitrary precision) and a short
//! sample of the arrangements themselves in canonical order.
//!
//! ## Usage
//!
//! ```rust
//! use perc_core::{compute, SelectionMode};
//!
//! let items: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
//! let result = compute(&items, 2, SelectionMode::Unordered);
//!
//! assert_eq!(result.total_count.to_string(), "3");
//! assert_eq!(result.sample[0], vec!["A".to_string(), "B".to_string()]);
//! ```

mod count;
mod enumerate;
mod error;
mod mode;
mod selection;

pub use count::{combination_count, permutation_count, total_count};
pub use enumerate::{arrangements, Combinations, Permutations};
pub use error::{CoreError, CoreResult};
pub use mode::{ExplanationStyle, SelectionMode};
pub use selection::{
    big_count, compute, Computation, SelectionRequest, SelectionResult, SAMPLE_LIMIT,
};

pub use num_bigint::BigUint;
