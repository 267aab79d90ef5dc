//! Request and result types for a single selection problem.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::count::total_count;
use crate::enumerate::arrangements;
use crate::mode::{ExplanationStyle, SelectionMode};

/// Maximum number of arrangements returned as a sample.
pub const SAMPLE_LIMIT: usize = 10;

/// A validated selection problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Item labels; their order defines enumeration order.
    pub items: Vec<String>,
    /// Selection size. Negative values are accepted and count as zero.
    pub r: i64,
    pub mode: SelectionMode,
    #[serde(default)]
    pub style: ExplanationStyle,
}

impl SelectionRequest {
    pub fn new(items: Vec<String>, r: i64, mode: SelectionMode) -> Self {
        Self {
            items,
            r,
            mode,
            style: ExplanationStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ExplanationStyle) -> Self {
        self.style = style;
        self
    }

    /// Run the engine on this request.
    pub fn compute(&self) -> Computation {
        compute(&self.items, self.r, self.mode)
    }
}

/// Count and sample for one selection problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computation {
    /// Number of items.
    pub n: usize,
    pub r: i64,
    pub mode: SelectionMode,
    /// Exact number of arrangements.
    #[serde(with = "big_count")]
    pub total_count: BigUint,
    /// The first [`SAMPLE_LIMIT`] arrangements in canonical order.
    pub sample: Vec<Vec<String>>,
}

impl Computation {
    /// Attach an explanation, producing the final result.
    pub fn with_explanation(self, explanation: impl Into<String>) -> SelectionResult {
        SelectionResult {
            n: self.n,
            r: self.r,
            mode: self.mode,
            total_count: self.total_count,
            sample: self.sample,
            explanation: explanation.into(),
        }
    }
}

/// Computation plus its natural-language explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub n: usize,
    pub r: i64,
    pub mode: SelectionMode,
    #[serde(with = "big_count")]
    pub total_count: BigUint,
    pub sample: Vec<Vec<String>>,
    /// Model-generated text or a fallback diagnostic.
    pub explanation: String,
}

/// Count all arrangements of `items` and sample the first few.
///
/// The sample is pulled lazily, so the cost does not depend on the total count.
pub fn compute(items: &[String], r: i64, mode: SelectionMode) -> Computation {
    let n = items.len();
    Computation {
        n,
        r,
        mode,
        total_count: total_count(n, r, mode),
        sample: arrangements(items, r, mode).take(SAMPLE_LIMIT).collect(),
    }
}

/// Serde adapter writing a [`BigUint`] as a bare JSON integer of any size.
///
/// Only meaningful with `serde_json`, which understands raw values; other
/// serde formats do not round-trip the field. Reading from JSON text (`from_str`,
/// `from_slice`, `from_reader`) keeps every digit. Reading from a
/// [`serde_json::Value`] only sees the number the `Value` kept, so counts past
/// `u64::MAX` are already rounded by then.
pub mod big_count {
    use num_bigint::BigUint;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::value::RawValue;

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(value.to_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        raw.get().trim().parse().map_err(D::Error::custom)
    }
}
