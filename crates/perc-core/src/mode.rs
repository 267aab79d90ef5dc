//! Selection modes and explanation styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether the order of selected items matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Order-sensitive selection (permutation).
    #[serde(rename = "perm")]
    Ordered,
    /// Order-insensitive selection (combination).
    #[serde(rename = "comb")]
    Unordered,
}

impl SelectionMode {
    /// Wire name used by the HTTP API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordered => "perm",
            Self::Unordered => "comb",
        }
    }

    /// Mathematical name of the selection.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Ordered => "permutation",
            Self::Unordered => "combination",
        }
    }

    /// Standard notation for the count, e.g. `P(n,r)`.
    pub fn notation(&self) -> &'static str {
        match self {
            Self::Ordered => "P(n,r)",
            Self::Unordered => "C(n,r)",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perm" => Ok(Self::Ordered),
            "comb" => Ok(Self::Unordered),
            other => Err(CoreError::invalid_mode(other)),
        }
    }
}

/// Register of the generated explanation.
///
/// Anything other than `"Expert"` falls back to the tutor register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExplanationStyle {
    /// Friendly, analogy-driven walkthrough.
    #[default]
    Tutor,
    /// Formal derivation with formulas and applications.
    Expert,
}

impl ExplanationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tutor => "Tutor",
            Self::Expert => "Expert",
        }
    }
}

impl From<&str> for ExplanationStyle {
    fn from(value: &str) -> Self {
        if value == "Expert" {
            Self::Expert
        } else {
            Self::Tutor
        }
    }
}

impl From<String> for ExplanationStyle {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ExplanationStyle> for String {
    fn from(style: ExplanationStyle) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for ExplanationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
