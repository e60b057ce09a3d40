//! Comparison operators for query conditions.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The store protocol's closed set of condition operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Between,
}

impl ComparisonOperator {
    /// Map a condition-key symbol to its operator.
    ///
    /// Total over all inputs: the seven recognized symbols map to their
    /// operators, and anything else falls back to `Eq`. The fallback is
    /// logged so an unintended equals-comparison is distinguishable from a
    /// deliberate one.
    pub fn from_symbol(symbol: &str) -> ComparisonOperator {
        match symbol {
            "<" => ComparisonOperator::Lt,
            "<=" => ComparisonOperator::Le,
            ">" => ComparisonOperator::Gt,
            ">=" => ComparisonOperator::Ge,
            "=" => ComparisonOperator::Eq,
            "!=" => ComparisonOperator::Ne,
            "~" => ComparisonOperator::Between,
            other => {
                debug!(symbol = other, "unrecognized comparison symbol, defaulting to EQ");
                ComparisonOperator::Eq
            }
        }
    }
}
