//! Wire type inference and tagged value representation.
//!
//! The store's protocol carries every attribute as a single-entry map from a
//! type tag to a stringified value (`{"N": "123"}`, `{"S": "text"}`). This
//! module decides the tag from a native value's runtime type and produces the
//! tagged wire form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The wire-level type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Number,
    String,
    Binary,
}

impl WireType {
    /// The protocol tag for this type.
    pub fn tag(&self) -> &'static str {
        match self {
            WireType::Number => "N",
            WireType::String => "S",
            WireType::Binary => "B",
        }
    }

    /// Infer the wire type of a native value.
    ///
    /// Integers and floats both map to [`WireType::Number`]; text maps to
    /// [`WireType::String`]. Any other value (bool, null, array, object) has
    /// no wire type and returns `None`; callers decide whether to drop the
    /// attribute or fail. Binary is never inferred: the tag exists in the
    /// protocol but this layer does not produce it on the write path.
    pub fn infer(value: &Value) -> Option<WireType> {
        match value {
            Value::Number(_) => Some(WireType::Number),
            Value::String(_) => Some(WireType::String),
            _ => None,
        }
    }
}

/// A tagged wire value: one type tag, one stringified payload.
///
/// Serializes to the protocol's single-entry map form:
/// `WireValue::N("251".into())` becomes `{"N": "251"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireValue {
    N(String),
    S(String),
    B(String),
}

impl WireValue {
    /// Build the wire form of a native value, or `None` if its type is
    /// unsupported. Agrees with [`WireType::infer`] on supportedness.
    pub fn from_value(value: &Value) -> Option<WireValue> {
        match value {
            Value::Number(n) => Some(WireValue::N(stringify_number(n))),
            Value::String(s) => Some(WireValue::S(s.clone())),
            _ => None,
        }
    }

    /// The wire type of this value.
    pub fn wire_type(&self) -> WireType {
        match self {
            WireValue::N(_) => WireType::Number,
            WireValue::S(_) => WireType::String,
            WireValue::B(_) => WireType::Binary,
        }
    }

    /// The raw stringified payload, without the tag.
    pub fn raw(&self) -> &str {
        match self {
            WireValue::N(s) | WireValue::S(s) | WireValue::B(s) => s,
        }
    }
}

/// Stringify a number for the wire.
///
/// The protocol represents numbers as decimal strings. Floats with no
/// fractional part print as integers (`1376038837.0` → `"1376038837"`), so a
/// numeric value round-trips to the same string regardless of whether the
/// caller supplied it as an integer or a float.
pub fn stringify_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // as_f64 is always Some for a Number that is neither i64 nor u64.
    let f = n.as_f64().unwrap_or(0.0);
    // The upper bound is exclusive: `i64::MAX as f64` rounds up to 2^63,
    // which does not fit in an i64.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}
