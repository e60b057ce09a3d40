//! Error types for all dynawire operations.

use thiserror::Error;

/// Boxed error type used at the store-client seam.
///
/// Store clients keep their own error types; this layer wraps them in
/// [`Error::Store`] when a call fails.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type for dynawire operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A condition key did not split into exactly two whitespace-separated
    /// tokens (`"<attribute> <operator>"`).
    #[error("malformed condition key {key:?}: expected \"<attribute> <operator>\"")]
    MalformedConditionKey { key: String },

    /// An attribute value's type has no wire tag. Raised when formatting an
    /// item under [`UnsupportedPolicy::Fail`](crate::format::UnsupportedPolicy),
    /// or always for condition bounds.
    #[error("unsupported attribute type for {name:?}")]
    UnsupportedAttribute { name: String },

    /// A BETWEEN condition was given a bound count other than two.
    #[error("BETWEEN condition on {name:?} requires exactly two bounds (got {got})")]
    BetweenBounds { name: String, got: usize },

    /// The underlying store client reported a failure.
    #[error("store call failed: {source}")]
    Store {
        #[source]
        source: BoxError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
