use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the timebuckets workspace.
///
/// Bounds that cannot be parsed are a recoverable condition (the bounds are
/// cleared), while a negative span or an unusable interval are caller errors
/// that propagate.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BucketsError {
    /// The supplied bounds could not be parsed into two instants.
    #[error("invalid bounds: {reason}")]
    InvalidBounds {
        /// Human-readable description of what failed to parse.
        reason: String,
    },

    /// Both bounds parsed but the upper bound precedes the lower bound.
    #[error("negative span: upper bound {upper} is before lower bound {lower}")]
    NegativeSpan {
        /// Lower bound as supplied (RFC 3339).
        lower: String,
        /// Upper bound as supplied (RFC 3339).
        upper: String,
    },

    /// The interval input is not convertible to a positive duration.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// A configuration value has the wrong shape.
    #[error("invalid setting {key}: {reason}")]
    InvalidSetting {
        /// Configuration key, e.g. "histogram:maxBars".
        key: String,
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl BucketsError {
    /// Helper: build an `InvalidBounds` error.
    pub fn invalid_bounds(reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            reason: reason.into(),
        }
    }

    /// Helper: build an `InvalidInterval` error.
    pub fn invalid_interval(what: impl Into<String>) -> Self {
        Self::InvalidInterval(what.into())
    }

    /// Helper: build an `InvalidSetting` error.
    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the condition is recoverable without caller action.
    ///
    /// Unparseable bounds degrade to cleared bounds; everything else is a
    /// programming or configuration error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidBounds { .. })
    }
}
