//! Error types for the rating crate.
//!
//! The control itself never fails at runtime: invalid input is clamped or
//! ignored, because there is no recoverable failure path worth exposing to
//! a presentation layer. These errors exist for hosts that prefer a strict
//! up-front configuration check over silent sanitization.

use thiserror::Error;

/// Errors reported by [`RatingConfig::validate`](crate::RatingConfig::validate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// The configuration asked for zero items; a rating row needs at least
    /// one.
    #[error("item count must be at least 1")]
    ZeroItemCount,

    /// The minimum rating exceeds the maximum implied by the item count.
    #[error("minimum rating {min} exceeds maximum {max}")]
    MinAboveMax { min: f64, max: f64 },
}

/// Result type for rating operations.
pub type RatingResult<T> = Result<T, RatingError>;
