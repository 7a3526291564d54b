//! Error type shared by every solver.
//!
//! There is exactly one failure: the caller handed in a number that cannot be
//! a target, bank entry or dimension. Every other input has a defined answer
//! (false, zero, not-found or an empty collection).

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SolveError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// A numeric input was rejected before any computation started.
    #[error("invalid input: {what} = {value} is {reason}")]
    InvalidInput {
        /// Which argument was rejected, e.g. `"bank entry"` or `"rows"`.
        what: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl SolveError {
    pub(crate) fn negative(what: &'static str, value: i64) -> Self {
        SolveError::InvalidInput {
            what,
            value,
            reason: "negative",
        }
    }

    pub(crate) fn too_large(what: &'static str, value: i64) -> Self {
        SolveError::InvalidInput {
            what,
            value,
            reason: "too large to tabulate on this platform",
        }
    }
}
