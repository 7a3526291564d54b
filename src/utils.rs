//! Shared memo type and input validation helpers.

use std::collections::HashMap;

use crate::error::{Result, SolveError};

/// Memo for the memoized tier: residual target to its finished answer.
///
/// One memo belongs to one top-level call. Reusing it for a different target
/// or bank returns stale answers.
pub type Memo<K, V> = HashMap<K, V>;

/// Reject a negative number, naming the argument it came from.
#[inline]
pub fn non_negative(what: &'static str, value: i64) -> Result<i64> {
    if value < 0 {
        Err(SolveError::negative(what, value))
    } else {
        Ok(value)
    }
}

/// Validate `value` and convert it to a table index.
pub fn to_index(what: &'static str, value: i64) -> Result<usize> {
    let value = non_negative(what, value)?;
    usize::try_from(value).map_err(|_| SolveError::too_large(what, value))
}
