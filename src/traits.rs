//! Core trait definitions for the shared recurrence.
//!
//! Every solver in this crate is the same recurrence seen through three hooks:
//! - a *base-case test*: the residual target is empty (empty string, zero),
//! - a *failure test*: a part does not fit the residual (not a prefix, or
//!   larger than the remaining sum),
//! - a *combine* rule: attach one part to the results for a shorter residual.
//!
//! [`Decomposition`] supplies the first two plus the domain-specific half of
//! the third (where a part goes in a combination). [`Outcome`] supplies the
//! answer-specific half (summing counts, keeping the shortest, collecting all).
//! [`Tiered`] is the uniform face of anything solvable at the three tiers.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::engine::Strategy;

/// A target together with an ordered bank of reusable parts.
///
/// Semantics:
/// - Recursive tiers walk *residuals*: `target()` first, then whatever
///   `reduce` leaves after taking one part, down to a residual where
///   `is_base` holds.
/// - The tabulated tier walks *indices* `0..=extent()`: index 0 is the base
///   case and `advance(i, part)` is the index reached by appending `part`
///   after `i`. `advance` must only ever move strictly forward.
pub trait Decomposition {
    /// What is left to build. Also the memo key.
    type Residual: Copy + Eq + Hash + Debug;

    /// One reusable bank entry.
    type Part: Copy + Debug;

    /// The full target as a residual.
    fn target(&self) -> Self::Residual;

    /// Bank entries in caller order. Iteration order decides enumeration
    /// order and tie-breaks.
    fn parts(&self) -> &[Self::Part];

    /// Base-case test.
    fn is_base(&self, residual: Self::Residual) -> bool;

    /// Residual left after using `part` on `residual`, or `None` when the part
    /// does not fit (the failure test).
    fn reduce(&self, residual: Self::Residual, part: Self::Part) -> Option<Self::Residual>;

    /// Add `part` to a combination built for the residual that `reduce`
    /// produced. Appends by default.
    fn attach(&self, part: Self::Part, combination: &mut Vec<Self::Part>) {
        combination.push(part);
    }

    /// Last table index; the table has `extent() + 1` cells.
    fn extent(&self) -> usize;

    /// Table index reached from `index` by appending `part`, or `None` when
    /// the part does not fit there.
    fn advance(&self, index: usize, part: Self::Part) -> Option<usize>;
}

/// The shape of an answer and how sub-answers combine into it.
///
/// Implementors are zero-sized markers; every hook is an associated function.
pub trait Outcome<D: Decomposition> {
    type Value: Clone + Debug;

    /// Answer for a residual that already satisfies the base case.
    fn base() -> Self::Value;

    /// Starting accumulator, which is also the "no solution" answer.
    fn empty() -> Self::Value;

    /// Recursive combine: fold the answer `sub` for the residual reached via
    /// `part` into `acc`. Returning `Break` stops scanning the remaining parts.
    fn fold(
        problem: &D,
        acc: &mut Self::Value,
        part: D::Part,
        sub: &Self::Value,
    ) -> ControlFlow<()>;

    /// Tabulation combine: push the finalized answer `from` forward through
    /// `part` into the not-yet-finalized `cell`.
    fn project(cell: &mut Self::Value, part: D::Part, from: &Self::Value);

    /// Whether a finalized table cell holds anything worth projecting.
    fn is_reached(value: &Self::Value) -> bool;
}

/// Something that can be solved at each of the three tiers with identical
/// answers (up to the documented tie-break freedom of shortest results).
pub trait Tiered {
    type Output;

    /// Per-call memo for the memoized tier.
    type Memo: Default;

    /// Exhaustive recursion with no reuse of shared subproblems.
    fn naive(&self) -> Self::Output;

    /// Recursion with a memo keyed by residual. A fresh memo is created when
    /// `memo` is `None`; a supplied memo must not be shared between calls
    /// with different inputs.
    fn memoized(&self, memo: Option<&mut Self::Memo>) -> Self::Output;

    /// Forward-filled table, no recursion.
    fn tabulated(&self) -> Self::Output;

    /// Dispatch on `strategy`, always with a fresh memo or table.
    fn solve(&self, strategy: Strategy) -> Self::Output {
        match strategy {
            Strategy::Naive => self.naive(),
            Strategy::Memoized => self.memoized(None),
            Strategy::Tabulated => self.tabulated(),
        }
    }
}
