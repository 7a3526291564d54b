//! Tiered Dynamic Programming
//!
//! This crate answers four related questions about building a target out of
//! reusable parts: *can* it be built, in *how many* ways, *which* ways, and
//! what is the *shortest* way. Each question is answered at three tiers:
//!
//! 1. exhaustive recursion,
//! 2. the same recursion with a per-call memo keyed by the residual target,
//! 3. bottom-up tabulation that forward-fills a table from the base case.
//!
//! All three tiers share one recurrence. A [`Decomposition`] describes the
//! domain (which parts fit a residual and what is left afterwards) and an
//! [`traits::Outcome`] describes the answer shape (how sub-results combine).
//! The generic [`Solver`] runs any pairing under any [`Strategy`].
//!
//! ## Quick start
//! ```
//! use tiered_dp::problems::word_bank::{CountConstruct, WordBank};
//! use tiered_dp::{Strategy, Tiered};
//!
//! let words = ["purp", "p", "ur", "le", "purpl"];
//! let solver = CountConstruct::new(WordBank::new("purple", &words));
//! assert_eq!(solver.solve(Strategy::Naive), 2);
//! assert_eq!(solver.solve(Strategy::Memoized), 2);
//! assert_eq!(solver.solve(Strategy::Tabulated), 2);
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains:
//! - a string bank: `CanConstruct`, `CountConstruct`, `AllConstruct`
//! - a number bank: `CanSum`, `HowSum`, `BestSum`
//! - two recurrences without a bank: `Fibonacci` and `GridTraveler`
//!
//! Number inputs are validated when the problem is constructed, so a negative
//! bank entry or target is reported as [`SolveError::InvalidInput`] before any
//! tier runs.

pub mod builder;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::SolverBuilder;
pub use crate::engine::{Solver, Strategy, TierResults};
pub use crate::error::{Result, SolveError};
pub use crate::traits::{Decomposition, Tiered};
pub use crate::utils::Memo;
