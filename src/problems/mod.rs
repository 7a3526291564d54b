//! Concrete problem instances.
//!
//! Bank domains implement [`Decomposition`](crate::traits::Decomposition) and
//! are paired with an outcome shape through type aliases:
//! - [`word_bank`]      : build a string by concatenating words.
//! - [`number_bank`]    : build an integer by summing numbers.
//!
//! Recurrences without a bank implement [`Tiered`](crate::traits::Tiered)
//! directly:
//! - [`fibonacci`]      : the linear sequence 0, 1, 1, 2, 3, 5, ...
//! - [`grid_traveler`]  : right/down paths across a grid.

pub mod fibonacci;
pub mod grid_traveler;
pub mod number_bank;
pub mod word_bank;
