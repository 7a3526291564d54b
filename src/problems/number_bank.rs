//! Building a target integer by summing numbers from a bank.
//!
//! Residuals are what remains of the target; a number fits when it does not
//! exceed the residual. Table indices are partial sums, so cell `i` answers
//! for the target `i`.
//!
//! All three tiers append the number last, after the combination for the
//! smaller sum.

use crate::engine::Solver;
use crate::error::Result;
use crate::outcome::{AnyCombination, Decision, Shortest};
use crate::traits::Decomposition;
use crate::utils::{non_negative, to_index};

/// Can the target be reached as a sum?
pub type CanSum = Solver<NumberBank, Decision>;

/// Any one combination reaching the target.
pub type HowSum = Solver<NumberBank, AnyCombination>;

/// A combination with the fewest numbers.
pub type BestSum = Solver<NumberBank, Shortest>;

/// A validated non-negative target and bank.
///
/// Numbers may be reused any number of times. Zeros never shrink a residual
/// and are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberBank {
    target: i64,
    numbers: Vec<i64>,
    extent: usize,
}

impl NumberBank {
    /// Validate the bank, then the target.
    ///
    /// # Errors
    /// [`SolveError::InvalidInput`](crate::SolveError::InvalidInput) for any
    /// negative bank entry, or a negative target.
    pub fn new(target: i64, numbers: &[i64]) -> Result<Self> {
        for &n in numbers {
            non_negative("bank entry", n)?;
        }
        let extent = to_index("target", target)?;
        Ok(Self {
            target,
            numbers: numbers.to_vec(),
            extent,
        })
    }

    pub fn target_value(&self) -> i64 {
        self.target
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }
}

impl Decomposition for NumberBank {
    type Residual = i64;
    type Part = i64;

    fn target(&self) -> i64 {
        self.target
    }

    fn parts(&self) -> &[i64] {
        &self.numbers
    }

    fn is_base(&self, residual: i64) -> bool {
        residual == 0
    }

    fn reduce(&self, residual: i64, number: i64) -> Option<i64> {
        (number > 0 && number <= residual).then(|| residual - number)
    }

    fn extent(&self) -> usize {
        self.extent
    }

    fn advance(&self, index: usize, number: i64) -> Option<usize> {
        if number == 0 {
            return None;
        }
        usize::try_from(number)
            .ok()
            .and_then(|n| index.checked_add(n))
            .filter(|&next| next <= self.extent)
    }
}
