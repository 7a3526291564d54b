//! The linear sequence F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).
//!
//! There is no bank: each term combines the two terms immediately before it.
//! The tabulated tier pushes every term forward into the next two cells that
//! exist. Terms past F(186) saturate at `u128::MAX` in every tier.

use crate::error::Result;
use crate::table::Table;
use crate::traits::Tiered;
use crate::utils::{to_index, Memo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fibonacci {
    n: usize,
}

impl Fibonacci {
    /// # Errors
    /// [`SolveError::InvalidInput`](crate::SolveError::InvalidInput) when `n`
    /// is negative.
    pub fn new(n: i64) -> Result<Self> {
        Ok(Self {
            n: to_index("index", n)?,
        })
    }

    pub fn index(&self) -> usize {
        self.n
    }

    fn naive_at(n: usize) -> u128 {
        if n < 2 {
            return n as u128;
        }
        Self::naive_at(n - 1).saturating_add(Self::naive_at(n - 2))
    }

    fn memoized_at(n: usize, memo: &mut Memo<usize, u128>) -> u128 {
        if n < 2 {
            return n as u128;
        }
        if let Some(&done) = memo.get(&n) {
            return done;
        }
        let value =
            Self::memoized_at(n - 1, memo).saturating_add(Self::memoized_at(n - 2, memo));
        memo.insert(n, value);
        value
    }
}

impl Tiered for Fibonacci {
    type Output = u128;
    type Memo = Memo<usize, u128>;

    fn naive(&self) -> u128 {
        Self::naive_at(self.n)
    }

    fn memoized(&self, memo: Option<&mut Self::Memo>) -> u128 {
        let mut fresh = Memo::new();
        let memo = memo.unwrap_or(&mut fresh);
        Self::memoized_at(self.n, memo)
    }

    fn tabulated(&self) -> u128 {
        let n = self.n;
        let mut table = Table::new(n, 0u128, 0);
        if let Some(one) = table.get_mut(1) {
            *one = 1;
        }
        for i in 0..n {
            for to in [i + 1, i + 2].into_iter().filter(|&to| to <= n) {
                let (from, cell) = table.project(i, to);
                *cell = cell.saturating_add(*from);
            }
        }
        table.into_cell(n).unwrap_or_default()
    }
}
