//! Counting right/down paths from the top-left to the bottom-right cell of a
//! `rows x cols` grid.
//!
//! G(r, c) = G(r - 1, c) + G(r, c - 1), with G(1, 1) = 1 and G(r, c) = 0 when
//! either dimension is 0.
//!
//! The tabulated tier flattens the `(rows + 1) x (cols + 1)` table row-major,
//! so both neighbours a cell projects into (right, below) sit at higher
//! indices. Path counts saturate at `u128::MAX` in every tier.

use crate::error::{Result, SolveError};
use crate::table::Table;
use crate::traits::Tiered;
use crate::utils::{to_index, Memo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTraveler {
    rows: usize,
    cols: usize,
}

impl GridTraveler {
    /// # Errors
    /// [`SolveError::InvalidInput`] when either dimension is negative, or the
    /// table for the grid would not fit in memory addressing.
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        let r = to_index("rows", rows)?;
        let c = to_index("cols", cols)?;
        r.checked_add(1)
            .zip(c.checked_add(1))
            .and_then(|(r1, c1)| r1.checked_mul(c1))
            .ok_or_else(|| SolveError::too_large("rows", rows))?;
        Ok(Self { rows: r, cols: c })
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn naive_at(rows: usize, cols: usize) -> u128 {
        match (rows, cols) {
            (0, _) | (_, 0) => 0,
            (1, 1) => 1,
            _ => Self::naive_at(rows - 1, cols).saturating_add(Self::naive_at(rows, cols - 1)),
        }
    }

    fn memoized_at(rows: usize, cols: usize, memo: &mut Memo<(usize, usize), u128>) -> u128 {
        match (rows, cols) {
            (0, _) | (_, 0) => return 0,
            (1, 1) => return 1,
            _ => {}
        }
        if let Some(&done) = memo.get(&(rows, cols)) {
            return done;
        }
        let value = Self::memoized_at(rows - 1, cols, memo)
            .saturating_add(Self::memoized_at(rows, cols - 1, memo));
        memo.insert((rows, cols), value);
        value
    }
}

impl Tiered for GridTraveler {
    type Output = u128;
    type Memo = Memo<(usize, usize), u128>;

    fn naive(&self) -> u128 {
        Self::naive_at(self.rows, self.cols)
    }

    fn memoized(&self, memo: Option<&mut Self::Memo>) -> u128 {
        let mut fresh = Memo::new();
        let memo = memo.unwrap_or(&mut fresh);
        Self::memoized_at(self.rows, self.cols, memo)
    }

    fn tabulated(&self) -> u128 {
        let (rows, cols) = (self.rows, self.cols);
        let width = cols + 1;
        let at = |i: usize, j: usize| i * width + j;

        let mut table = Table::new(at(rows, cols), 0u128, 0);
        if rows >= 1 && cols >= 1 {
            if let Some(corner) = table.get_mut(at(1, 1)) {
                *corner = 1;
            }
        }
        for i in 0..=rows {
            for j in 0..=cols {
                if j < cols {
                    let (from, right) = table.project(at(i, j), at(i, j + 1));
                    *right = right.saturating_add(*from);
                }
                if i < rows {
                    let (from, below) = table.project(at(i, j), at(i + 1, j));
                    *below = below.saturating_add(*from);
                }
            }
        }
        table.into_cell(at(rows, cols)).unwrap_or_default()
    }
}
