//! Forward-filled table used by the tabulated tier.
//!
//! Cells are indexed `0..=extent`. The fill loop visits indices in increasing
//! order and only ever writes cells ahead of the one it is reading, so a cell
//! is final by the time the loop reaches it.

/// Tabulation array for one top-level call.
#[derive(Debug, Clone)]
pub struct Table<T> {
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// A table covering indices `0..=extent`, every cell set to `fill`, with
    /// `base` at index 0.
    pub fn new(extent: usize, fill: T, base: T) -> Self {
        let mut cells = vec![fill; extent + 1];
        cells[0] = base;
        Self { cells }
    }
}

impl<T> Table<T> {
    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a table built with [`Table::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.cells.get(index)
    }

    /// Seed an extra base cell before the fill loop starts.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.cells.get_mut(index)
    }

    /// Borrow the finalized cell `from` together with the pending cell `to`.
    ///
    /// # Panics
    /// Panics unless `from < to < len()`.
    pub fn project(&mut self, from: usize, to: usize) -> (&T, &mut T) {
        assert!(from < to, "projection must move forward: {from} -> {to}");
        let (head, tail) = self.cells.split_at_mut(to);
        (&head[from], &mut tail[0])
    }

    /// Consume the table, returning the cell at `index`.
    pub fn into_cell(mut self, index: usize) -> Option<T> {
        if index < self.cells.len() {
            Some(self.cells.swap_remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn base_cell_is_seeded() {
        let t = Table::new(3, 0u32, 1);
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.get(0), Some(&1));
        assert_eq!(t.get(3), Some(&0));
        assert_eq!(t.get(4), None);
    }

    #[test]
    fn extra_seed_cells() {
        let mut t = Table::new(2, 0u8, 0);
        if let Some(cell) = t.get_mut(1) {
            *cell = 1;
        }
        assert!(t.get_mut(3).is_none());
        assert_eq!(t.get(1), Some(&1));
    }

    #[test]
    fn zero_extent_has_only_the_base() {
        let t = Table::new(0, false, true);
        assert_eq!(t.len(), 1);
        assert_eq!(t.into_cell(0), Some(true));
    }

    #[test]
    fn project_reads_behind_and_writes_ahead() {
        let mut t = Table::new(5, 0u32, 1);
        for i in 0..5 {
            let (from, to) = t.project(i, i + 1);
            *to += *from * 2;
        }
        assert_eq!(t.into_cell(5), Some(32));
    }

    #[test]
    #[should_panic(expected = "projection must move forward")]
    fn project_rejects_backward_moves() {
        let mut t = Table::new(2, 0u8, 1);
        let _ = t.project(2, 1);
    }
}
