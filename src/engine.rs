//! Generic three-tier engine for bank problems.
//!
//! [`Solver`] pairs a [`Decomposition`] with an [`Outcome`] and evaluates the
//! shared recurrence three ways:
//! 1. `naive`: recurse on every fitting part, recomputing shared residuals.
//! 2. `memoized`: the same recursion, consulting a memo keyed by residual
//!    before recursing and storing each residual's answer before returning.
//! 3. `tabulated`: no recursion; seed index 0 with the base answer and push
//!    each reached cell forward through every part, in increasing index order.
//!
//! The engine is completely generic; see `problems` for the concrete domains.

use std::marker::PhantomData;

use crate::table::Table;
use crate::traits::{Decomposition, Outcome, Tiered};
use crate::utils::Memo;

/// Which tier to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Exhaustive recursion. Exponential in the target's size.
    Naive,
    /// Recursion over a per-call memo.
    Memoized,
    /// Forward-filled table. Uses no call stack, so it is the tier to pick
    /// for large targets.
    #[default]
    Tabulated,
}

impl Strategy {
    /// Every tier, cheapest-to-write first.
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Memoized, Strategy::Tabulated];
}

/// Answers from all three tiers for one problem instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierResults<V> {
    pub naive: V,
    pub memoized: V,
    pub tabulated: V,
}

impl<V: PartialEq> TierResults<V> {
    /// True when every tier returned the same answer.
    pub fn agree(&self) -> bool {
        self.naive == self.memoized && self.memoized == self.tabulated
    }
}

impl<V> TierResults<V> {
    /// Apply `f` to each tier's answer.
    pub fn map<U>(self, mut f: impl FnMut(V) -> U) -> TierResults<U> {
        TierResults {
            naive: f(self.naive),
            memoized: f(self.memoized),
            tabulated: f(self.tabulated),
        }
    }
}

/// Three-tier solver for problem `D` with answer shape `O`.
///
/// Typical usage:
/// ```
/// use tiered_dp::problems::number_bank::{BestSum, NumberBank};
/// use tiered_dp::Tiered;
///
/// let solver = BestSum::new(NumberBank::new(8, &[1, 4, 5]).unwrap());
/// let best = solver.run().unwrap();
/// assert_eq!(best.len(), 2);
/// assert_eq!(best.iter().sum::<i64>(), 8);
/// assert_eq!(solver.memoized(None).map(|c| c.len()), Some(2));
/// ```
pub struct Solver<D, O> {
    problem: D,
    strategy: Strategy,
    _outcome: PhantomData<fn() -> O>,
}

impl<D, O> Solver<D, O>
where
    D: Decomposition,
    O: Outcome<D>,
{
    /// Create a solver that runs the tabulated tier by default.
    pub fn new(problem: D) -> Self {
        Self::with_strategy(problem, Strategy::default())
    }

    /// Create a solver with an explicit default tier for [`Solver::run`].
    pub fn with_strategy(problem: D, strategy: Strategy) -> Self {
        Self {
            problem,
            strategy,
            _outcome: PhantomData,
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &D {
        &self.problem
    }

    /// Return the configured tier.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Solve with the configured tier and a fresh memo or table.
    pub fn run(&self) -> O::Value {
        self.solve(self.strategy)
    }

    fn naive_from(&self, residual: D::Residual) -> O::Value {
        if self.problem.is_base(residual) {
            return O::base();
        }
        let mut acc = O::empty();
        for &part in self.problem.parts() {
            if let Some(next) = self.problem.reduce(residual, part) {
                let sub = self.naive_from(next);
                if O::fold(&self.problem, &mut acc, part, &sub).is_break() {
                    break;
                }
            }
        }
        acc
    }

    fn memoized_from(
        &self,
        residual: D::Residual,
        memo: &mut Memo<D::Residual, O::Value>,
    ) -> O::Value {
        if self.problem.is_base(residual) {
            return O::base();
        }
        if let Some(done) = memo.get(&residual) {
            return done.clone();
        }
        let mut acc = O::empty();
        for &part in self.problem.parts() {
            if let Some(next) = self.problem.reduce(residual, part) {
                let sub = self.memoized_from(next, memo);
                if O::fold(&self.problem, &mut acc, part, &sub).is_break() {
                    break;
                }
            }
        }
        memo.insert(residual, acc.clone());
        acc
    }
}

impl<D, O> Tiered for Solver<D, O>
where
    D: Decomposition,
    O: Outcome<D>,
{
    type Output = O::Value;
    type Memo = Memo<D::Residual, O::Value>;

    fn naive(&self) -> O::Value {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("naive", parts = self.problem.parts().len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.naive_from(self.problem.target())
    }

    fn memoized(&self, memo: Option<&mut Self::Memo>) -> O::Value {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("memoized", parts = self.problem.parts().len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut fresh = Memo::new();
        let memo = memo.unwrap_or(&mut fresh);
        let value = self.memoized_from(self.problem.target(), memo);

        #[cfg(feature = "tracing")]
        tracing::trace!(memo_entries = memo.len(), "memoized tier finished");
        value
    }

    fn tabulated(&self) -> O::Value {
        let extent = self.problem.extent();

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "tabulated",
            parts = self.problem.parts().len(),
            extent
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = Table::new(extent, O::empty(), O::base());
        #[cfg(feature = "tracing")]
        let mut reached = 0usize;

        for index in 0..=extent {
            // every write to `index` came from a lower index, so it is final
            if !table.get(index).is_some_and(O::is_reached) {
                continue;
            }
            #[cfg(feature = "tracing")]
            {
                reached += 1;
            }
            for &part in self.problem.parts() {
                if let Some(next) = self.problem.advance(index, part) {
                    let (from, cell) = table.project(index, next);
                    O::project(cell, part, from);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(cells = table.len(), reached, "tabulated tier finished");
        table.into_cell(extent).unwrap_or_else(O::empty)
    }
}

#[cfg(feature = "parallel")]
impl<D, O> Solver<D, O>
where
    D: Decomposition + Sync,
    O: Outcome<D>,
    O::Value: Send,
{
    /// Run every tier, each with its own memo or table, concurrently on the
    /// rayon pool.
    pub fn run_all_tiers(&self) -> TierResults<O::Value> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("run_all_tiers", parallel = true);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (naive, (memoized, tabulated)) = rayon::join(
            || self.naive(),
            || rayon::join(|| self.memoized(None), || self.tabulated()),
        );
        TierResults {
            naive,
            memoized,
            tabulated,
        }
    }
}

#[cfg(not(feature = "parallel"))]
impl<D, O> Solver<D, O>
where
    D: Decomposition,
    O: Outcome<D>,
{
    /// Run every tier, each with its own memo or table.
    pub fn run_all_tiers(&self) -> TierResults<O::Value> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("run_all_tiers", parallel = false);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        TierResults {
            naive: self.naive(),
            memoized: self.memoized(None),
            tabulated: self.tabulated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{AllCombinations, Count, Decision, Shortest};

    /// Climb `height` stairs taking any of `steps` at a time.
    struct Stairs {
        height: usize,
        steps: Vec<usize>,
    }

    impl Decomposition for Stairs {
        type Residual = usize;
        type Part = usize;

        fn target(&self) -> usize {
            self.height
        }
        fn parts(&self) -> &[usize] {
            &self.steps
        }
        fn is_base(&self, residual: usize) -> bool {
            residual == 0
        }
        fn reduce(&self, residual: usize, part: usize) -> Option<usize> {
            (part > 0 && part <= residual).then(|| residual - part)
        }
        fn extent(&self) -> usize {
            self.height
        }
        fn advance(&self, index: usize, part: usize) -> Option<usize> {
            let next = index + part;
            (part > 0 && next <= self.height).then_some(next)
        }
    }

    fn stairs(height: usize, steps: &[usize]) -> Stairs {
        Stairs {
            height,
            steps: steps.to_vec(),
        }
    }

    #[test]
    fn one_or_two_steps_count_like_fibonacci() {
        let expected = [1u128, 1, 2, 3, 5, 8, 13, 21, 34];
        for (h, &want) in expected.iter().enumerate() {
            let solver: Solver<_, Count> = Solver::new(stairs(h, &[1, 2]));
            let all = solver.run_all_tiers();
            assert!(all.agree(), "tiers disagree at height {h}: {all:?}");
            assert_eq!(all.tabulated, want);
        }
    }

    #[test]
    fn default_strategy_is_tabulated() {
        let solver: Solver<_, Decision> = Solver::new(stairs(7, &[2, 4]));
        assert_eq!(solver.strategy(), Strategy::Tabulated);
        assert!(!solver.run());
        let solver: Solver<_, Decision> =
            Solver::with_strategy(stairs(7, &[2, 3]), Strategy::Naive);
        assert_eq!(solver.strategy(), Strategy::Naive);
        assert!(solver.run());
    }

    #[test]
    fn memo_holds_each_residual_once() {
        let solver: Solver<_, Count> = Solver::new(stairs(20, &[1, 2, 3]));
        let mut memo = Memo::new();
        let count = solver.memoized(Some(&mut memo));
        assert_eq!(count, solver.tabulated());
        // residuals 1..=20 each stored once; base 0 is never stored
        assert_eq!(memo.len(), 20);
        assert!(!memo.contains_key(&0));
    }

    #[test]
    fn all_combinations_match_count() {
        let solver: Solver<_, AllCombinations> = Solver::new(stairs(6, &[1, 2, 3]));
        let counted: Solver<_, Count> = Solver::new(stairs(6, &[1, 2, 3]));
        for strategy in Strategy::ALL {
            let ways = solver.solve(strategy);
            assert_eq!(ways.len() as u128, counted.solve(strategy));
            assert!(ways.iter().all(|w| w.iter().sum::<usize>() == 6));
        }
    }

    #[test]
    fn shortest_lengths_agree() {
        let solver: Solver<_, Shortest> = Solver::new(stairs(11, &[1, 5, 6]));
        let lens = solver.run_all_tiers().map(|c| c.map(|c| c.len()));
        assert!(lens.agree());
        assert_eq!(lens.tabulated, Some(2));
    }

    #[test]
    fn zero_height_is_the_base_case_even_without_steps() {
        let solver: Solver<_, AllCombinations> = Solver::new(stairs(0, &[]));
        let all = solver.run_all_tiers();
        assert!(all.agree());
        assert_eq!(all.naive, vec![Vec::<usize>::new()]);
    }
}
