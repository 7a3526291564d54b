//! Answer shapes for bank solvers.
//!
//! - [`Decision`]: can the target be built at all.
//! - [`Count`]: how many ordered combinations build it.
//! - [`AnyCombination`]: one combination, whichever is found first.
//! - [`Shortest`]: a combination with the fewest parts.
//! - [`AllCombinations`]: every combination.
//!
//! For the single-combination shapes, `None` means no combination exists and
//! `Some(vec![])` means the target was already satisfied.

use std::ops::ControlFlow;

use crate::traits::{Decomposition, Outcome};

/// Boolean reachability. Short-circuits on the first success.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decision;

/// Number of ordered combinations, distinguishing which bank entry was used
/// at each step. Counts saturate at `u128::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

/// First combination found under bank order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCombination;

/// Minimum-length combination. A candidate replaces the current best only when
/// strictly shorter, so ties go to whichever the tier found first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shortest;

/// Every combination, earlier bank entries first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCombinations;

fn extended<D: Decomposition>(problem: &D, part: D::Part, way: &[D::Part]) -> Vec<D::Part> {
    let mut way = way.to_vec();
    problem.attach(part, &mut way);
    way
}

fn appended<P: Copy>(part: P, way: &[P]) -> Vec<P> {
    let mut next = Vec::with_capacity(way.len() + 1);
    next.extend_from_slice(way);
    next.push(part);
    next
}

impl<D: Decomposition> Outcome<D> for Decision {
    type Value = bool;

    fn base() -> bool {
        true
    }

    fn empty() -> bool {
        false
    }

    fn fold(_problem: &D, acc: &mut bool, _part: D::Part, sub: &bool) -> ControlFlow<()> {
        if *sub {
            *acc = true;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn project(cell: &mut bool, _part: D::Part, from: &bool) {
        // reachability never downgrades
        *cell |= *from;
    }

    fn is_reached(value: &bool) -> bool {
        *value
    }
}

impl<D: Decomposition> Outcome<D> for Count {
    type Value = u128;

    fn base() -> u128 {
        1
    }

    fn empty() -> u128 {
        0
    }

    fn fold(_problem: &D, acc: &mut u128, _part: D::Part, sub: &u128) -> ControlFlow<()> {
        *acc = acc.saturating_add(*sub);
        ControlFlow::Continue(())
    }

    fn project(cell: &mut u128, _part: D::Part, from: &u128) {
        *cell = cell.saturating_add(*from);
    }

    fn is_reached(value: &u128) -> bool {
        *value > 0
    }
}

impl<D: Decomposition> Outcome<D> for AnyCombination {
    type Value = Option<Vec<D::Part>>;

    fn base() -> Self::Value {
        Some(Vec::new())
    }

    fn empty() -> Self::Value {
        None
    }

    fn fold(
        problem: &D,
        acc: &mut Self::Value,
        part: D::Part,
        sub: &Self::Value,
    ) -> ControlFlow<()> {
        match sub {
            Some(way) => {
                *acc = Some(extended(problem, part, way));
                ControlFlow::Break(())
            }
            None => ControlFlow::Continue(()),
        }
    }

    fn project(cell: &mut Self::Value, part: D::Part, from: &Self::Value) {
        // last writer wins
        if let Some(way) = from {
            *cell = Some(appended(part, way));
        }
    }

    fn is_reached(value: &Self::Value) -> bool {
        value.is_some()
    }
}

impl<D: Decomposition> Outcome<D> for Shortest {
    type Value = Option<Vec<D::Part>>;

    fn base() -> Self::Value {
        Some(Vec::new())
    }

    fn empty() -> Self::Value {
        None
    }

    fn fold(
        problem: &D,
        acc: &mut Self::Value,
        part: D::Part,
        sub: &Self::Value,
    ) -> ControlFlow<()> {
        if let Some(way) = sub {
            if shorter_than(acc, way.len() + 1) {
                *acc = Some(extended(problem, part, way));
            }
        }
        ControlFlow::Continue(())
    }

    fn project(cell: &mut Self::Value, part: D::Part, from: &Self::Value) {
        if let Some(way) = from {
            if shorter_than(cell, way.len() + 1) {
                *cell = Some(appended(part, way));
            }
        }
    }

    fn is_reached(value: &Self::Value) -> bool {
        value.is_some()
    }
}

fn shorter_than<P>(best: &Option<Vec<P>>, len: usize) -> bool {
    best.as_ref().map_or(true, |best| len < best.len())
}

impl<D: Decomposition> Outcome<D> for AllCombinations {
    type Value = Vec<Vec<D::Part>>;

    fn base() -> Self::Value {
        vec![Vec::new()]
    }

    fn empty() -> Self::Value {
        Vec::new()
    }

    fn fold(
        problem: &D,
        acc: &mut Self::Value,
        part: D::Part,
        sub: &Self::Value,
    ) -> ControlFlow<()> {
        acc.extend(sub.iter().map(|way| extended(problem, part, way)));
        ControlFlow::Continue(())
    }

    fn project(cell: &mut Self::Value, part: D::Part, from: &Self::Value) {
        cell.extend(from.iter().map(|way| appended(part, way)));
    }

    fn is_reached(value: &Self::Value) -> bool {
        !value.is_empty()
    }
}
