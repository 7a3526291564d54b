use std::marker::PhantomData;

use crate::engine::{Solver, Strategy};
use crate::traits::{Decomposition, Outcome};

pub struct SolverBuilder<D, O> {
    problem: D,
    strategy: Option<Strategy>,
    _outcome: PhantomData<fn() -> O>,
}

impl<D, O> SolverBuilder<D, O>
where
    D: Decomposition,
    O: Outcome<D>,
{
    pub fn new(problem: D) -> Self {
        Self {
            problem,
            strategy: None,
            _outcome: PhantomData,
        }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> Solver<D, O> {
        match self.strategy {
            Some(s) => Solver::with_strategy(self.problem, s),
            None => Solver::new(self.problem),
        }
    }
}
