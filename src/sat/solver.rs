//! The solver interface and satisfying-assignment model.

use crate::sat::cnf::Cnf;
use crate::sat::expr::Variable;

/// A satisfying assignment, indexed by variable.
///
/// Unassigned ("don't care") variables report `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions(Vec<bool>);

impl Solutions {
    /// Builds a model from a partial assignment vector indexed by variable.
    #[must_use]
    pub fn new(assignment: &[Option<bool>]) -> Self {
        Self(assignment.iter().map(|v| *v == Some(true)).collect())
    }

    /// Whether the given variable is true in the model.
    #[must_use]
    pub fn check(&self, var: Variable) -> bool {
        self.0.get(var as usize).copied().unwrap_or(false)
    }
}

/// A complete satisfiability procedure over CNF formulas.
pub trait Solver {
    /// Creates a solver instance for the given formula.
    fn new(cnf: Cnf) -> Self;

    /// Searches for a satisfying assignment.
    ///
    /// Returns `Some` with a model if the formula is satisfiable, `None` if it
    /// is unsatisfiable.
    fn solve(&mut self) -> Option<Solutions>;

    /// Returns the model found by the last successful [`Solver::solve`] call.
    fn solutions(&self) -> Solutions;
}
