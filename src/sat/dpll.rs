//! A DPLL (Davis-Putnam-Logemann-Loveland) satisfiability solver.
//!
//! The solver interleaves unit propagation with chronological backtracking:
//!
//! 1. **Unit propagation**: any clause with no true literal and exactly one
//!    unassigned literal forces that literal; propagation runs to a fixpoint
//!    and detects falsified clauses along the way.
//! 2. **Decision**: if the formula is neither satisfied nor falsified, a
//!    variable from some not-yet-satisfied clause is picked and both
//!    polarities are explored recursively.
//! 3. **Backtracking**: implicit in the recursion; an exhausted branch is
//!    simply abandoned.
//!
//! This is the plain recursive variant without conflict-driven learning. The
//! puzzle engine's formulas are small (the atom universe is bounded by
//! configuration size), so the classical algorithm is more than enough.

use crate::sat::cnf::{Cnf, Literal};
use crate::sat::expr::Variable;
use crate::sat::solver::{Solutions, Solver};

/// A recursive DPLL solver.
#[derive(Debug, Clone)]
pub struct Dpll {
    cnf: Cnf,
    /// Partial assignment, indexed by variable (slot 0 unused).
    assignment: Vec<Option<bool>>,
}

impl Solver for Dpll {
    fn new(cnf: Cnf) -> Self {
        let assignment = vec![None; cnf.num_vars + 1];
        Self { cnf, assignment }
    }

    fn solve(&mut self) -> Option<Solutions> {
        if !self.propagate() {
            return None;
        }

        if self.is_sat() {
            return Some(self.solutions());
        }

        let var = self.pick()?;

        let mut true_branch = self.clone();
        true_branch.assignment[var as usize] = Some(true);
        if let Some(solutions) = true_branch.solve() {
            return Some(solutions);
        }

        let mut false_branch = self.clone();
        false_branch.assignment[var as usize] = Some(false);
        false_branch.solve()
    }

    fn solutions(&self) -> Solutions {
        Solutions::new(&self.assignment)
    }
}

impl Dpll {
    /// Runs unit propagation to a fixpoint.
    ///
    /// Returns `false` if a clause was falsified (conflict), `true` otherwise.
    fn propagate(&mut self) -> bool {
        loop {
            let mut changed = false;

            for i in 0..self.cnf.clauses.len() {
                let mut satisfied = false;
                let mut unassigned = None;
                let mut unassigned_count = 0usize;

                for &lit in &self.cnf.clauses[i].literals {
                    match self.literal_value(lit) {
                        Some(true) => {
                            satisfied = true;
                            break;
                        }
                        Some(false) => {}
                        None => {
                            unassigned_count += 1;
                            unassigned = Some(lit);
                        }
                    }
                }

                if satisfied {
                    continue;
                }

                match (unassigned_count, unassigned) {
                    (0, _) => return false,
                    (1, Some(lit)) => {
                        self.assignment[lit.unsigned_abs() as usize] = Some(lit > 0);
                        changed = true;
                    }
                    _ => {}
                }
            }

            if !changed {
                return true;
            }
        }
    }

    /// Whether every clause has at least one true literal.
    fn is_sat(&self) -> bool {
        self.cnf.iter().all(|clause| {
            clause
                .iter()
                .any(|&lit| self.literal_value(lit) == Some(true))
        })
    }

    /// Picks an unassigned variable from the first not-yet-satisfied clause.
    ///
    /// Restricting decisions to unsatisfied clauses keeps the search from
    /// branching on variables that no longer matter.
    fn pick(&self) -> Option<Variable> {
        for clause in self.cnf.iter() {
            if clause
                .iter()
                .any(|&lit| self.literal_value(lit) == Some(true))
            {
                continue;
            }
            for &lit in clause.iter() {
                if self.literal_value(lit).is_none() {
                    return Some(lit.unsigned_abs());
                }
            }
        }
        None
    }

    fn literal_value(&self, lit: Literal) -> Option<bool> {
        self.assignment[lit.unsigned_abs() as usize].map(|b| if lit > 0 { b } else { !b })
    }
}

/// Whether the formula has at least one satisfying assignment.
#[must_use]
pub fn is_satisfiable(cnf: Cnf) -> bool {
    Dpll::new(cnf).solve().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::cnf::Clause;

    fn cnf(clauses: &[&[Literal]], num_vars: usize) -> Cnf {
        Cnf::new(
            clauses
                .iter()
                .map(|c| Clause::new(c.iter().copied()))
                .collect(),
            num_vars,
        )
    }

    #[test]
    fn test_empty_cnf_is_sat() {
        assert!(is_satisfiable(cnf(&[], 0)));
    }

    #[test]
    fn test_unit_conflict_is_unsat() {
        assert!(!is_satisfiable(cnf(&[&[1], &[-1]], 1)));
    }

    #[test]
    fn test_propagation_chain() {
        // 1 forces 2 which forces 3.
        let mut solver = Dpll::new(cnf(&[&[1], &[-1, 2], &[-2, 3]], 3));
        let solutions = solver.solve().unwrap();
        assert!(solutions.check(1));
        assert!(solutions.check(2));
        assert!(solutions.check(3));
    }

    #[test]
    fn test_branching_required() {
        // Satisfiable, but only after a decision: (1 | 2) & (!1 | 2) forces 2.
        let mut solver = Dpll::new(cnf(&[&[1, 2], &[-1, 2]], 2));
        let solutions = solver.solve().unwrap();
        assert!(solutions.check(2));
    }

    #[test]
    fn test_pigeonhole_two_in_one_is_unsat() {
        // Two pigeons, one hole: x1, x2, !(x1 & x2).
        assert!(!is_satisfiable(cnf(&[&[1], &[2], &[-1, -2]], 2)));
    }

    #[test]
    fn test_exactly_one_block() {
        // At least one of 1..3, pairwise exclusions, and 2 asserted.
        let formula = cnf(
            &[&[1, 2, 3], &[-1, -2], &[-1, -3], &[-2, -3], &[2]],
            3,
        );
        let mut solver = Dpll::new(formula);
        let solutions = solver.solve().unwrap();
        assert!(!solutions.check(1));
        assert!(solutions.check(2));
        assert!(!solutions.check(3));
    }
}
