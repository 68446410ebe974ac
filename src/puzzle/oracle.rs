//! The feasibility oracle and the suspect counter.
//!
//! Both operations are pure satisfiability queries against the knowledge base;
//! neither mutates state. The suspect set is recomputed from scratch on every
//! call -- that full recomputation is the ground-truth behavior the rest of
//! the engine relies on.

use crate::puzzle::atoms::AtomSpace;
use crate::puzzle::knowledge::KnowledgeBase;
use crate::sat::cnf::{lit, lower, Clause};
use crate::sat::dpll::is_satisfiable;
use crate::sat::expr::{Expr, Variable};

/// Whether adding `candidate` to the knowledge base keeps the true killer's
/// guilt satisfiable.
///
/// Checks KB AND candidate AND killer-atom for satisfiability. A `true` result
/// guarantees the candidate never excludes the pre-chosen answer; the caller
/// appends it to the real knowledge base only then.
#[must_use]
pub fn is_feasible(kb: &KnowledgeBase, candidate: &Expr, killer_var: Variable) -> bool {
    let mut extra = lower(candidate);
    extra.push(Clause::unit(lit(killer_var, true)));
    is_satisfiable(kb.assume(&extra))
}

/// The names for which "is the killer" is still satisfiable against the
/// knowledge base, in name-list order.
///
/// An empty knowledge base short-circuits to the full name list: an empty
/// conjunction is trivially satisfiable for every candidate.
#[must_use]
pub fn possible_suspects(kb: &KnowledgeBase, atoms: &AtomSpace, names: &[String]) -> Vec<String> {
    if kb.is_empty() {
        return names.to_vec();
    }

    names
        .iter()
        .filter(|name| {
            atoms.killer(name).is_some_and(|var| {
                is_satisfiable(kb.assume(&[Clause::unit(lit(var, true))]))
            })
        })
        .cloned()
        .collect()
}
