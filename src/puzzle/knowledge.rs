//! The append-only knowledge base.
//!
//! The knowledge base is the conjunction of every formula accepted so far.
//! Formulas are kept in acceptance order and lowered to clauses eagerly, so
//! oracle queries never re-lower history; a query conjoins the cached clauses
//! with its extra assumptions into a scratch [`Cnf`] without mutating state.

use crate::sat::cnf::{lower, Clause, Cnf};
use crate::sat::expr::Expr;

/// An ordered, append-only sequence of accepted formulas with their CNF
/// lowering cached alongside.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    formulas: Vec<Expr>,
    clauses: Vec<Clause>,
    num_vars: usize,
}

impl KnowledgeBase {
    /// An empty knowledge base over a fixed variable universe.
    #[must_use]
    pub const fn new(num_vars: usize) -> Self {
        Self {
            formulas: Vec::new(),
            clauses: Vec::new(),
            num_vars,
        }
    }

    /// Appends a formula. The only mutation the type supports.
    pub fn push(&mut self, formula: Expr) {
        self.clauses.extend(lower(&formula));
        self.formulas.push(formula);
    }

    /// Number of formulas accepted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Whether no formula has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// The accepted formulas, in acceptance order.
    #[must_use]
    pub fn formulas(&self) -> &[Expr] {
        &self.formulas
    }

    /// The cached clause form of the conjunction.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Size of the variable universe.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// A scratch CNF of the knowledge base conjoined with extra clauses, for
    /// what-if queries. Does not mutate the knowledge base.
    #[must_use]
    pub fn assume(&self, extra: &[Clause]) -> Cnf {
        let clauses = self
            .clauses
            .iter()
            .chain(extra.iter())
            .cloned()
            .collect();
        Cnf::new(clauses, self.num_vars)
    }
}
