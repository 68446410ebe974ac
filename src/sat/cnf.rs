//! Clauses, CNF formulas and lowering from [`Expr`] trees.
//!
//! Lowering proceeds the classical way: implications are eliminated, negations
//! are pushed to the leaves with De Morgan's laws, disjunctions are distributed
//! over conjunctions until a fixpoint, and the resulting tree is flattened into
//! clauses. The formulas generated by the puzzle engine are tiny (a handful of
//! literals each), so no Tseitin-style encoding is needed.

use crate::sat::expr::{Expr, Variable};
use smallvec::SmallVec;

/// A literal: the variable index, negative when negated. Variables are
/// numbered from 1, so 0 is never a valid literal.
pub type Literal = i32;

/// Builds a literal from a variable and a polarity.
///
/// # Panics
///
/// Panics if the variable index does not fit a literal; the atom universe is
/// bounded by configuration size, so this is unreachable in practice.
#[must_use]
pub fn lit(var: Variable, polarity: bool) -> Literal {
    let v = i32::try_from(var).expect("variable index exceeds literal range");
    if polarity {
        v
    } else {
        -v
    }
}

/// A disjunction of literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    /// The literals of the clause.
    pub literals: SmallVec<[Literal; 4]>,
}

impl Clause {
    /// Creates a clause from a literal sequence.
    #[must_use]
    pub fn new<I: IntoIterator<Item = Literal>>(literals: I) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    /// A clause with a single literal.
    #[must_use]
    pub fn unit(literal: Literal) -> Self {
        Self::new([literal])
    }

    /// Number of literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause has no literals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Iterates over the literals.
    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

/// A formula in conjunctive normal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    /// The clauses of the formula.
    pub clauses: Vec<Clause>,
    /// Size of the variable universe; variables run `1..=num_vars`.
    pub num_vars: usize,
}

impl Cnf {
    /// Creates a CNF over a fixed variable universe.
    #[must_use]
    pub const fn new(clauses: Vec<Clause>, num_vars: usize) -> Self {
        Self { clauses, num_vars }
    }

    /// Iterates over the clauses.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Appends a clause.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }
}

/// Lowers an expression into an equivalent set of clauses.
#[must_use]
pub fn lower(expr: &Expr) -> Vec<Clause> {
    let expr = apply_laws(&eliminate_implications(expr));
    clauses_of(&expr)
}

fn eliminate_implications(expr: &Expr) -> Expr {
    match expr {
        Expr::Implies(a, b) => Expr::or(
            Expr::not(eliminate_implications(a)),
            eliminate_implications(b),
        ),
        Expr::Not(e) => Expr::not(eliminate_implications(e)),
        Expr::And(a, b) => Expr::and(eliminate_implications(a), eliminate_implications(b)),
        Expr::Or(a, b) => Expr::or(eliminate_implications(a), eliminate_implications(b)),
        Expr::Var(v) => Expr::Var(*v),
    }
}

fn demorgans_laws(expr: &Expr) -> Expr {
    match expr {
        Expr::Not(inner) => match inner.as_ref() {
            Expr::Var(v) => Expr::not(Expr::Var(*v)),
            Expr::Not(e) => demorgans_laws(e),
            Expr::And(a, b) => Expr::or(
                demorgans_laws(&Expr::not(a.as_ref().clone())),
                demorgans_laws(&Expr::not(b.as_ref().clone())),
            ),
            Expr::Or(a, b) => Expr::and(
                demorgans_laws(&Expr::not(a.as_ref().clone())),
                demorgans_laws(&Expr::not(b.as_ref().clone())),
            ),
            Expr::Implies(..) => unreachable!("implications are eliminated before De Morgan"),
        },
        Expr::And(a, b) => Expr::and(demorgans_laws(a), demorgans_laws(b)),
        Expr::Or(a, b) => Expr::or(demorgans_laws(a), demorgans_laws(b)),
        Expr::Var(v) => Expr::Var(*v),
        Expr::Implies(..) => unreachable!("implications are eliminated before De Morgan"),
    }
}

fn apply_laws(expr: &Expr) -> Expr {
    let mut expr = demorgans_laws(expr);
    loop {
        let next = distribute_or(&expr);
        if next == expr {
            return next;
        }
        expr = next;
    }
}

/// Distributes disjunction over conjunction: `a | (b & c)` becomes
/// `(a | b) & (a | c)`, pulling `And` to the top of the tree.
fn distribute_or(expr: &Expr) -> Expr {
    match expr {
        Expr::Or(a, b) => {
            let a = distribute_or(a);
            let b = distribute_or(b);
            match a {
                Expr::And(a1, a2) => Expr::and(
                    distribute_or(&Expr::or(*a1, b.clone())),
                    distribute_or(&Expr::or(*a2, b)),
                ),
                _ => match b {
                    Expr::And(b1, b2) => Expr::and(
                        distribute_or(&Expr::or(a.clone(), *b1)),
                        distribute_or(&Expr::or(a, *b2)),
                    ),
                    _ => Expr::or(a, b),
                },
            }
        }
        Expr::And(a, b) => Expr::and(distribute_or(a), distribute_or(b)),
        Expr::Not(e) => Expr::not(distribute_or(e)),
        Expr::Var(v) => Expr::Var(*v),
        Expr::Implies(..) => unreachable!("implications are eliminated before distribution"),
    }
}

fn clauses_of(expr: &Expr) -> Vec<Clause> {
    match expr {
        Expr::And(a, b) => {
            let mut clauses = clauses_of(a);
            clauses.extend(clauses_of(b));
            clauses
        }
        e => vec![clause_of(e)],
    }
}

fn clause_of(expr: &Expr) -> Clause {
    match expr {
        Expr::Or(a, b) => {
            let mut clause = clause_of(a);
            clause.literals.extend(clause_of(b).literals);
            clause
        }
        e => Clause::unit(literal_of(e)),
    }
}

fn literal_of(expr: &Expr) -> Literal {
    match expr {
        Expr::Var(v) => lit(*v, true),
        Expr::Not(e) => -literal_of(e),
        _ => unreachable!("expression is in CNF, leaves are literals"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowered(expr: &Expr) -> Vec<Vec<Literal>> {
        let mut clauses: Vec<Vec<Literal>> = lower(expr)
            .into_iter()
            .map(|c| {
                let mut lits: Vec<Literal> = c.literals.into_iter().collect();
                lits.sort_unstable();
                lits
            })
            .collect();
        clauses.sort();
        clauses
    }

    #[test]
    fn test_lower_variable() {
        assert_eq!(lowered(&Expr::var(3)), vec![vec![3]]);
    }

    #[test]
    fn test_lower_disjunction() {
        let e = Expr::or(Expr::var(1), Expr::var(2));
        assert_eq!(lowered(&e), vec![vec![1, 2]]);
    }

    #[test]
    fn test_lower_implication() {
        // a -> !k  becomes  !a | !k
        let e = Expr::implies(Expr::var(1), Expr::not(Expr::var(2)));
        assert_eq!(lowered(&e), vec![vec![-2, -1]]);
    }

    #[test]
    fn test_lower_or_over_and() {
        // a | (b & c)  becomes  (a | b) & (a | c)
        let e = Expr::or(Expr::var(1), Expr::and(Expr::var(2), Expr::var(3)));
        assert_eq!(lowered(&e), vec![vec![1, 2], vec![1, 3]]);
    }

    #[test]
    fn test_lower_direct_elimination_shape() {
        // a & (a -> !k)  becomes  a & (!a | !k)
        let e = Expr::and(
            Expr::var(1),
            Expr::implies(Expr::var(1), Expr::not(Expr::var(2))),
        );
        assert_eq!(lowered(&e), vec![vec![-2, -1], vec![1]]);
    }

    #[test]
    fn test_lower_negated_conjunction() {
        // !(a & b)  becomes  !a | !b
        let e = Expr::not(Expr::and(Expr::var(1), Expr::var(2)));
        assert_eq!(lowered(&e), vec![vec![-2, -1]]);
    }

    #[test]
    fn test_lit_polarity() {
        assert_eq!(lit(5, true), 5);
        assert_eq!(lit(5, false), -5);
    }
}
