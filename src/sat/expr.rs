//! Boolean expression trees over numbered variables.

/// A boolean variable, numbered from 1.
pub type Variable = u32;

/// A boolean formula over [`Variable`] atoms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A single variable.
    Var(Variable),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Material implication.
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// A single positive variable.
    #[must_use]
    pub const fn var(v: Variable) -> Self {
        Self::Var(v)
    }

    /// Negates an expression.
    #[must_use]
    pub fn not(e: Self) -> Self {
        Self::Not(Box::new(e))
    }

    /// Conjoins two expressions.
    #[must_use]
    pub fn and(a: Self, b: Self) -> Self {
        Self::And(Box::new(a), Box::new(b))
    }

    /// Disjoins two expressions.
    #[must_use]
    pub fn or(a: Self, b: Self) -> Self {
        Self::Or(Box::new(a), Box::new(b))
    }

    /// Builds `a -> b`.
    #[must_use]
    pub fn implies(a: Self, b: Self) -> Self {
        Self::Implies(Box::new(a), Box::new(b))
    }
}

/// Folds a sequence of expressions into a disjunction.
///
/// Returns `None` for an empty sequence: there is no neutral element without a
/// constant-valued expression variant.
pub fn ors<I: IntoIterator<Item = Expr>>(exprs: I) -> Option<Expr> {
    exprs.into_iter().reduce(Expr::or)
}

/// Folds a sequence of expressions into a conjunction.
pub fn ands<I: IntoIterator<Item = Expr>>(exprs: I) -> Option<Expr> {
    exprs.into_iter().reduce(Expr::and)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ors_builds_left_fold() {
        let e = ors([Expr::var(1), Expr::var(2), Expr::var(3)]).unwrap();
        assert_eq!(
            e,
            Expr::or(Expr::or(Expr::var(1), Expr::var(2)), Expr::var(3))
        );
    }

    #[test]
    fn test_ors_empty_is_none() {
        assert_eq!(ors(std::iter::empty::<Expr>()), None);
    }

    #[test]
    fn test_ands_single_is_identity() {
        assert_eq!(ands([Expr::var(7)]), Some(Expr::var(7)));
    }
}
