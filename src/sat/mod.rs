#![warn(clippy::all, clippy::pedantic)]
//! Propositional backend: expression trees, CNF lowering and a DPLL solver.

pub mod cnf;
pub mod dpll;
pub mod expr;
pub mod solver;
