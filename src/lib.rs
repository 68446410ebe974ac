#![warn(missing_docs)]
//! Generator of synthetic whodunit logic puzzles with SAT-verified unique solutions.
//!
//! Each generated game draws a hidden scenario (every suspect gets one value per
//! attribute category, one suspect is the killer), then emits boolean propositions
//! that are true under that scenario. A candidate proposition is accepted only if
//! the true killer remains satisfiable against the accumulated knowledge base, so
//! the game can never converge on the wrong person. Generation stops once the
//! knowledge base pins down exactly one possible killer.

/// The `puzzle` module implements the whodunit generation engine: configuration,
/// atom space, scenario drawing, proposition templates, the feasibility oracle and
/// the convergence loop.
pub mod puzzle;

/// The `sat` module implements the propositional backend: boolean expressions,
/// CNF lowering and a DPLL satisfiability solver.
pub mod sat;
