//! Proposition descriptions: the five clue shapes, their boolean formulas and
//! their human-readable rendering.
//!
//! A proposition is a pair of boolean formula and structured description. Only
//! the description is ever serialized; downstream consumers must not re-derive
//! formulas from it. The wire format is an internally tagged object with a
//! `prop_type` tag and shape-specific fields, matching the established record
//! layout (`person_and_attribute`, `person_or_person`,
//! `person_attribute_implies_not_killer`, `complex_or`, `direct_elimination`).

use crate::puzzle::atoms::AtomSpace;
use crate::puzzle::config::Category;
use crate::sat::expr::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured clue description, one variant per template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "prop_type")]
pub enum Proposition {
    /// A person's attribute atom is asserted true: "Joe was with wood".
    #[serde(rename = "person_and_attribute")]
    Statement {
        /// The person the statement is about.
        person: String,
        /// Category the value belongs to.
        #[serde(rename = "attr_category")]
        category: Category,
        /// The asserted value.
        value: String,
    },

    /// A disjunction of two attribute atoms from two distinct people.
    #[serde(rename = "person_or_person")]
    EitherOr {
        /// First person.
        person1: String,
        /// Second person, distinct from the first.
        person2: String,
        /// Category of the first person's value.
        #[serde(rename = "attr1_cat")]
        category1: Category,
        /// Category of the second person's value.
        #[serde(rename = "attr2_cat")]
        category2: Category,
        /// First person's value.
        #[serde(rename = "val1")]
        value1: String,
        /// Second person's value.
        #[serde(rename = "val2")]
        value2: String,
    },

    /// "If the person has this attribute, they are not the killer". Only ever
    /// generated for a person who is not the true killer.
    #[serde(rename = "person_attribute_implies_not_killer")]
    Alibi {
        /// The person receiving the alibi.
        person: String,
        /// Category the value belongs to.
        #[serde(rename = "attr_category")]
        category: Category,
        /// The alibi value.
        value: String,
    },

    /// A disjunction between one person's material atom and the conjunction of
    /// a second person's food and institution atoms.
    #[serde(rename = "complex_or")]
    CompoundOr {
        /// First person.
        person1: String,
        /// Second person, distinct from the first.
        person2: String,
        /// First person's material.
        #[serde(rename = "mat1")]
        material1: String,
        /// Second person's food.
        #[serde(rename = "food2")]
        food2: String,
        /// Second person's institution.
        #[serde(rename = "inst2")]
        institution2: String,
    },

    /// The conjunction of an attribute atom and the alibi implication for the
    /// same atom, used to explicitly clear an innocent suspect still in
    /// contention.
    #[serde(rename = "direct_elimination")]
    DirectElimination {
        /// The innocent suspect being cleared.
        person: String,
        /// Category the value belongs to.
        #[serde(rename = "attr_category")]
        category: Category,
        /// The alibi value.
        value: String,
    },
}

impl Proposition {
    /// Lowers the description to its boolean formula over the atom space.
    ///
    /// Returns `None` when a referenced atom does not exist; the caller treats
    /// that as a malformed candidate and retries.
    #[must_use]
    pub fn formula(&self, atoms: &AtomSpace) -> Option<Expr> {
        match self {
            Self::Statement { person, value, .. } => {
                Some(Expr::var(atoms.attribute(person, value)?))
            }
            Self::EitherOr {
                person1,
                person2,
                value1,
                value2,
                ..
            } => Some(Expr::or(
                Expr::var(atoms.attribute(person1, value1)?),
                Expr::var(atoms.attribute(person2, value2)?),
            )),
            Self::Alibi { person, value, .. } => {
                let attr = Expr::var(atoms.attribute(person, value)?);
                let killer = Expr::var(atoms.killer(person)?);
                Some(Expr::implies(attr, Expr::not(killer)))
            }
            Self::CompoundOr {
                person1,
                person2,
                material1,
                food2,
                institution2,
            } => Some(Expr::or(
                Expr::var(atoms.attribute(person1, material1)?),
                Expr::and(
                    Expr::var(atoms.attribute(person2, food2)?),
                    Expr::var(atoms.attribute(person2, institution2)?),
                ),
            )),
            Self::DirectElimination { person, value, .. } => {
                let attr = Expr::var(atoms.attribute(person, value)?);
                let killer = Expr::var(atoms.killer(person)?);
                Some(Expr::and(
                    attr.clone(),
                    Expr::implies(attr, Expr::not(killer)),
                ))
            }
        }
    }
}

/// One fixed display template per shape; purely presentational.
impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement { person, value, .. } => {
                write!(f, "{person} was with {value}")
            }
            Self::EitherOr {
                person1,
                person2,
                value1,
                value2,
                ..
            } => write!(
                f,
                "({person1} with {value1}) OR ({person2} with {value2})"
            ),
            Self::Alibi { person, value, .. } => write!(
                f,
                "If {person} was with {value}, then {person} is not the killer"
            ),
            Self::CompoundOr {
                person1,
                person2,
                material1,
                food2,
                institution2,
            } => write!(
                f,
                "({person1} with {material1}) OR ({person2} with {food2} and {institution2})"
            ),
            Self::DirectElimination { person, value, .. } => {
                write!(f, "{person} was with {value} (alibi: not the killer)")
            }
        }
    }
}
