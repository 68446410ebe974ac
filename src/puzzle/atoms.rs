//! The atom space: one boolean variable per person/attribute-value pair plus
//! one killer indicator per person.
//!
//! Atom keys follow the `"{person}_{value}"` / `"{person}_is_killer"` scheme.
//! A value shared by two categories maps to the same atom for a given person,
//! mirroring how the facts read in clues ("Joe was with steel" does not say
//! which category steel came from). Variables are numbered from 1 in a fixed
//! order (names, then categories, then values, killer atoms last), so the atom
//! space is fully determined by the configuration.

use crate::puzzle::config::{Category, GameConfig};
use crate::sat::expr::Variable;
use rustc_hash::FxHashMap;

/// Immutable mapping from atom keys to solver variables.
#[derive(Debug, Clone)]
pub struct AtomSpace {
    vars: FxHashMap<String, Variable>,
    num_vars: usize,
}

impl AtomSpace {
    /// Builds the full atom space for a configuration.
    #[must_use]
    pub fn build(config: &GameConfig) -> Self {
        let mut vars = FxHashMap::default();
        let mut next: Variable = 1;

        for name in &config.names {
            for category in Category::ALL {
                for value in category.values(config) {
                    let key = attribute_key(name, value);
                    if !vars.contains_key(&key) {
                        vars.insert(key, next);
                        next += 1;
                    }
                }
            }
        }

        for name in &config.names {
            vars.insert(killer_key(name), next);
            next += 1;
        }

        Self {
            vars,
            num_vars: (next - 1) as usize,
        }
    }

    /// The variable for a person having an attribute value, if configured.
    #[must_use]
    pub fn attribute(&self, person: &str, value: &str) -> Option<Variable> {
        self.vars.get(&attribute_key(person, value)).copied()
    }

    /// The killer-indicator variable for a person, if configured.
    #[must_use]
    pub fn killer(&self, person: &str) -> Option<Variable> {
        self.vars.get(&killer_key(person)).copied()
    }

    /// Size of the variable universe.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }
}

fn attribute_key(person: &str, value: &str) -> String {
    format!("{person}_{value}")
}

fn killer_key(person: &str) -> String {
    format!("{person}_is_killer")
}
