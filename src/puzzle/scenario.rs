//! Scenario initialization: the hidden ground truth and the base constraints.

use crate::puzzle::atoms::AtomSpace;
use crate::puzzle::config::{Category, GameConfig};
use crate::sat::expr::{ors, Expr};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One person's concrete attribute values, drawn at scenario setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFacts {
    /// Value for [`Category::Technology`].
    pub technology: String,
    /// Value for [`Category::Place`].
    pub place: String,
    /// Value for [`Category::Company`].
    pub company: String,
    /// Value for [`Category::Institution`].
    pub institution: String,
    /// Value for [`Category::Food`].
    pub food: String,
    /// Value for [`Category::Material`].
    pub material: String,
}

impl PersonFacts {
    /// The person's value for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Technology => &self.technology,
            Category::Place => &self.place,
            Category::Company => &self.company,
            Category::Institution => &self.institution,
            Category::Food => &self.food,
            Category::Material => &self.material,
        }
    }
}

/// The hidden ground truth of one game: every person's facts and the killer.
///
/// Immutable after [`Scenario::draw`]. The map is ordered so that serialized
/// records are byte-stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Per-person attribute values.
    pub ground_truth: BTreeMap<String, PersonFacts>,
    /// The person to be identified by deduction.
    pub killer: String,
}

impl Scenario {
    /// Draws a scenario uniformly at random.
    ///
    /// Each person independently gets one uniform value per category; values
    /// may repeat across people, which keeps signatures partially ambiguous
    /// on purpose. The killer is drawn uniformly among the names.
    #[must_use]
    pub fn draw(config: &GameConfig, rng: &mut fastrand::Rng) -> Self {
        let mut ground_truth = BTreeMap::new();
        for name in &config.names {
            ground_truth.insert(
                name.clone(),
                PersonFacts {
                    technology: pick(rng, &config.technologies),
                    place: pick(rng, &config.places),
                    company: pick(rng, &config.companies),
                    institution: pick(rng, &config.institutions),
                    food: pick(rng, &config.foods),
                    material: pick(rng, &config.materials),
                },
            );
        }

        let killer = config.names[rng.usize(..config.names.len())].clone();

        Self {
            ground_truth,
            killer,
        }
    }

    /// The facts for a person, if part of the scenario.
    #[must_use]
    pub fn facts(&self, person: &str) -> Option<&PersonFacts> {
        self.ground_truth.get(person)
    }
}

fn pick(rng: &mut fastrand::Rng, values: &[String]) -> String {
    values[rng.usize(..values.len())].clone()
}

/// The exactly-one-killer constraint block: one n-ary "at least one" clause
/// plus a pairwise "not both" clause for every pair of names. These formulas
/// seed the knowledge base first and are never removed.
///
/// # Panics
///
/// Panics if the configuration was not validated (fewer than two names, or a
/// name missing from the atom space).
#[must_use]
pub fn exactly_one_killer(config: &GameConfig, atoms: &AtomSpace) -> Vec<Expr> {
    let killer_atoms: Vec<Expr> = config
        .names
        .iter()
        .map(|name| {
            Expr::var(
                atoms
                    .killer(name)
                    .expect("killer atom exists for every configured name"),
            )
        })
        .collect();

    let at_least_one = ors(killer_atoms.clone()).expect("configuration has at least two names");

    let mut formulas = vec![at_least_one];
    for (a, b) in killer_atoms.into_iter().tuple_combinations() {
        formulas.push(Expr::not(Expr::and(a, b)));
    }
    formulas
}
