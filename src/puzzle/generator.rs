//! Candidate proposition generation.
//!
//! Templates are drawn with fixed weights that favor plain statements -- they
//! push convergence -- while the disjunctive shapes keep the puzzle from
//! revealing full signatures immediately. Every template reads its value(s)
//! from the ground truth, so generated formulas are always true under the
//! scenario; feasibility against the knowledge base is still the oracle's
//! call.

use crate::puzzle::atoms::AtomSpace;
use crate::puzzle::config::{Category, GameConfig};
use crate::puzzle::knowledge::KnowledgeBase;
use crate::puzzle::oracle::possible_suspects;
use crate::puzzle::proposition::Proposition;
use crate::puzzle::scenario::Scenario;
use crate::sat::expr::Expr;

/// The five templates with their selection weights (out of 100).
const TEMPLATE_WEIGHTS: [(Template, u32); 5] = [
    (Template::Statement, 40),
    (Template::EitherOr, 20),
    (Template::Alibi, 20),
    (Template::CompoundOr, 15),
    (Template::DirectElimination, 5),
];

/// Categories a plain statement may draw from.
const STATEMENT_CATEGORIES: [Category; 4] = [
    Category::Material,
    Category::Institution,
    Category::Food,
    Category::Place,
];

/// Categories the two-person and alibi shapes draw from.
const ALIBI_CATEGORIES: [Category; 3] =
    [Category::Material, Category::Institution, Category::Food];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    Statement,
    EitherOr,
    Alibi,
    CompoundOr,
    DirectElimination,
}

/// Produces one candidate proposition consistent with the ground truth, or
/// `None` when this attempt could not be materialized (missing atom, or no
/// innocent suspect left for a direct elimination). The caller counts the
/// attempt and retries.
pub fn generate(
    config: &GameConfig,
    atoms: &AtomSpace,
    scenario: &Scenario,
    kb: &KnowledgeBase,
    rng: &mut fastrand::Rng,
) -> Option<(Expr, Proposition)> {
    let proposition = match pick_template(rng) {
        Template::Statement => statement(config, scenario, rng)?,
        Template::EitherOr => either_or(config, scenario, rng)?,
        Template::Alibi => alibi(config, scenario, rng)?,
        Template::CompoundOr => compound_or(config, scenario, rng)?,
        Template::DirectElimination => {
            direct_elimination(config, atoms, scenario, kb, rng)?
        }
    };

    let formula = proposition.formula(atoms)?;
    Some((formula, proposition))
}

fn pick_template(rng: &mut fastrand::Rng) -> Template {
    let total: u32 = TEMPLATE_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = rng.u32(..total);
    for (template, weight) in TEMPLATE_WEIGHTS {
        if roll < weight {
            return template;
        }
        roll -= weight;
    }
    unreachable!("roll is below the weight total")
}

fn pick<'a, T>(rng: &mut fastrand::Rng, items: &'a [T]) -> &'a T {
    &items[rng.usize(..items.len())]
}

/// Two distinct people, uniform among the names.
fn pick_pair<'a>(config: &'a GameConfig, rng: &mut fastrand::Rng) -> (&'a str, &'a str) {
    let first = pick(rng, &config.names);
    let others: Vec<&String> = config.names.iter().filter(|n| *n != first).collect();
    let second = *pick(rng, &others);
    (first.as_str(), second.as_str())
}

fn statement(
    config: &GameConfig,
    scenario: &Scenario,
    rng: &mut fastrand::Rng,
) -> Option<Proposition> {
    let person = pick(rng, &config.names).clone();
    let category = *pick(rng, &STATEMENT_CATEGORIES);
    let value = scenario.facts(&person)?.get(category).to_string();
    Some(Proposition::Statement {
        person,
        category,
        value,
    })
}

fn either_or(
    config: &GameConfig,
    scenario: &Scenario,
    rng: &mut fastrand::Rng,
) -> Option<Proposition> {
    let (person1, person2) = pick_pair(config, rng);
    let category1 = *pick(rng, &ALIBI_CATEGORIES);
    let category2 = *pick(rng, &ALIBI_CATEGORIES);
    let value1 = scenario.facts(person1)?.get(category1).to_string();
    let value2 = scenario.facts(person2)?.get(category2).to_string();
    Some(Proposition::EitherOr {
        person1: person1.to_string(),
        person2: person2.to_string(),
        category1,
        category2,
        value1,
        value2,
    })
}

fn alibi(
    config: &GameConfig,
    scenario: &Scenario,
    rng: &mut fastrand::Rng,
) -> Option<Proposition> {
    // By construction, alibis only ever go to non-killers.
    let innocents: Vec<&String> = config
        .names
        .iter()
        .filter(|n| **n != scenario.killer)
        .collect();
    if innocents.is_empty() {
        return None;
    }
    let person = (*pick(rng, &innocents)).clone();
    let category = *pick(rng, &ALIBI_CATEGORIES);
    let value = scenario.facts(&person)?.get(category).to_string();
    Some(Proposition::Alibi {
        person,
        category,
        value,
    })
}

fn compound_or(
    config: &GameConfig,
    scenario: &Scenario,
    rng: &mut fastrand::Rng,
) -> Option<Proposition> {
    let (person1, person2) = pick_pair(config, rng);
    let facts1 = scenario.facts(person1)?;
    let facts2 = scenario.facts(person2)?;
    Some(Proposition::CompoundOr {
        person1: person1.to_string(),
        person2: person2.to_string(),
        material1: facts1.material.clone(),
        food2: facts2.food.clone(),
        institution2: facts2.institution.clone(),
    })
}

fn direct_elimination(
    config: &GameConfig,
    atoms: &AtomSpace,
    scenario: &Scenario,
    kb: &KnowledgeBase,
    rng: &mut fastrand::Rng,
) -> Option<Proposition> {
    // Only target innocents who are still in contention; clearing someone the
    // knowledge base already excludes would be a wasted clue.
    let suspects = possible_suspects(kb, atoms, &config.names);
    let innocent_suspects: Vec<&String> = suspects
        .iter()
        .filter(|n| **n != scenario.killer)
        .collect();
    if innocent_suspects.is_empty() {
        return None;
    }

    let person = (*pick(rng, &innocent_suspects)).clone();
    let category = *pick(rng, &ALIBI_CATEGORIES);
    let value = scenario.facts(&person)?.get(category).to_string();
    Some(Proposition::DirectElimination {
        person,
        category,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::scenario::exactly_one_killer;

    fn game_parts() -> (GameConfig, AtomSpace, Scenario, KnowledgeBase) {
        let config = GameConfig::default();
        let atoms = AtomSpace::build(&config);
        let scenario = Scenario::draw(&config, &mut fastrand::Rng::with_seed(11));
        let mut kb = KnowledgeBase::new(atoms.num_vars());
        for formula in exactly_one_killer(&config, &atoms) {
            kb.push(formula);
        }
        (config, atoms, scenario, kb)
    }

    #[test]
    fn test_template_weights_sum_to_hundred() {
        let total: u32 = TEMPLATE_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_generated_candidates_are_true_under_the_scenario() {
        let (config, atoms, scenario, kb) = game_parts();
        let mut rng = fastrand::Rng::with_seed(3);

        for _ in 0..200 {
            let Some((_, prop)) = generate(&config, &atoms, &scenario, &kb, &mut rng) else {
                continue;
            };
            match prop {
                Proposition::Statement {
                    person,
                    category,
                    value,
                }
                | Proposition::Alibi {
                    person,
                    category,
                    value,
                }
                | Proposition::DirectElimination {
                    person,
                    category,
                    value,
                } => {
                    assert_eq!(scenario.facts(&person).unwrap().get(category), value);
                }
                Proposition::EitherOr {
                    person1,
                    person2,
                    category1,
                    category2,
                    value1,
                    value2,
                } => {
                    assert_ne!(person1, person2);
                    assert_eq!(scenario.facts(&person1).unwrap().get(category1), value1);
                    assert_eq!(scenario.facts(&person2).unwrap().get(category2), value2);
                }
                Proposition::CompoundOr {
                    person1,
                    person2,
                    material1,
                    food2,
                    institution2,
                } => {
                    assert_ne!(person1, person2);
                    assert_eq!(scenario.facts(&person1).unwrap().material, material1);
                    assert_eq!(scenario.facts(&person2).unwrap().food, food2);
                    assert_eq!(scenario.facts(&person2).unwrap().institution, institution2);
                }
            }
        }
    }

    #[test]
    fn test_alibi_and_elimination_spare_the_killer() {
        let (config, atoms, scenario, kb) = game_parts();
        let mut rng = fastrand::Rng::with_seed(5);

        for _ in 0..200 {
            let Some((_, prop)) = generate(&config, &atoms, &scenario, &kb, &mut rng) else {
                continue;
            };
            match prop {
                Proposition::Alibi { person, .. }
                | Proposition::DirectElimination { person, .. } => {
                    assert_ne!(person, scenario.killer);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let (config, atoms, scenario, kb) = game_parts();
        let mut rng_a = fastrand::Rng::with_seed(9);
        let mut rng_b = fastrand::Rng::with_seed(9);
        for _ in 0..50 {
            assert_eq!(
                generate(&config, &atoms, &scenario, &kb, &mut rng_a),
                generate(&config, &atoms, &scenario, &kb, &mut rng_b)
            );
        }
    }
}
