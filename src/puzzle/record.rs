//! The serializable game record, the sole contract boundary to downstream
//! consumers.
//!
//! The record carries the seed, the killer, a flattened configuration
//! snapshot, the ground truth and the ordered accepted proposition
//! descriptions. Formulas are deliberately absent; consumers treat the record
//! as read-only data and never re-derive boolean structure from it.

use crate::puzzle::config::GameConfig;
use crate::puzzle::proposition::Proposition;
use crate::puzzle::scenario::PersonFacts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A finished game, immutable once the engine halts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// The seed that reproduces this exact record.
    pub seed: u64,
    /// The ground-truth killer; always the unique remaining suspect.
    pub killer: String,
    /// The configuration snapshot, flattened into the record.
    #[serde(flatten)]
    pub config: GameConfig,
    /// Every person's hidden attribute values.
    pub ground_truth: BTreeMap<String, PersonFacts>,
    /// Accepted proposition descriptions, in acceptance order.
    pub propositions: Vec<Proposition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::config::Category;

    fn sample_record() -> GameRecord {
        let config = GameConfig::default();
        let mut ground_truth = BTreeMap::new();
        for name in &config.names {
            ground_truth.insert(
                name.clone(),
                PersonFacts {
                    technology: "Python".to_string(),
                    place: "China".to_string(),
                    company: "Google".to_string(),
                    institution: "government".to_string(),
                    food: "pizza".to_string(),
                    material: "wood".to_string(),
                },
            );
        }
        GameRecord {
            seed: 42,
            killer: "Bob".to_string(),
            config,
            ground_truth,
            propositions: vec![Proposition::Statement {
                person: "Joe".to_string(),
                category: Category::Food,
                value: "pizza".to_string(),
            }],
        }
    }

    #[test]
    fn test_config_is_flattened() {
        let json = serde_json::to_value(sample_record()).unwrap();
        // Configuration lists appear at the top level, not nested.
        assert!(json.get("names").is_some());
        assert!(json.get("materials").is_some());
        assert!(json.get("config").is_none());
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<GameRecord>(&json).unwrap(), record);
    }
}
