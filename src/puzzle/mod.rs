#![warn(clippy::all, clippy::pedantic)]
//! The whodunit generation engine.
//!
//! A game is built in layers: the [`config`] describes the finite universe of
//! people and attribute values, [`atoms`] turns it into boolean variables,
//! [`scenario`] draws the hidden ground truth, [`generator`] proposes clues,
//! [`oracle`] checks them against the [`knowledge`] base, and [`engine`] runs
//! the loop until exactly one suspect remains. The finished game is exported
//! as a [`record::GameRecord`].

pub mod atoms;
pub mod config;
pub mod engine;
pub mod generator;
pub mod knowledge;
pub mod oracle;
pub mod proposition;
pub mod record;
pub mod scenario;

pub use atoms::AtomSpace;
pub use config::{Category, ConfigError, GameConfig};
pub use engine::{generate_game, Engine, EngineError};
pub use knowledge::KnowledgeBase;
pub use proposition::Proposition;
pub use record::GameRecord;
pub use scenario::{PersonFacts, Scenario};
