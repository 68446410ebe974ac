//! Game configuration: the finite universe of names and attribute values.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The closed set of attribute categories every person has a value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Technology the person was using.
    Technology,
    /// Place the person was at.
    Place,
    /// Company the person was involved with.
    Company,
    /// Institution the person belonged to.
    Institution,
    /// Food the person had.
    Food,
    /// Material the person was with.
    Material,
}

impl Category {
    /// All categories, in declaration order. The order is load-bearing: atom
    /// numbering iterates it, so it must stay stable for determinism.
    pub const ALL: [Self; 6] = [
        Self::Technology,
        Self::Place,
        Self::Company,
        Self::Institution,
        Self::Food,
        Self::Material,
    ];

    /// The category's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Place => "place",
            Self::Company => "company",
            Self::Institution => "institution",
            Self::Food => "food",
            Self::Material => "material",
        }
    }

    /// The configured value list for this category.
    #[must_use]
    pub fn values(self, config: &GameConfig) -> &[String] {
        match self {
            Self::Technology => &config.technologies,
            Self::Place => &config.places,
            Self::Company => &config.companies,
            Self::Institution => &config.institutions,
            Self::Food => &config.foods,
            Self::Material => &config.materials,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable configuration for game generation: the suspect names and one
/// value list per attribute category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Suspect names; at least two are required.
    pub names: Vec<String>,
    /// Values for [`Category::Technology`].
    pub technologies: Vec<String>,
    /// Values for [`Category::Place`].
    pub places: Vec<String>,
    /// Values for [`Category::Company`].
    pub companies: Vec<String>,
    /// Values for [`Category::Institution`].
    pub institutions: Vec<String>,
    /// Values for [`Category::Food`].
    pub foods: Vec<String>,
    /// Values for [`Category::Material`].
    pub materials: Vec<String>,
}

/// A configuration rejected before initialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A single-person game is degenerate; the exactly-one-killer constraint
    /// needs at least two names.
    #[error("a game needs at least two suspects, got {0}")]
    NotEnoughNames(usize),
    /// Every attribute category must offer at least one value.
    #[error("attribute category `{0}` has no values")]
    EmptyCategory(Category),
}

impl GameConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if there are fewer than two names or any
    /// attribute category is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.names.len() < 2 {
            return Err(ConfigError::NotEnoughNames(self.names.len()));
        }
        for category in Category::ALL {
            if category.values(self).is_empty() {
                return Err(ConfigError::EmptyCategory(category));
            }
        }
        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl Default for GameConfig {
    /// The stock single-token configuration: four suspects and six small
    /// attribute categories.
    fn default() -> Self {
        Self {
            names: strings(&["Joe", "John", "Bob", "Will"]),
            technologies: strings(&["Python", "Java", "Ruby"]),
            places: strings(&["China", "India", "France"]),
            companies: strings(&["Google", "Facebook", "Amazon", "Twitter"]),
            institutions: strings(&["government", "company", "system"]),
            foods: strings(&["pizza", "bread", "fish"]),
            materials: strings(&["wood", "metal", "steel"]),
        }
    }
}
