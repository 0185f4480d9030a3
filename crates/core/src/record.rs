//! Records produced by a single lookup.
//!
//! Both records are built fresh for every lookup and never mutated
//! afterwards.

use crate::error::CoreError;

/// One ability slot on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

/// One base stat, e.g. `special-attack: 60`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

/// Core attributes of a creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Abilities in slot order, hidden ones included.
    pub abilities: Vec<Ability>,
    /// Height in decimeters.
    pub height_dm: u32,
    /// Weight in hectograms.
    pub weight_hg: u32,
    /// Base stats in upstream order.
    pub stats: Vec<BaseStat>,
    /// Front sprite URL. Not every form has one.
    pub sprite_url: Option<String>,
}

impl EntityRecord {
    /// Reject records that break the display contract (a name and at
    /// least one stat).
    pub fn validate(self) -> Result<Self, CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "entity {} has an empty name",
                self.id
            )));
        }
        if self.stats.is_empty() {
            return Err(CoreError::Validation(format!(
                "entity '{}' has no stats",
                self.name
            )));
        }
        Ok(self)
    }

    /// Abilities shown on the regular `Abilities:` line.
    pub fn visible_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|a| !a.is_hidden)
    }

    /// Abilities flagged hidden upstream.
    pub fn hidden_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|a| a.is_hidden)
    }
}

/// Species-level classification for a creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesRecord {
    pub id: u32,
    /// Generation reference: a slug such as `generation-ii`, or a URL
    /// whose last path segment carries it.
    pub generation: String,
}
