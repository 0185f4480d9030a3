//! Typed PokeAPI response payloads.
//!
//! Only the fields the lookup pipeline reads are modelled; everything
//! else in the (large) upstream documents is ignored by serde.

use pokefun_core::error::CoreError;
use pokefun_core::record::{Ability, BaseStat, EntityRecord, SpeciesRecord};
use serde::Deserialize;

/// `{ "name": ..., "url": ... }` reference used throughout the API.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /pokemon/{key}`.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// `GET /pokemon-species/{key}`.
#[derive(Debug, Deserialize)]
pub struct SpeciesResponse {
    pub id: u32,
    pub generation: NamedResource,
}

impl PokemonResponse {
    /// Convert into a domain record, rejecting payloads without a name or
    /// stats.
    pub fn into_record(self) -> Result<EntityRecord, CoreError> {
        EntityRecord {
            id: self.id,
            name: self.name,
            types: self.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: self
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    is_hidden: a.is_hidden,
                })
                .collect(),
            height_dm: self.height,
            weight_hg: self.weight,
            stats: self
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            sprite_url: self.sprites.front_default,
        }
        .validate()
    }
}

impl SpeciesResponse {
    /// Convert into a domain record. The generation slug is preferred;
    /// the resource URL is used when upstream leaves the name blank.
    pub fn into_record(self) -> SpeciesRecord {
        let NamedResource { name, url } = self.generation;
        let generation = if name.trim().is_empty() { url } else { name };

        SpeciesRecord {
            id: self.id,
            generation,
        }
    }
}
