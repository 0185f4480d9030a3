//! Info pane text.
//!
//! Turns the entity and species records of one lookup into the fixed
//! multi-line block shown next to the sprite. Output depends only on the
//! two records.

use crate::naming::{generation_label, title_case};
use crate::record::{EntityRecord, SpeciesRecord};

/// Shown whenever no entity could be resolved.
pub const NOT_FOUND_MESSAGE: &str = "Poke not found! Check the name or ID and try again.";

/// Separator between list items on one line (types, abilities).
pub const LIST_SEPARATOR: &str = ", ";

/// Header line of the stats section.
pub const STATS_HEADER: &str = "Base Stats:";

/// Format the info block for one lookup.
///
/// Line order:
///
/// ```text
/// Name: Umbreon
/// Types: Dark
/// Abilities: Synchronize
/// Hidden Abilities: Inner-Focus        (only when one exists)
/// Generation: Generation Ii            (only when species data is present)
/// Height: 1.0 meters, Weight: 27.0 kg
///
/// Base Stats:
/// Hp: 95
/// ...
/// ```
///
/// A missing entity yields [`NOT_FOUND_MESSAGE`]. A missing species drops
/// the generation line and keeps everything else.
pub fn format_info(entity: Option<&EntityRecord>, species: Option<&SpeciesRecord>) -> String {
    let Some(entity) = entity else {
        return NOT_FOUND_MESSAGE.to_string();
    };

    let mut lines = Vec::with_capacity(8 + entity.stats.len());

    lines.push(format!("Name: {}", title_case(&entity.name)));
    lines.push(format!(
        "Types: {}",
        join_titled(entity.types.iter().map(String::as_str))
    ));
    lines.push(format!(
        "Abilities: {}",
        join_titled(entity.visible_abilities().map(|a| a.name.as_str()))
    ));

    let hidden = join_titled(entity.hidden_abilities().map(|a| a.name.as_str()));
    if !hidden.is_empty() {
        lines.push(format!("Hidden Abilities: {hidden}"));
    }

    if let Some(label) = species.and_then(|s| generation_label(&s.generation)) {
        lines.push(format!("Generation: {label}"));
    }

    lines.push(format!(
        "Height: {} meters, Weight: {} kg",
        tenths(entity.height_dm),
        tenths(entity.weight_hg),
    ));

    lines.push(String::new());
    lines.push(STATS_HEADER.to_string());
    for stat in &entity.stats {
        lines.push(format!("{}: {}", title_case(&stat.name), stat.value));
    }

    lines.join("\n")
}

/// Title-case each item and join with [`LIST_SEPARATOR`].
fn join_titled<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(title_case)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Render an integer count of tenths as a decimal with one fractional
/// digit: decimeters to meters, hectograms to kilograms.
fn tenths(value: u32) -> String {
    format!("{}.{}", value / 10, value % 10)
}
