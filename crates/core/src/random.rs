//! Random entity selection.

use rand::Rng;

/// Lowest valid national dex number.
pub const MIN_ENTITY_ID: u32 = 1;

/// Highest valid national dex number.
pub const MAX_ENTITY_ID: u32 = 1025;

/// Draw an id uniformly from `MIN_ENTITY_ID..=MAX_ENTITY_ID` using the
/// thread-local generator.
pub fn random_entity_id() -> u32 {
    random_entity_id_with(&mut rand::rng())
}

/// Draw an id uniformly from `MIN_ENTITY_ID..=MAX_ENTITY_ID` using the
/// supplied generator.
pub fn random_entity_id_with<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(MIN_ENTITY_ID..=MAX_ENTITY_ID)
}
