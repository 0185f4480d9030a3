//! Lookup key parsing.
//!
//! Users type either a creature name or its national dex number. The data
//! API addresses both through the same path segment, so a key is just the
//! normalised segment plus a flag for which form it took.

use std::fmt;

/// A normalised lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    /// Lower-case slug, e.g. `umbreon` or `mr-mime`.
    Name(String),
    /// Numeric identifier, e.g. `197`.
    Id(u32),
}

impl EntityKey {
    /// Parse raw user input into a key.
    ///
    /// Returns `None` for empty or whitespace-only input. Pure-digit input
    /// becomes [`EntityKey::Id`]; everything else is lower-cased and has
    /// internal whitespace runs collapsed into a single `-`.
    ///
    /// ```
    /// use pokefun_core::key::EntityKey;
    ///
    /// assert_eq!(EntityKey::parse(" Umbreon "), Some(EntityKey::Name("umbreon".into())));
    /// assert_eq!(EntityKey::parse("197"), Some(EntityKey::Id(197)));
    /// assert_eq!(EntityKey::parse("Mr  Mime"), Some(EntityKey::Name("mr-mime".into())));
    /// assert_eq!(EntityKey::parse("   "), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            // Out-of-range numbers fall through and are sent as a name;
            // upstream answers them with a 404 like any unknown key.
            if let Ok(id) = trimmed.parse::<u32>() {
                return Some(Self::Id(id));
            }
        }

        let slug = trimmed
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();

        Some(Self::Name(slug))
    }
}

impl From<u32> for EntityKey {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}
