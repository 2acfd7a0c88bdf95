use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::AttributeMap;

/// Unique identifier for every online player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Generate a new random player ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An online player's in-world avatar record.
///
/// The attribute map is persisted by the host and is the only channel of
/// communication between the granting logic (items, behaviors) and the buff
/// core: effect windows are stored there as plain numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier, unique per connection.
    pub id: PlayerId,
    /// Display name, as the host reports it.
    pub name: String,
    /// Host-persisted named attributes.
    pub attributes: AttributeMap,
}

impl Player {
    /// Create a player with a fresh id and an empty attribute map.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            attributes: AttributeMap::new(),
        }
    }
}
