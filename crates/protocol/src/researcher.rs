//! The researcher directory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// A researcher who can be assigned to projects.
///
/// Researchers are read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Researcher {
    /// Unique identifier.
    pub id: ItemId,
    /// Full name, as listed on projects.
    pub name: String,
}

impl Researcher {
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Researcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
