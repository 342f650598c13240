use crate::core::constants::CONTAINER_ID_PREFIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a mounted map container.
///
/// This is the key every registry in the crate is indexed by. On the wire it
/// is the container's element id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapHandle(String);

impl MapHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh `map-container-<uuid>` handle
    pub fn generate() -> Self {
        Self(format!("{}{}", CONTAINER_ID_PREFIX, uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MapHandle {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MapHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}
