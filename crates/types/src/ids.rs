//! Newtype identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a parsed symbolizer.
///
/// Assigned in document order while parsing, unique within the process. The style cache keys its
/// entries on this value, so a symbolizer resolves to the same cached
/// drawable style for as long as the document is kept around.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolizerId(u32);

impl SymbolizerId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SymbolizerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SymbolizerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symbolizer#{}", self.0)
    }
}
