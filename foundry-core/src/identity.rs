//! Unit identity: symbol, display title and family

use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};
use crate::UnitFamilyName;

/// Identifies one unit of one physical-quantity family.
///
/// Immutable once constructed. Two identities denote the same unit iff their
/// symbols match (case-sensitive); the title is presentation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitIdentity {
    symbol: String,
    title: String,
    family: UnitFamilyName,
}

impl UnitIdentity {
    pub fn new(symbol: impl Into<String>, title: impl Into<String>, family: UnitFamilyName) -> Self {
        Self {
            symbol: symbol.into(),
            title: title.into(),
            family,
        }
    }

    /// The unit symbol (e.g. "m", "lbf", "KB/sec")
    pub fn name(&self) -> &str {
        &self.symbol
    }

    /// Human-readable title (e.g. "meters")
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn family(&self) -> UnitFamilyName {
        self.family
    }
}

impl PartialEq for UnitIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for UnitIdentity {}

impl Hash for UnitIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for UnitIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
