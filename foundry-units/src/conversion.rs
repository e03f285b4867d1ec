//! Directional conversion rules keyed by "from|to"

use std::fmt;
use std::sync::Arc;

/// Shared transform applied by a conversion rule
pub type Transform = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Build the lookup key for a conversion from `from` to `to`
pub fn rule_key(from: &str, to: &str) -> String {
    format!("{}|{}", from, to)
}

/// How a rule was registered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// base|base rule installed when a category is created
    Identity,
    /// Linear scale derived from `v1 u1 = v2 u2`; always registered in pairs
    Ratio { scale: f64 },
    /// Arbitrary function; registered one direction at a time
    Formula,
}

/// A named, directional transform `value(from) -> value(to)`
#[derive(Clone)]
pub struct ConversionRule {
    from: String,
    to: String,
    kind: RuleKind,
    transform: Transform,
}

impl ConversionRule {
    pub fn identity(unit: &str) -> Self {
        ConversionRule {
            from: unit.to_string(),
            to: unit.to_string(),
            kind: RuleKind::Identity,
            transform: Arc::new(|v| v),
        }
    }

    /// Rule for `from -> to` given that `v_from` of `from` equals `v_to` of `to`
    pub fn ratio(v_from: f64, from: &str, v_to: f64, to: &str) -> Self {
        ConversionRule {
            from: from.to_string(),
            to: to.to_string(),
            kind: RuleKind::Ratio { scale: v_to / v_from },
            transform: Arc::new(move |v| (v * v_to) / v_from),
        }
    }

    pub fn formula<F>(from: &str, to: &str, convert: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        ConversionRule {
            from: from.to_string(),
            to: to.to_string(),
            kind: RuleKind::Formula,
            transform: Arc::new(convert),
        }
    }

    /// The lookup key, "from|to"
    pub fn name(&self) -> String {
        rule_key(&self.from, &self.to)
    }

    pub fn from_unit(&self) -> &str {
        &self.from
    }

    pub fn to_unit(&self) -> &str {
        &self.to
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn is_formula(&self) -> bool {
        self.kind == RuleKind::Formula
    }

    pub fn convert(&self, value: f64) -> f64 {
        (self.transform)(value)
    }
}

impl fmt::Debug for ConversionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRule")
            .field("key", &self.name())
            .field("kind", &self.kind)
            .finish()
    }
}
