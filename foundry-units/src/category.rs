//! Unit categories: one family's base unit, units and conversion table
//!
//! Lookups are single-hop. A path from A to B exists only if a rule for
//! exactly "A|B" was registered; nothing is derived transitively.

use std::collections::HashMap;
use foundry_core::{UnitError, UnitFamilyName, UnitIdentity};
use tracing::{debug, error};
use crate::conversion::{rule_key, ConversionRule};

/// Result of a fail-soft conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOutcome {
    /// Converted value, or the input value when no rule was found
    pub value: f64,
    /// Set when the input was returned unchanged because no rule exists
    pub fallback: Option<UnitError>,
}

impl ConvertOutcome {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Owns one family's base unit, its registered units and its conversion rules
#[derive(Debug, Clone)]
pub struct UnitCategory {
    title: String,
    base: UnitIdentity,
    family: UnitFamilyName,
    units: Vec<UnitIdentity>,
    conversions: HashMap<String, ConversionRule>,
}

impl UnitCategory {
    /// Create a category whose base unit is `base`.
    ///
    /// The base unit is registered as a unit of the category and the
    /// identity rule "base|base" is installed.
    pub fn new(title: impl Into<String>, base: UnitIdentity) -> Self {
        let family = base.family();
        let identity = ConversionRule::identity(base.name());
        let mut conversions = HashMap::new();
        conversions.insert(identity.name(), identity);

        UnitCategory {
            title: title.into(),
            units: vec![base.clone()],
            base,
            family,
            conversions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn family(&self) -> UnitFamilyName {
        self.family
    }

    pub fn base_units(&self) -> &UnitIdentity {
        &self.base
    }

    // ========== Registration ==========

    /// Register a unit symbol; symbols are unique within a category
    pub fn register_unit(&mut self, symbol: &str, title: &str) -> Result<(), UnitError> {
        if self.has_unit(symbol) {
            return Err(UnitError::DuplicateUnit {
                category: self.title.clone(),
                symbol: symbol.to_string(),
            });
        }
        self.units.push(UnitIdentity::new(symbol, title, self.family));
        Ok(())
    }

    /// Register `v1 u1 = v2 u2` in both directions, replacing existing rules
    pub fn register_ratio(&mut self, v1: f64, u1: &str, v2: f64, u2: &str) {
        self.insert(ConversionRule::ratio(v1, u1, v2, u2));
        self.insert(ConversionRule::ratio(v2, u2, v1, u1));
    }

    /// Register a one-directional formula `u1 -> u2`.
    ///
    /// The reverse direction must be registered separately; `validate`
    /// reports a formula left without one.
    pub fn register_formula<F>(&mut self, u1: &str, u2: &str, convert: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.insert(ConversionRule::formula(u1, u2, convert));
    }

    fn insert(&mut self, rule: ConversionRule) {
        let key = rule.name();
        debug!(category = %self.title, key = %key, "registered conversion");
        self.conversions.insert(key, rule);
    }

    /// Builder: register a unit
    pub fn unit(mut self, symbol: &str, title: &str) -> Result<Self, UnitError> {
        self.register_unit(symbol, title)?;
        Ok(self)
    }

    /// Builder: register a ratio in both directions
    pub fn ratio(mut self, v1: f64, u1: &str, v2: f64, u2: &str) -> Self {
        self.register_ratio(v1, u1, v2, u2);
        self
    }

    /// Builder: register a one-directional formula
    pub fn formula<F>(mut self, u1: &str, u2: &str, convert: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.register_formula(u1, u2, convert);
        self
    }

    // ========== Conversion ==========

    /// Convert `value` from `u1` to `u2`, failing when no rule exists
    pub fn try_convert(&self, u1: &str, u2: &str, value: f64) -> Result<f64, UnitError> {
        if let Some(rule) = self.conversions.get(&rule_key(u1, u2)) {
            return Ok(rule.convert(value));
        }
        if u1 == u2 && self.has_unit(u1) {
            return Ok(value);
        }
        Err(UnitError::missing_conversion(u1, u2))
    }

    /// Convert and report whether the fail-soft fallback was taken
    pub fn convert_reported(&self, u1: &str, u2: &str, value: f64) -> ConvertOutcome {
        match self.try_convert(u1, u2, value) {
            Ok(converted) => ConvertOutcome { value: converted, fallback: None },
            Err(err) => {
                error!(category = %self.title, "UnitCategoryConvert: {}", err);
                ConvertOutcome { value, fallback: Some(err) }
            }
        }
    }

    /// Fail-soft conversion: a missing rule is logged and `value` returned unchanged
    pub fn convert(&self, u1: &str, u2: &str, value: f64) -> f64 {
        self.convert_reported(u1, u2, value).value
    }

    /// Convert with a direct rule when one exists, otherwise in two hops
    /// `u1 -> base -> u2`. The error names the requested pair.
    pub fn try_convert_through_base(&self, u1: &str, u2: &str, value: f64) -> Result<f64, UnitError> {
        let direct = match self.try_convert(u1, u2, value) {
            Ok(converted) => return Ok(converted),
            Err(err) => err,
        };

        let base = self.base.name();
        if u1 == base || u2 == base {
            return Err(direct);
        }
        let in_base = self.try_convert(u1, base, value).map_err(|_| direct.clone())?;
        self.try_convert(base, u2, in_base).map_err(|_| direct)
    }

    /// Fail-soft form of `try_convert_through_base`
    pub fn convert_through_base(&self, u1: &str, u2: &str, value: f64) -> f64 {
        match self.try_convert_through_base(u1, u2, value) {
            Ok(converted) => converted,
            Err(err) => {
                error!(category = %self.title, "UnitCategoryConvert: {}", err);
                value
            }
        }
    }

    /// Convert `value` expressed in the base unit into `unit`
    pub fn convert_from_base_units(&self, unit: &str, value: f64) -> f64 {
        self.convert(self.base.name(), unit, value)
    }

    /// Convert `value` expressed in `unit` into the base unit
    pub fn convert_to_base_units(&self, unit: &str, value: f64) -> f64 {
        self.convert(unit, self.base.name(), value)
    }

    // ========== Introspection ==========

    pub fn has_unit(&self, symbol: &str) -> bool {
        self.units.iter().any(|u| u.name() == symbol)
    }

    pub fn has_conversion(&self, u1: &str, u2: &str) -> bool {
        self.conversions.contains_key(&rule_key(u1, u2))
    }

    pub fn get_unit(&self, symbol: &str) -> Option<&UnitIdentity> {
        self.units.iter().find(|u| u.name() == symbol)
    }

    /// Snapshot of registered units, in registration order
    pub fn units(&self) -> Vec<UnitIdentity> {
        self.units.clone()
    }

    /// Snapshot of registered rules, sorted by key
    pub fn conversions(&self) -> Vec<ConversionRule> {
        let mut rules: Vec<ConversionRule> = self.conversions.values().cloned().collect();
        rules.sort_by_key(|r| r.name());
        rules
    }

    // ========== Validation ==========

    /// Check that every formula has a reverse rule and that every registered
    /// unit converts directly to and from the base unit.
    pub fn validate(&self) -> Result<(), UnitError> {
        let mut formulas: Vec<&ConversionRule> =
            self.conversions.values().filter(|r| r.is_formula()).collect();
        formulas.sort_by_key(|r| r.name());

        for rule in formulas {
            if !self.has_conversion(rule.to_unit(), rule.from_unit()) {
                return Err(UnitError::UnpairedFormula {
                    category: self.title.clone(),
                    from: rule.from_unit().to_string(),
                    to: rule.to_unit().to_string(),
                });
            }
        }

        let base = self.base.name();
        for unit in &self.units {
            let symbol = unit.name();
            if !self.has_conversion(symbol, base) || !self.has_conversion(base, symbol) {
                return Err(UnitError::UnreachableUnit {
                    category: self.title.clone(),
                    symbol: symbol.to_string(),
                    base: base.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Builder: finish a chain with `validate`
    pub fn validated(self) -> Result<Self, UnitError> {
        self.validate()?;
        Ok(self)
    }
}
