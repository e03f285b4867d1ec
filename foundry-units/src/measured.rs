//! Measured values - a number stored in one internal unit
//!
//! A `MeasuredValue<F>` owns only its `(value, internal unit)` pair. It does
//! not hold a category: conversions resolve the family's category from the
//! `UnitSystem` passed in, so the same value can be read through any system.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};
use serde::{Serialize, Deserialize};
use foundry_core::{UnitError, UnitFamilyName};
use tracing::{error, warn};
use crate::{UnitCategory, UnitSystem};

/// Compile-time tag binding a quantity type to one unit family
pub trait Family: Copy + Default + fmt::Debug + PartialEq + 'static {
    const NAME: UnitFamilyName;
}

/// A value of family `F`, stored in its internal unit.
///
/// Serializes as `{"V": value, "I": internal}`; deserializing restores the
/// pair as-is without converting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MeasuredValue<F: Family> {
    #[serde(rename = "V")]
    value: f64,
    #[serde(rename = "I")]
    internal: String,
    #[serde(skip)]
    family: PhantomData<F>,
}

impl<F: Family> MeasuredValue<F> {
    /// Convert `value` from `units` into the category's base unit and store it.
    ///
    /// Fail-soft: a missing conversion is logged and the value stored
    /// unchanged; without a category the value is kept in `units`.
    pub fn new(system: &UnitSystem, value: f64, units: &str) -> Self {
        match Self::category(system) {
            Some(cat) => Self::from_raw(cat.convert_to_base_units(units, value), cat.base_units().name()),
            None => {
                error!(family = %F::NAME, "{}", UnitError::MissingCategory(F::NAME));
                Self::from_raw(value, units)
            }
        }
    }

    /// Like `new`, but fails instead of falling back
    pub fn try_new(system: &UnitSystem, value: f64, units: &str) -> Result<Self, UnitError> {
        let cat = Self::category(system).ok_or(UnitError::MissingCategory(F::NAME))?;
        let base = cat.base_units().name();
        let stored = cat.try_convert(units, base, value)?;
        Ok(Self::from_raw(stored, base))
    }

    /// A value already expressed in the category's base unit
    pub fn in_base(system: &UnitSystem, value: f64) -> Result<Self, UnitError> {
        let cat = Self::category(system).ok_or(UnitError::MissingCategory(F::NAME))?;
        Ok(Self::from_raw(value, cat.base_units().name()))
    }

    /// Wrap a stored pair without any conversion
    pub fn from_raw(value: f64, internal: impl Into<String>) -> Self {
        MeasuredValue {
            value,
            internal: internal.into(),
            family: PhantomData,
        }
    }

    /// The family's category in `system`
    pub fn category(system: &UnitSystem) -> Option<&UnitCategory> {
        system.category(F::NAME)
    }

    /// Raw stored number
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Symbol of the unit the value is stored in
    pub fn internal(&self) -> &str {
        &self.internal
    }

    pub fn family(&self) -> UnitFamilyName {
        F::NAME
    }

    /// The stored value expressed in `units` (fail-soft).
    ///
    /// A value stored in a unit other than the base (a derived result, or a
    /// value built under another system) is converted through the base.
    pub fn as_units(&self, system: &UnitSystem, units: &str) -> f64 {
        match Self::category(system) {
            Some(cat) => cat.convert_through_base(&self.internal, units, self.value),
            None => {
                error!(family = %F::NAME, "{}", UnitError::MissingCategory(F::NAME));
                self.value
            }
        }
    }

    pub fn try_as_units(&self, system: &UnitSystem, units: &str) -> Result<f64, UnitError> {
        let cat = Self::category(system).ok_or(UnitError::MissingCategory(F::NAME))?;
        cat.try_convert_through_base(&self.internal, units, self.value)
    }

    /// Store `value`; converts only when `units` differs from the internal unit
    pub fn assign(&mut self, system: &UnitSystem, value: f64, units: &str) -> &mut Self {
        if units == self.internal {
            self.value = value;
        } else {
            *self = Self::new(system, value, units);
        }
        self
    }

    /// Copy `source`; converts only when its internal unit differs
    pub fn assign_from(&mut self, system: &UnitSystem, source: &Self) -> &mut Self {
        if source.internal == self.internal {
            self.value = source.value;
        } else {
            *self = Self::new(system, source.value, &source.internal);
        }
        self
    }

    pub fn same_units(&self, other: &Self) -> bool {
        self.internal == other.internal
    }

    /// Combine raw values, keeping the left operand's internal unit
    fn combine(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        if !self.same_units(other) {
            warn!(
                family = %F::NAME,
                "combining values stored in [{}] and [{}] without conversion",
                self.internal, other.internal
            );
        }
        Self::from_raw(op(self.value, other.value), self.internal.clone())
    }
}

impl<F: Family> fmt::Display for MeasuredValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.internal)
    }
}

/// Values are ordered only when stored in the same unit
impl<F: Family> PartialOrd for MeasuredValue<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_units(other) {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

// ========== Same-Family Arithmetic ==========

impl<F: Family> Add for MeasuredValue<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs, |a, b| a + b)
    }
}

impl<'a, F: Family> Add<&'a MeasuredValue<F>> for &'a MeasuredValue<F> {
    type Output = MeasuredValue<F>;

    fn add(self, rhs: &'a MeasuredValue<F>) -> MeasuredValue<F> {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<F: Family> Sub for MeasuredValue<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(&rhs, |a, b| a - b)
    }
}

impl<'a, F: Family> Sub<&'a MeasuredValue<F>> for &'a MeasuredValue<F> {
    type Output = MeasuredValue<F>;

    fn sub(self, rhs: &'a MeasuredValue<F>) -> MeasuredValue<F> {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<F: Family> Mul<f64> for MeasuredValue<F> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_raw(self.value * rhs, self.internal)
    }
}

impl<F: Family> Mul<MeasuredValue<F>> for f64 {
    type Output = MeasuredValue<F>;

    fn mul(self, rhs: MeasuredValue<F>) -> MeasuredValue<F> {
        MeasuredValue::from_raw(self * rhs.value, rhs.internal)
    }
}

impl<F: Family> Div<f64> for MeasuredValue<F> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_raw(self.value / rhs, self.internal)
    }
}
