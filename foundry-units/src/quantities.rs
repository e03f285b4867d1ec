//! Concrete quantity types
//!
//! Each family gets a zero-sized tag implementing `Family` and a type alias
//! over `MeasuredValue`. Cross-family operators live here; they build their
//! result unit from the operands' internal units.

use std::ops::{Add, Div, Mul, Sub};
use foundry_core::{UnitError, UnitFamilyName};
use tracing::warn;
use crate::{independent, Family, MeasuredValue, UnitSystem};

macro_rules! quantity_families {
    ($($tag:ident => $alias:ident;)*) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $tag;

            impl Family for $tag {
                const NAME: UnitFamilyName = UnitFamilyName::$alias;
            }

            pub type $alias = MeasuredValue<$tag>;
        )*
    };
}

quantity_families! {
    LengthFamily => Length;
    MassFamily => Mass;
    ForceFamily => Force;
    TemperatureFamily => Temperature;
    AngleFamily => Angle;
    HeadingFamily => Heading;
    AreaFamily => Area;
    VolumeFamily => Volume;
    TimeFamily => Time;
    SpeedFamily => Speed;
    WorkTimeFamily => WorkTime;
    QuantityFamily => Quantity;
    QuantityFlowFamily => QuantityFlow;
    DataStorageFamily => DataStorage;
    DataFlowFamily => DataFlow;
    VoltageFamily => Voltage;
    CurrentFamily => Current;
    PowerFamily => Power;
    ResistanceFamily => Resistance;
    CapacitanceFamily => Capacitance;
    FrequencyFamily => Frequency;
    PercentFamily => Percent;
}

fn warn_mixed(op: &str, left: &str, right: &str) {
    if left != right {
        warn!("{} of values stored in [{}] and [{}] uses the left unit", op, left, right);
    }
}

/// Strip the trailing power digit: `in2 -> in`
fn linear_unit(squared: &str) -> &str {
    squared.strip_suffix('2').unwrap_or(squared)
}

/// Volume of `area * length`, labelled `<len>3`.
///
/// Area units are the same in every system, so an area stored in another
/// unit is first converted into the length's squared unit. When no such
/// area unit exists the raw product is labelled from the area's unit.
fn volume_of(area: &Area, length: &Length) -> Volume {
    let linear = linear_unit(area.internal());
    if linear == length.internal() {
        return Volume::from_raw(area.value() * length.value(), format!("{}3", linear));
    }

    let squared = format!("{}2", length.internal());
    let converted = independent::area()
        .and_then(|cat| cat.try_convert_through_base(area.internal(), &squared, area.value()));
    match converted {
        Ok(area_value) => Volume::from_raw(area_value * length.value(), format!("{}3", length.internal())),
        Err(err) => {
            warn!("volume of [{}] and [{}] uses the area unit: {}", area.internal(), length.internal(), err);
            Volume::from_raw(area.value() * length.value(), format!("{}3", linear))
        }
    }
}

// ========== Helpers ==========

impl Length {
    pub fn from_meters(system: &UnitSystem, meters: f64) -> Self {
        Self::new(system, meters, "m")
    }

    pub fn from_kilometers(system: &UnitSystem, kilometers: f64) -> Self {
        Self::new(system, kilometers, "km")
    }

    /// Whole pixels, truncated toward zero
    pub fn as_pixels(&self, system: &UnitSystem) -> Result<i64, UnitError> {
        Ok(self.try_as_units(system, "px")?.trunc() as i64)
    }

    /// Raw value covered by `pixels` at this length's pixel scale
    pub fn from_pixels(&self, system: &UnitSystem, pixels: i64) -> Result<f64, UnitError> {
        let per_length = self.try_as_units(system, "px")?;
        if per_length == 0.0 {
            return Err(UnitError::Config(format!("{} spans no pixels", self)));
        }
        Ok(self.value() * pixels as f64 / per_length)
    }

    /// Square the raw value, keeping the stored unit
    pub fn sq(self) -> Self {
        let value = self.value();
        Self::from_raw(value * value, self.internal())
    }

    pub fn sqrt(self) -> Self {
        Self::from_raw(self.value().sqrt(), self.internal())
    }

    /// Raw difference of stored values
    pub fn diff(&self, other: &Length) -> f64 {
        self.value() - other.value()
    }

    pub fn diff_value(&self, other: f64) -> f64 {
        self.value() - other
    }

    /// Raw sum of stored values
    pub fn sum(&self, other: &Length) -> f64 {
        self.value() + other.value()
    }

    pub fn sum_value(&self, other: f64) -> f64 {
        self.value() + other
    }
}

impl Angle {
    pub fn from_degrees(system: &UnitSystem, degrees: f64) -> Self {
        Self::new(system, degrees, "deg")
    }

    pub fn from_radians(system: &UnitSystem, radians: f64) -> Self {
        Self::new(system, radians, "rad")
    }
}

impl Heading {
    pub fn from_degrees(system: &UnitSystem, degrees: f64) -> Self {
        Self::new(system, degrees, "deg")
    }

    pub fn from_radians(system: &UnitSystem, radians: f64) -> Self {
        Self::new(system, radians, "rad")
    }

    /// Set the heading from degrees, stored in the base unit
    pub fn degrees(&mut self, system: &UnitSystem, degrees: f64) -> &mut Self {
        *self = Self::from_degrees(system, degrees);
        self
    }
}

impl Speed {
    pub fn from_meters_per_second(system: &UnitSystem, value: f64) -> Self {
        Self::new(system, value, "m/s")
    }

    /// Set the speed from miles per hour, stored in the base unit
    pub fn miles_per_hour(&mut self, system: &UnitSystem, mph: f64) -> &mut Self {
        *self = Self::new(system, mph, "mph");
        self
    }
}

impl Time {
    pub fn zero(system: &UnitSystem) -> Self {
        Self::from_seconds(system, 0.0)
    }

    pub fn from_seconds(system: &UnitSystem, seconds: f64) -> Self {
        Self::new(system, seconds, "s")
    }

    pub fn from_days(system: &UnitSystem, days: f64) -> Self {
        Self::new(system, days, "day")
    }
}

// ========== Raw Offsets ==========

/// Offset the stored value, in the internal unit
impl Add<f64> for Length {
    type Output = Length;

    fn add(self, rhs: f64) -> Length {
        Length::from_raw(self.value() + rhs, self.internal())
    }
}

impl Sub<f64> for Length {
    type Output = Length;

    fn sub(self, rhs: f64) -> Length {
        Length::from_raw(self.value() - rhs, self.internal())
    }
}

/// Count offset: `ea + 3`
impl Add<i32> for Quantity {
    type Output = Quantity;

    fn add(self, rhs: i32) -> Quantity {
        Quantity::from_raw(self.value() + f64::from(rhs), self.internal())
    }
}

impl Sub<i32> for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: i32) -> Quantity {
        Quantity::from_raw(self.value() - f64::from(rhs), self.internal())
    }
}

// ========== Cross-Family Operators ==========

/// `m * m -> m2`
impl Mul for Length {
    type Output = Area;

    fn mul(self, rhs: Length) -> Area {
        warn_mixed("product", self.internal(), rhs.internal());
        Area::from_raw(self.value() * rhs.value(), format!("{}2", self.internal()))
    }
}

/// `m2 * m -> m3`
impl Mul<Length> for Area {
    type Output = Volume;

    fn mul(self, rhs: Length) -> Volume {
        volume_of(&self, &rhs)
    }
}

/// `m * m2 -> m3`
impl Mul<Area> for Length {
    type Output = Volume;

    fn mul(self, rhs: Area) -> Volume {
        volume_of(&rhs, &self)
    }
}

/// Dimensionless ratio of two lengths
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        warn_mixed("ratio", self.internal(), rhs.internal());
        self.value() / rhs.value()
    }
}

/// `m / s -> m/s`
impl Div<Time> for Length {
    type Output = Speed;

    fn div(self, rhs: Time) -> Speed {
        Speed::from_raw(self.value() / rhs.value(), format!("{}/{}", self.internal(), rhs.internal()))
    }
}

impl Div<Time> for Quantity {
    type Output = QuantityFlow;

    fn div(self, rhs: Time) -> QuantityFlow {
        QuantityFlow::from_raw(self.value() / rhs.value(), "ea/s")
    }
}

impl Mul<Time> for QuantityFlow {
    type Output = Quantity;

    fn mul(self, rhs: Time) -> Quantity {
        Quantity::from_raw(self.value() * rhs.value(), "ea")
    }
}
