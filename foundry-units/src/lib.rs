//! Foundry Units - Unit systems and strongly-typed quantities
//!
//! Builds one conversion table per unit family for a chosen unit system and
//! converts values through single-hop rule lookups.
//!
//! Unit systems (length / mass / force / temperature base units):
//! - IPS (in, lb, lbf, F)
//! - FPS (ft, lb, lbf, F)
//! - MKS (m, kg, N, C)
//! - CGS (cm, g, dyne, C)
//! - mmNs (mm, kg, N, C)
//!
//! Every other family (angle, area, volume, time, speed, data, electrical,
//! quantity, work time, percent) has a fixed base unit in all systems.

mod conversion;
mod category;
mod builders;
pub mod independent;
mod system;
mod config;
mod measured;
mod quantities;

pub use conversion::{ConversionRule, RuleKind, Transform, rule_key};
pub use category::{UnitCategory, ConvertOutcome};
pub use builders::{CategoryBuilders, celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use system::{UnitSystem, UnitSystemType, BaseUnits};
pub use config::{UnitSystemConfig, ENV_UNIT_SYSTEM, ENV_PIXELS_PER_METER};
pub use measured::{Family, MeasuredValue};
pub use quantities::*;

pub use foundry_core::{UnitError, UnitFamilyName, UnitIdentity, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        UnitCategory, UnitSystem, UnitSystemType, UnitSystemConfig, MeasuredValue, Family,
        CategoryBuilders, ConvertOutcome,
    };
    pub use crate::{
        Length, Mass, Force, Temperature, Angle, Heading, Area, Volume, Time, Speed,
        WorkTime, Quantity, QuantityFlow, DataStorage, DataFlow, Voltage, Current, Power,
        Resistance, Capacitance, Frequency, Percent,
    };
    pub use foundry_core::prelude::*;
}
