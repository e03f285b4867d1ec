//! Physical quantity families
//!
//! Every unit category and every measured value belongs to exactly one
//! family for its whole lifetime.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The closed set of physical-quantity kinds known to the unit engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitFamilyName {
    Length,
    Mass,
    Force,
    Temperature,
    Angle,
    Heading,
    Area,
    Volume,
    Time,
    Speed,
    WorkTime,
    Quantity,
    QuantityFlow,
    DataStorage,
    DataFlow,
    Voltage,
    Current,
    Power,
    Resistance,
    Capacitance,
    Frequency,
    Percent,
}

impl UnitFamilyName {
    /// All families, in declaration order
    pub const ALL: [UnitFamilyName; 22] = [
        UnitFamilyName::Length,
        UnitFamilyName::Mass,
        UnitFamilyName::Force,
        UnitFamilyName::Temperature,
        UnitFamilyName::Angle,
        UnitFamilyName::Heading,
        UnitFamilyName::Area,
        UnitFamilyName::Volume,
        UnitFamilyName::Time,
        UnitFamilyName::Speed,
        UnitFamilyName::WorkTime,
        UnitFamilyName::Quantity,
        UnitFamilyName::QuantityFlow,
        UnitFamilyName::DataStorage,
        UnitFamilyName::DataFlow,
        UnitFamilyName::Voltage,
        UnitFamilyName::Current,
        UnitFamilyName::Power,
        UnitFamilyName::Resistance,
        UnitFamilyName::Capacitance,
        UnitFamilyName::Frequency,
        UnitFamilyName::Percent,
    ];

    /// Whether the base unit of this family depends on the chosen unit system
    pub fn is_system_dependent(&self) -> bool {
        matches!(
            self,
            UnitFamilyName::Length
                | UnitFamilyName::Mass
                | UnitFamilyName::Force
                | UnitFamilyName::Temperature
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnitFamilyName::Length => "Length",
            UnitFamilyName::Mass => "Mass",
            UnitFamilyName::Force => "Force",
            UnitFamilyName::Temperature => "Temperature",
            UnitFamilyName::Angle => "Angle",
            UnitFamilyName::Heading => "Heading",
            UnitFamilyName::Area => "Area",
            UnitFamilyName::Volume => "Volume",
            UnitFamilyName::Time => "Time",
            UnitFamilyName::Speed => "Speed",
            UnitFamilyName::WorkTime => "WorkTime",
            UnitFamilyName::Quantity => "Quantity",
            UnitFamilyName::QuantityFlow => "QuantityFlow",
            UnitFamilyName::DataStorage => "DataStorage",
            UnitFamilyName::DataFlow => "DataFlow",
            UnitFamilyName::Voltage => "Voltage",
            UnitFamilyName::Current => "Current",
            UnitFamilyName::Power => "Power",
            UnitFamilyName::Resistance => "Resistance",
            UnitFamilyName::Capacitance => "Capacitance",
            UnitFamilyName::Frequency => "Frequency",
            UnitFamilyName::Percent => "Percent",
        }
    }
}

impl fmt::Display for UnitFamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
