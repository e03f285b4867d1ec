//! Unit systems: which unit is the base unit of each family
//!
//! A `UnitSystem` is an explicit context value. `apply` rebuilds every
//! category for the chosen system type and replaces the previous set only
//! when every category was built and validated. Measured values built
//! earlier keep the internal unit they were stored in.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use foundry_core::{UnitError, UnitFamilyName, UnitIdentity};
use tracing::info;
use crate::{CategoryBuilders, UnitCategory, UnitSystemConfig};
use crate::independent::system_independent_categories;

/// The supported unit systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystemType {
    /// Inch-Pound-Second
    #[serde(rename = "IPS")]
    Ips,
    /// Foot-Pound-Second
    #[serde(rename = "FPS")]
    Fps,
    /// Meter-Kilogram-Second
    #[default]
    #[serde(rename = "MKS")]
    Mks,
    /// Centimeter-Gram-Second
    #[serde(rename = "CGS")]
    Cgs,
    /// Millimeter-Newton-Second
    #[serde(rename = "mmNs")]
    MmNs,
}

/// Base unit symbols of the system-dependent families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseUnits {
    pub length: &'static str,
    pub mass: &'static str,
    pub force: &'static str,
    pub temperature: &'static str,
}

impl UnitSystemType {
    pub const ALL: [UnitSystemType; 5] = [
        UnitSystemType::Ips,
        UnitSystemType::Fps,
        UnitSystemType::Mks,
        UnitSystemType::Cgs,
        UnitSystemType::MmNs,
    ];

    /// Short name as used in configuration ("IPS", "mmNs", ...)
    pub fn name(&self) -> &'static str {
        match self {
            UnitSystemType::Ips => "IPS",
            UnitSystemType::Fps => "FPS",
            UnitSystemType::Mks => "MKS",
            UnitSystemType::Cgs => "CGS",
            UnitSystemType::MmNs => "mmNs",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UnitSystemType::Ips => "Inch-Pound-Second",
            UnitSystemType::Fps => "Foot-Pound-Second",
            UnitSystemType::Mks => "Meter-Kilogram-Second",
            UnitSystemType::Cgs => "Centimeter-Gram-Second",
            UnitSystemType::MmNs => "Millimeter-Newton-Second",
        }
    }

    pub fn base_units(&self) -> BaseUnits {
        match self {
            UnitSystemType::Ips => BaseUnits { length: "in", mass: "lb", force: "lbf", temperature: "F" },
            UnitSystemType::Fps => BaseUnits { length: "ft", mass: "lb", force: "lbf", temperature: "F" },
            UnitSystemType::Mks => BaseUnits { length: "m", mass: "kg", force: "N", temperature: "C" },
            UnitSystemType::Cgs => BaseUnits { length: "cm", mass: "g", force: "dyne", temperature: "C" },
            UnitSystemType::MmNs => BaseUnits { length: "mm", mass: "kg", force: "N", temperature: "C" },
        }
    }
}

impl fmt::Display for UnitSystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnitSystemType {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ips" => Ok(UnitSystemType::Ips),
            "fps" => Ok(UnitSystemType::Fps),
            "mks" => Ok(UnitSystemType::Mks),
            "cgs" => Ok(UnitSystemType::Cgs),
            "mmns" => Ok(UnitSystemType::MmNs),
            _ => Err(UnitError::UnknownSystem(s.to_string())),
        }
    }
}

/// The set of unit categories for one active unit system
#[derive(Debug, Clone, Default)]
pub struct UnitSystem {
    active: Option<UnitSystemType>,
    categories: BTreeMap<UnitFamilyName, UnitCategory>,
}

impl UnitSystem {
    /// An uninitialized system with no categories
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(system: UnitSystemType) -> Result<Self, UnitError> {
        let mut units = Self::new();
        units.apply(system)?;
        Ok(units)
    }

    pub fn from_config(config: &UnitSystemConfig) -> Result<Self, UnitError> {
        let mut units = Self::with_system(config.system)?;
        if let Some(pixels_per_meter) = config.pixels_per_meter {
            units.set_pixels_per_meter(pixels_per_meter)?;
        }
        Ok(units)
    }

    /// Rebuild every category for `system`.
    ///
    /// On error the previously applied categories stay in place.
    pub fn apply(&mut self, system: UnitSystemType) -> Result<(), UnitError> {
        let mut categories = match system {
            UnitSystemType::Ips => ips_categories()?,
            UnitSystemType::Fps => fps_categories()?,
            UnitSystemType::Mks => mks_categories()?,
            UnitSystemType::Cgs => cgs_categories()?,
            UnitSystemType::MmNs => mmns_categories()?,
        };
        categories.extend(system_independent_categories()?);

        let mut published = BTreeMap::new();
        for category in categories {
            category.validate()?;
            published.insert(category.family(), category);
        }

        self.categories = published;
        self.active = Some(system);
        info!(system = %system, categories = self.categories.len(), "applied unit system");
        Ok(())
    }

    pub fn active_system(&self) -> Option<UnitSystemType> {
        self.active
    }

    /// Register pixels so that `pixels_per_meter` px equals one meter
    pub fn set_pixels_per_meter(&mut self, pixels_per_meter: f64) -> Result<(), UnitError> {
        if !pixels_per_meter.is_finite() || pixels_per_meter <= 0.0 {
            return Err(UnitError::Config(format!(
                "pixels per meter must be a positive number, got {}",
                pixels_per_meter
            )));
        }

        let length = self
            .categories
            .get_mut(&UnitFamilyName::Length)
            .ok_or(UnitError::MissingCategory(UnitFamilyName::Length))?;

        let base = length.base_units().name().to_string();
        let base_per_meter = length.try_convert("m", &base, 1.0)?;
        if !length.has_unit("px") {
            length.register_unit("px", "pixels")?;
        }
        length.register_ratio(pixels_per_meter, "px", base_per_meter, &base);
        Ok(())
    }

    // ========== Category Access ==========

    pub fn category(&self, family: UnitFamilyName) -> Option<&UnitCategory> {
        self.categories.get(&family)
    }

    /// All published categories, ordered by family
    pub fn categories(&self) -> Vec<&UnitCategory> {
        self.categories.values().collect()
    }

    pub fn length(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Length)
    }

    pub fn mass(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Mass)
    }

    pub fn force(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Force)
    }

    pub fn temperature(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Temperature)
    }

    pub fn angle(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Angle)
    }

    pub fn storage(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::DataStorage)
    }

    pub fn worktime(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::WorkTime)
    }

    pub fn area(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Area)
    }

    pub fn volume(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Volume)
    }

    pub fn quantity(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::Quantity)
    }

    pub fn quantity_flow(&self) -> Option<&UnitCategory> {
        self.category(UnitFamilyName::QuantityFlow)
    }
}

// ========== Per-System Builders ==========

fn length(symbol: &str, title: &str) -> UnitCategory {
    UnitCategory::new("Length", UnitIdentity::new(symbol, title, UnitFamilyName::Length))
}

fn mass(symbol: &str, title: &str) -> Result<UnitCategory, UnitError> {
    UnitCategory::new("Mass", UnitIdentity::new(symbol, title, UnitFamilyName::Mass)).mass_units(symbol)
}

fn force(symbol: &str, title: &str) -> Result<UnitCategory, UnitError> {
    UnitCategory::new("Force", UnitIdentity::new(symbol, title, UnitFamilyName::Force)).force_units(symbol)
}

fn temperature(symbol: &str, title: &str) -> Result<UnitCategory, UnitError> {
    UnitCategory::new("Temperature", UnitIdentity::new(symbol, title, UnitFamilyName::Temperature))
        .temperature_conversions()
}

/// Inches, pounds, pound-force, Fahrenheit
fn ips_categories() -> Result<Vec<UnitCategory>, UnitError> {
    let length = length("in", "inches")
        .imperial_length_units("in")?
        .cross_system_conversions()?
        .unit("px", "pixels")?
        .ratio(96.0, "px", 1.0, "in"); // 96 DPI

    Ok(vec![
        length,
        mass("lb", "pounds")?,
        force("lbf", "pounds-force")?,
        temperature("F", "Fahrenheit")?,
    ])
}

/// Feet, pounds, pound-force, Fahrenheit
fn fps_categories() -> Result<Vec<UnitCategory>, UnitError> {
    let length = length("ft", "feet")
        .imperial_length_units("ft")?
        .cross_system_conversions()?
        .unit("px", "pixels")?
        .ratio(1152.0, "px", 1.0, "ft"); // 96 DPI * 12 in/ft

    Ok(vec![
        length,
        mass("lb", "pounds")?,
        force("lbf", "pounds-force")?,
        temperature("F", "Fahrenheit")?,
    ])
}

/// Meters, kilograms, newtons, Celsius
fn mks_categories() -> Result<Vec<UnitCategory>, UnitError> {
    let length = length("m", "meters")
        .metric_length_units("m")?
        .cross_system_conversions()?
        .unit("px", "pixels")?
        .ratio(5000.0, "px", 1.0, "m");

    Ok(vec![
        length,
        mass("kg", "kilograms")?,
        force("N", "newtons")?,
        temperature("C", "Celsius")?,
    ])
}

/// Centimeters, grams, dynes, Celsius
fn cgs_categories() -> Result<Vec<UnitCategory>, UnitError> {
    let length = length("cm", "centimeters")
        .metric_length_units("cm")?
        .cross_system_conversions()?;

    Ok(vec![
        length,
        mass("g", "grams")?,
        force("dyne", "dynes")?,
        temperature("C", "Celsius")?,
    ])
}

/// Millimeters, kilograms, newtons, Celsius
fn mmns_categories() -> Result<Vec<UnitCategory>, UnitError> {
    let length = length("mm", "millimeters")
        .metric_length_units("mm")?
        .cross_system_conversions()?
        .unit("μm", "micrometers")?
        .ratio(1000.0, "μm", 1.0, "mm");

    Ok(vec![
        length,
        mass("kg", "kilograms")?,
        force("N", "newtons")?,
        temperature("C", "Celsius")?,
    ])
}
