//! Standard rule sets for unit categories
//!
//! Each builder takes a category by value and returns it with a ladder of
//! units added relative to a given base symbol. Ratios marked exact come from
//! SI prefixes or international definitions (1 in = 2.54 cm, 1 lb =
//! 0.45359237 kg); the rest are rounded decimals and do not round-trip to
//! full double precision.

use foundry_core::UnitError;
use crate::UnitCategory;

/// Builders that populate a `UnitCategory` with a standard rule set
pub trait CategoryBuilders: Sized {
    /// mm, cm, km relative to a metric base ("m", "mm" or "cm")
    fn metric_length_units(self, base: &str) -> Result<Self, UnitError>;

    /// ft, yd, mi (and mil) relative to an imperial base ("in" or "ft")
    fn imperial_length_units(self, base: &str) -> Result<Self, UnitError>;

    /// Metric <-> imperial length rules for the category's own base unit
    fn cross_system_conversions(self) -> Result<Self, UnitError>;

    /// Celsius, Fahrenheit, Kelvin (and Rankine) formulas for the category's base unit
    fn temperature_conversions(self) -> Result<Self, UnitError>;

    /// Mass ladder relative to "kg", "g" or "lb"
    fn mass_units(self, base: &str) -> Result<Self, UnitError>;

    /// Force ladder relative to "N", "dyne" or "lbf"
    fn force_units(self, base: &str) -> Result<Self, UnitError>;
}

impl CategoryBuilders for UnitCategory {
    fn metric_length_units(self, base: &str) -> Result<Self, UnitError> {
        match base {
            "m" => Ok(self
                .unit("mm", "millimeters")?.ratio(1000.0, "mm", 1.0, "m")
                .unit("cm", "centimeters")?.ratio(100.0, "cm", 1.0, "m")
                .unit("km", "kilometers")?.ratio(1.0, "km", 1000.0, "m")),
            "mm" => Ok(self
                .unit("cm", "centimeters")?.ratio(1.0, "cm", 10.0, "mm")
                .unit("m", "meters")?.ratio(0.001, "m", 1.0, "mm")
                .unit("km", "kilometers")?.ratio(0.000001, "km", 1.0, "mm")),
            "cm" => Ok(self
                .unit("mm", "millimeters")?.ratio(10.0, "mm", 1.0, "cm")
                .unit("m", "meters")?.ratio(0.01, "m", 1.0, "cm")
                .unit("km", "kilometers")?.ratio(0.00001, "km", 1.0, "cm")),
            other => Err(UnitError::unsupported_base("metric length units", other, "m, mm, cm")),
        }
    }

    fn imperial_length_units(self, base: &str) -> Result<Self, UnitError> {
        match base {
            "in" => Ok(self
                .unit("ft", "feet")?.ratio(1.0, "ft", 12.0, "in")
                .unit("yd", "yards")?.ratio(1.0, "yd", 36.0, "in")
                .unit("mi", "miles")?.ratio(1.0, "mi", 63360.0, "in")
                .unit("mil", "mils")?.ratio(1000.0, "mil", 1.0, "in")),
            "ft" => Ok(self
                .unit("in", "inches")?.ratio(12.0, "in", 1.0, "ft")
                .unit("yd", "yards")?.ratio(1.0, "yd", 3.0, "ft")
                .unit("mi", "miles")?.ratio(1.0, "mi", 5280.0, "ft")),
            other => Err(UnitError::unsupported_base("imperial length units", other, "in, ft")),
        }
    }

    fn cross_system_conversions(self) -> Result<Self, UnitError> {
        let base = self.base_units().name().to_string();
        match base.as_str() {
            // rounded reciprocals of 0.0254 m/in and 0.3048 m/ft
            "m" => Ok(self
                .unit("in", "inches")?.ratio(39.3700787402, "in", 1.0, "m")
                .unit("ft", "feet")?.ratio(3.28083989501, "ft", 1.0, "m")),
            "in" => Ok(self
                .unit("mm", "millimeters")?.ratio(25.4, "mm", 1.0, "in")
                .unit("cm", "centimeters")?.ratio(2.54, "cm", 1.0, "in")
                .unit("m", "meters")?.ratio(0.0254, "m", 1.0, "in")),
            "ft" => Ok(self
                .unit("m", "meters")?.ratio(0.3048, "m", 1.0, "ft")
                .unit("cm", "centimeters")?.ratio(30.48, "cm", 1.0, "ft")),
            "mm" => Ok(self
                .unit("in", "inches")?.ratio(1.0 / 25.4, "in", 1.0, "mm")
                .unit("ft", "feet")?.ratio(1.0 / (25.4 * 12.0), "ft", 1.0, "mm")),
            "cm" => Ok(self
                .unit("in", "inches")?.ratio(1.0 / 2.54, "in", 1.0, "cm")
                .unit("ft", "feet")?.ratio(1.0 / 30.48, "ft", 1.0, "cm")),
            other => Err(UnitError::unsupported_base("cross-system length conversions", other, "m, cm, mm, in, ft")),
        }
    }

    fn temperature_conversions(self) -> Result<Self, UnitError> {
        let base = self.base_units().name().to_string();
        match base.as_str() {
            "C" => Ok(self
                .unit("F", "Fahrenheit")?
                .formula("C", "F", celsius_to_fahrenheit)
                .formula("F", "C", fahrenheit_to_celsius)
                .unit("K", "Kelvin")?
                .formula("C", "K", |c| c + 273.15)
                .formula("K", "C", |k| k - 273.15)),
            "F" => Ok(self
                .unit("C", "Celsius")?
                .formula("F", "C", fahrenheit_to_celsius)
                .formula("C", "F", celsius_to_fahrenheit)
                .unit("K", "Kelvin")?
                .formula("F", "K", |f| fahrenheit_to_celsius(f) + 273.15)
                .formula("K", "F", |k| celsius_to_fahrenheit(k - 273.15))
                .unit("R", "Rankine")?
                .formula("F", "R", |f| f + 459.67)
                .formula("R", "F", |r| r - 459.67)),
            "K" => Ok(self
                .unit("C", "Celsius")?
                .formula("K", "C", |k| k - 273.15)
                .formula("C", "K", |c| c + 273.15)
                .unit("F", "Fahrenheit")?
                .formula("K", "F", |k| celsius_to_fahrenheit(k - 273.15))
                .formula("F", "K", |f| fahrenheit_to_celsius(f) + 273.15)),
            other => Err(UnitError::unsupported_base("temperature conversions", other, "C, F, K")),
        }
    }

    fn mass_units(self, base: &str) -> Result<Self, UnitError> {
        match base {
            "kg" => Ok(self
                .unit("g", "grams")?.ratio(1000.0, "g", 1.0, "kg")
                .unit("mg", "milligrams")?.ratio(1000000.0, "mg", 1.0, "kg")
                .unit("lb", "pounds")?.ratio(2.20462262185, "lb", 1.0, "kg")
                .unit("oz", "ounces")?.ratio(35.2739619496, "oz", 1.0, "kg")),
            "g" => Ok(self
                .unit("kg", "kilograms")?.ratio(0.001, "kg", 1.0, "g")
                .unit("mg", "milligrams")?.ratio(1000.0, "mg", 1.0, "g")
                .unit("lb", "pounds")?.ratio(0.00220462262, "lb", 1.0, "g")
                .unit("oz", "ounces")?.ratio(0.035273962, "oz", 1.0, "g")),
            "lb" => Ok(self
                .unit("oz", "ounces")?.ratio(16.0, "oz", 1.0, "lb")
                .unit("ton", "tons")?.ratio(1.0, "ton", 2000.0, "lb")
                .unit("kg", "kilograms")?.ratio(0.45359237, "kg", 1.0, "lb")
                .unit("g", "grams")?.ratio(453.59237, "g", 1.0, "lb")),
            other => Err(UnitError::unsupported_base("mass units", other, "kg, g, lb")),
        }
    }

    fn force_units(self, base: &str) -> Result<Self, UnitError> {
        match base {
            "N" => Ok(self
                .unit("kN", "kilonewtons")?.ratio(1.0, "kN", 1000.0, "N")
                .unit("dyne", "dynes")?.ratio(100000.0, "dyne", 1.0, "N")
                .unit("lbf", "pounds-force")?.ratio(0.224808943, "lbf", 1.0, "N")),
            "dyne" => Ok(self
                .unit("N", "newtons")?.ratio(0.00001, "N", 1.0, "dyne")
                .unit("lbf", "pounds-force")?.ratio(2.24808943e-6, "lbf", 1.0, "dyne")),
            "lbf" => Ok(self
                .unit("N", "newtons")?.ratio(4.4482216152605, "N", 1.0, "lbf")
                .unit("dyne", "dynes")?.ratio(444822.16152605, "dyne", 1.0, "lbf")),
            other => Err(UnitError::unsupported_base("force units", other, "N, dyne, lbf")),
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry_core::{UnitFamilyName, UnitIdentity};

    const EPS: f64 = 1e-9;

    fn category(title: &str, symbol: &str, family: UnitFamilyName) -> UnitCategory {
        UnitCategory::new(title, UnitIdentity::new(symbol, symbol, family))
    }

    fn length(base: &str) -> UnitCategory {
        category("Length", base, UnitFamilyName::Length)
    }

    fn temperature(base: &str) -> UnitCategory {
        category("Temperature", base, UnitFamilyName::Temperature)
    }

    #[test]
    fn test_metric_ladder_meters() {
        let cat = length("m").metric_length_units("m").unwrap();
        assert_eq!(cat.convert_from_base_units("mm", 1.0), 1000.0);
        assert_eq!(cat.convert_from_base_units("cm", 1.0), 100.0);
        assert_eq!(cat.convert_to_base_units("km", 2.0), 2000.0);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_metric_ladder_millimeters() {
        let cat = length("mm").metric_length_units("mm").unwrap();
        assert_eq!(cat.convert_to_base_units("cm", 1.0), 10.0);
        assert!((cat.convert_to_base_units("m", 1.0) - 1000.0).abs() < EPS);
        assert!((cat.convert_to_base_units("km", 1.0) - 1_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_metric_ladder_rejects_unknown_base() {
        let err = length("yd").metric_length_units("yd").unwrap_err();
        assert!(matches!(err, UnitError::UnsupportedBaseUnit { ref unit, .. } if unit == "yd"));
    }

    #[test]
    fn test_imperial_ladder_inches() {
        let cat = length("in").imperial_length_units("in").unwrap();
        assert_eq!(cat.convert_to_base_units("ft", 1.0), 12.0);
        assert_eq!(cat.convert_to_base_units("yd", 1.0), 36.0);
        assert_eq!(cat.convert_to_base_units("mi", 1.0), 63360.0);
        assert_eq!(cat.convert_from_base_units("mil", 1.0), 1000.0);
    }

    #[test]
    fn test_imperial_ladder_feet_has_no_mils() {
        let cat = length("ft").imperial_length_units("ft").unwrap();
        assert_eq!(cat.convert_to_base_units("mi", 1.0), 5280.0);
        assert!(!cat.has_unit("mil"));
        assert!(length("m").imperial_length_units("m").is_err());
    }

    #[test]
    fn test_cross_system_from_inches_is_exact() {
        let cat = length("in").imperial_length_units("in").unwrap().cross_system_conversions().unwrap();
        assert!((cat.convert_from_base_units("mm", 1.0) - 25.4).abs() < EPS);
        assert!((cat.convert_to_base_units("cm", 2.54) - 1.0).abs() < EPS);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_cross_system_from_meters_is_approximate() {
        let cat = length("m").cross_system_conversions().unwrap();
        let inches = cat.convert_from_base_units("in", 1.0);
        assert!((inches - 39.3701).abs() < 5e-5);
        assert!((cat.convert_from_base_units("ft", 1.0) - 3.28084).abs() < 5e-6);
    }

    #[test]
    fn test_cross_system_rejects_unknown_base() {
        assert!(length("yd").cross_system_conversions().is_err());
    }

    #[test]
    fn test_temperature_fixed_points_celsius_base() {
        let cat = temperature("C").temperature_conversions().unwrap();
        assert!((cat.convert("C", "F", 0.0) - 32.0).abs() < EPS);
        assert!((cat.convert("C", "K", 0.0) - 273.15).abs() < EPS);
        assert!((cat.convert("F", "C", 32.0)).abs() < EPS);
        assert!((cat.convert("K", "C", 273.15)).abs() < EPS);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_temperature_fahrenheit_base_pairs_every_formula() {
        let cat = temperature("F").temperature_conversions().unwrap();
        assert!((cat.convert_to_base_units("K", 273.15) - 32.0).abs() < EPS);
        assert!((cat.convert_from_base_units("K", 32.0) - 273.15).abs() < EPS);
        assert!((cat.convert_from_base_units("R", 0.0) - 459.67).abs() < EPS);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_temperature_kelvin_base() {
        let cat = temperature("K").temperature_conversions().unwrap();
        assert!((cat.convert_from_base_units("F", 373.15) - 212.0).abs() < EPS);
        assert!((cat.convert_to_base_units("F", 212.0) - 373.15).abs() < EPS);
        assert!(cat.validate().is_ok());
        assert!(temperature("X").temperature_conversions().is_err());
    }

    #[test]
    fn test_mass_pound_base_is_exact() {
        let cat = category("Mass", "lb", UnitFamilyName::Mass).mass_units("lb").unwrap();
        assert!((cat.convert_to_base_units("kg", 0.45359237) - 1.0).abs() < EPS);
        assert_eq!(cat.convert_to_base_units("ton", 1.0), 2000.0);
        assert_eq!(cat.convert_from_base_units("oz", 1.0), 16.0);
    }

    #[test]
    fn test_mass_kilogram_pound_rounded_constant() {
        let kg = category("Mass", "kg", UnitFamilyName::Mass).mass_units("kg").unwrap();
        let lb = category("Mass", "lb", UnitFamilyName::Mass).mass_units("lb").unwrap();

        // independently rounded constants: bounded error, not exact
        let pounds = kg.convert_from_base_units("lb", 1.0);
        let back = lb.convert_from_base_units("kg", pounds);
        assert!(((back - 1.0) / 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_force_ladders() {
        let n = category("Force", "N", UnitFamilyName::Force).force_units("N").unwrap();
        assert_eq!(n.convert_from_base_units("dyne", 1.0), 100000.0);
        assert_eq!(n.convert_to_base_units("kN", 1.0), 1000.0);

        let lbf = category("Force", "lbf", UnitFamilyName::Force).force_units("lbf").unwrap();
        assert!((lbf.convert_from_base_units("N", 1.0) - 4.4482216152605).abs() < EPS);

        let dyne = category("Force", "dyne", UnitFamilyName::Force).force_units("dyne").unwrap();
        assert!((dyne.convert_to_base_units("N", 1.0) - 100000.0).abs() < 1e-6);
        assert!(dyne.validate().is_ok());

        assert!(category("Force", "kip", UnitFamilyName::Force).force_units("kip").is_err());
    }
}
