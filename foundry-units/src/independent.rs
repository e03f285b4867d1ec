//! Categories that are identical under every unit system
//!
//! Rebuilt on every `UnitSystem::apply` with fixed base units: radians,
//! KB, KB/sec, Hrs, "ea", "ea/s", m2, m3, s, m/s and the SI electrical units.

use std::f64::consts::PI;
use foundry_core::{UnitError, UnitFamilyName, UnitIdentity};
use crate::UnitCategory;

fn base(symbol: &str, title: &str, family: UnitFamilyName) -> UnitIdentity {
    UnitIdentity::new(symbol, title, family)
}

fn square(v: f64) -> f64 {
    v * v
}

fn cube(v: f64) -> f64 {
    v * v * v
}

/// Build every system-independent category
pub fn system_independent_categories() -> Result<Vec<UnitCategory>, UnitError> {
    Ok(vec![
        angle()?,
        heading()?,
        data_storage()?,
        data_flow()?,
        work_time()?,
        quantity()?,
        quantity_flow()?,
        area()?,
        volume()?,
        time()?,
        speed()?,
        voltage()?,
        current()?,
        power()?,
        resistance()?,
        capacitance()?,
        frequency()?,
        percent()?,
    ])
}

pub fn angle() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Angle", base("rad", "radians", UnitFamilyName::Angle))
        .unit("deg", "degrees")?
        .formula("deg", "rad", |v| PI * v / 180.0)
        .formula("rad", "deg", |v| 180.0 * v / PI))
}

pub fn heading() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Heading", base("rad", "radians", UnitFamilyName::Heading))
        .unit("deg", "degrees")?
        .formula("deg", "rad", |v| PI * v / 180.0)
        .formula("rad", "deg", |v| 180.0 * v / PI))
}

pub fn data_storage() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("DataStorage", base("KB", "KiloBytes", UnitFamilyName::DataStorage))
        .unit("GB", "GigaBytes")?.ratio(1000.0, "KB", 1.0, "GB")
        .unit("TB", "TeraBytes")?.ratio(1000000.0, "KB", 1.0, "TB")
        .unit("Bytes", "Bytes")?.ratio(1000.0, "Bytes", 1.0, "KB"))
}

pub fn data_flow() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("DataFlow", base("KB/sec", "KiloBytes per second", UnitFamilyName::DataFlow))
        .unit("Bytes/sec", "Bytes per second")?.ratio(1000.0, "Bytes/sec", 1.0, "KB/sec")
        .unit("GB/sec", "GigaBytes per second")?.ratio(1000.0, "KB/sec", 1.0, "GB/sec"))
}

/// Work time in hours; a work day spans 5 days and a week 7 days
pub fn work_time() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("WorkTime", base("Hrs", "Hours", UnitFamilyName::WorkTime))
        .unit("Days", "Days")?.ratio(24.0, "Hrs", 1.0, "Days")
        .unit("Wdays", "WorkDays")?.ratio(5.0 * 24.0, "Hrs", 1.0, "Wdays")
        .unit("Wks", "Weeks")?.ratio(7.0 * 24.0, "Hrs", 1.0, "Wks")
        .unit("Mins", "Minutes")?.ratio(60.0, "Mins", 1.0, "Hrs"))
}

pub fn quantity() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Quantity", base("ea", "each", UnitFamilyName::Quantity))
        .unit("dz", "dozen")?.ratio(1.0, "dz", 12.0, "ea")
        .unit("gr", "gross")?.ratio(1.0, "gr", 144.0, "ea"))
}

pub fn quantity_flow() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("QuantityFlow", base("ea/s", "each per sec", UnitFamilyName::QuantityFlow))
        .unit("dz/s", "dozen per sec")?.ratio(1.0, "dz/s", 12.0, "ea/s")
        .unit("ea/m", "each per min")?.ratio(60.0, "ea/m", 1.0, "ea/s")
        .unit("ea/hr", "each per hour")?.ratio(3600.0, "ea/hr", 1.0, "ea/s")
        .unit("ea/day", "each per day")?.ratio(86400.0, "ea/day", 1.0, "ea/s"))
}

/// Area in square meters; squared length symbols match `Length * Length`
pub fn area() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Area", base("m2", "sq meters", UnitFamilyName::Area))
        .unit("mm2", "sq millimeters")?.ratio(square(1000.0), "mm2", 1.0, "m2")
        .unit("cm2", "sq centimeters")?.ratio(square(100.0), "cm2", 1.0, "m2")
        .unit("km2", "sq kilometers")?.ratio(1.0, "km2", square(1000.0), "m2")
        .unit("in2", "sq inches")?.ratio(1.0, "in2", square(0.0254), "m2")
        .unit("ft2", "sq feet")?.ratio(1.0, "ft2", square(0.3048), "m2")
        .unit("yd2", "sq yards")?.ratio(1.0, "yd2", square(0.9144), "m2"))
}

pub fn volume() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Volume", base("m3", "cubic meters", UnitFamilyName::Volume))
        .unit("mm3", "cubic millimeters")?.ratio(cube(1000.0), "mm3", 1.0, "m3")
        .unit("cm3", "cubic centimeters")?.ratio(cube(100.0), "cm3", 1.0, "m3")
        .unit("km3", "cubic kilometers")?.ratio(1.0, "km3", cube(1000.0), "m3")
        .unit("in3", "cubic inches")?.ratio(1.0, "in3", cube(0.0254), "m3")
        .unit("ft3", "cubic feet")?.ratio(1.0, "ft3", cube(0.3048), "m3")
        .unit("L", "liters")?.ratio(1000.0, "L", 1.0, "m3"))
}

pub fn time() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Time", base("s", "seconds", UnitFamilyName::Time))
        .unit("ms", "milliseconds")?.ratio(1000.0, "ms", 1.0, "s")
        .unit("min", "minutes")?.ratio(1.0, "min", 60.0, "s")
        .unit("hr", "hours")?.ratio(1.0, "hr", 3600.0, "s")
        .unit("day", "days")?.ratio(1.0, "day", 86400.0, "s"))
}

pub fn speed() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Speed", base("m/s", "meters per second", UnitFamilyName::Speed))
        .unit("mm/s", "millimeters per second")?.ratio(1000.0, "mm/s", 1.0, "m/s")
        .unit("cm/s", "centimeters per second")?.ratio(100.0, "cm/s", 1.0, "m/s")
        .unit("km/h", "kilometers per hour")?.ratio(3.6, "km/h", 1.0, "m/s")
        .unit("in/s", "inches per second")?.ratio(1.0, "in/s", 0.0254, "m/s")
        .unit("ft/s", "feet per second")?.ratio(1.0, "ft/s", 0.3048, "m/s")
        .unit("mph", "miles per hour")?.ratio(1.0, "mph", 0.44704, "m/s")
        .unit("kn", "knots")?.ratio(3600.0, "kn", 1852.0, "m/s"))
}

pub fn voltage() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Voltage", base("V", "volts", UnitFamilyName::Voltage))
        .unit("mV", "millivolts")?.ratio(1000.0, "mV", 1.0, "V")
        .unit("kV", "kilovolts")?.ratio(1.0, "kV", 1000.0, "V"))
}

pub fn current() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Current", base("A", "amperes", UnitFamilyName::Current))
        .unit("uA", "microamperes")?.ratio(1000000.0, "uA", 1.0, "A")
        .unit("mA", "milliamperes")?.ratio(1000.0, "mA", 1.0, "A")
        .unit("kA", "kiloamperes")?.ratio(1.0, "kA", 1000.0, "A"))
}

pub fn power() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Power", base("W", "watts", UnitFamilyName::Power))
        .unit("mW", "milliwatts")?.ratio(1000.0, "mW", 1.0, "W")
        .unit("kW", "kilowatts")?.ratio(1.0, "kW", 1000.0, "W")
        .unit("MW", "megawatts")?.ratio(1.0, "MW", 1000000.0, "W")
        .unit("hp", "horsepower")?.ratio(1.0, "hp", 745.69987158227022, "W"))
}

pub fn resistance() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Resistance", base("ohm", "ohms", UnitFamilyName::Resistance))
        .unit("mohm", "milliohms")?.ratio(1000.0, "mohm", 1.0, "ohm")
        .unit("kohm", "kiloohms")?.ratio(1.0, "kohm", 1000.0, "ohm")
        .unit("Mohm", "megaohms")?.ratio(1.0, "Mohm", 1000000.0, "ohm"))
}

pub fn capacitance() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Capacitance", base("F", "farads", UnitFamilyName::Capacitance))
        .unit("mF", "millifarads")?.ratio(1e3, "mF", 1.0, "F")
        .unit("uF", "microfarads")?.ratio(1e6, "uF", 1.0, "F")
        .unit("nF", "nanofarads")?.ratio(1e9, "nF", 1.0, "F")
        .unit("pF", "picofarads")?.ratio(1e12, "pF", 1.0, "F"))
}

pub fn frequency() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Frequency", base("Hz", "hertz", UnitFamilyName::Frequency))
        .unit("kHz", "kilohertz")?.ratio(1.0, "kHz", 1e3, "Hz")
        .unit("MHz", "megahertz")?.ratio(1.0, "MHz", 1e6, "Hz")
        .unit("GHz", "gigahertz")?.ratio(1.0, "GHz", 1e9, "Hz")
        .unit("rpm", "revolutions per minute")?.ratio(60.0, "rpm", 1.0, "Hz"))
}

pub fn percent() -> Result<UnitCategory, UnitError> {
    Ok(UnitCategory::new("Percent", base("%", "percent", UnitFamilyName::Percent))
        .unit("fraction", "fraction")?.ratio(1.0, "fraction", 100.0, "%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_every_category_validates() {
        let categories = system_independent_categories().unwrap();
        assert_eq!(categories.len(), 18);
        for cat in &categories {
            assert!(cat.validate().is_ok(), "{} failed validation", cat.title());
            assert!(!cat.family().is_system_dependent());
        }
    }

    #[test]
    fn test_angle_degrees() {
        let cat = angle().unwrap();
        assert!((cat.convert_to_base_units("deg", 180.0) - PI).abs() < EPS);
        assert!((cat.convert_from_base_units("deg", PI / 2.0) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_work_time_relative_to_hours() {
        let cat = work_time().unwrap();
        assert_eq!(cat.convert_to_base_units("Days", 2.0), 48.0);
        assert_eq!(cat.convert_to_base_units("Wdays", 1.0), 120.0);
        assert_eq!(cat.convert_to_base_units("Wks", 1.0), 168.0);
        assert_eq!(cat.convert_from_base_units("Mins", 1.5), 90.0);
    }

    #[test]
    fn test_quantity_and_flow() {
        assert_eq!(quantity().unwrap().convert_to_base_units("gr", 1.0), 144.0);
        let flow = quantity_flow().unwrap();
        assert_eq!(flow.convert_to_base_units("dz/s", 1.0), 12.0);
        assert_eq!(flow.convert_from_base_units("ea/hr", 1.0), 3600.0);
        assert_eq!(flow.convert_from_base_units("ea/day", 1.0), 86400.0);
    }

    #[test]
    fn test_area_and_volume() {
        let area = area().unwrap();
        assert_eq!(area.convert_from_base_units("cm2", 1.0), 10000.0);
        assert!((area.convert_to_base_units("in2", 1.0) - 0.00064516).abs() < EPS);

        let volume = volume().unwrap();
        assert_eq!(volume.convert_from_base_units("L", 1.0), 1000.0);
        assert!((volume.convert_to_base_units("cm3", 1.0e6) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_speed() {
        let cat = speed().unwrap();
        assert!((cat.convert_from_base_units("km/h", 10.0) - 36.0).abs() < EPS);
        assert!((cat.convert_to_base_units("mph", 1.0) - 0.44704).abs() < EPS);
        assert!((cat.convert_to_base_units("kn", 1.0) - 0.514444444).abs() < 1e-8);
    }

    #[test]
    fn test_data_storage() {
        let cat = data_storage().unwrap();
        assert_eq!(cat.convert_to_base_units("GB", 2.0), 2000.0);
        assert_eq!(cat.convert_from_base_units("Bytes", 1.0), 1000.0);
    }

    #[test]
    fn test_electrical() {
        assert_eq!(voltage().unwrap().convert_to_base_units("kV", 1.5), 1500.0);
        assert_eq!(current().unwrap().convert_from_base_units("mA", 0.25), 250.0);
        assert!((power().unwrap().convert_to_base_units("hp", 1.0) - 745.7).abs() < 1e-3);
        assert_eq!(resistance().unwrap().convert_to_base_units("kohm", 4.7), 4700.0);
        assert!((capacitance().unwrap().convert_to_base_units("uF", 10.0) - 1e-5).abs() < 1e-15);
        assert_eq!(frequency().unwrap().convert_to_base_units("rpm", 120.0), 2.0);
        assert_eq!(percent().unwrap().convert_to_base_units("fraction", 0.25), 25.0);
    }
}
