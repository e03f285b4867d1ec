//! Validation report for applied unit systems

use serde::Serialize;
use foundry_core::{UnitError, UnitFamilyName};
use foundry_units::{UnitSystem, UnitSystemType};
use tracing::{error, info};

/// Expected (length, mass, force, temperature) base units per system
pub const EXPECTED_BASE_UNITS: [(UnitSystemType, [&str; 4]); 5] = [
    (UnitSystemType::Ips, ["in", "lb", "lbf", "F"]),
    (UnitSystemType::Fps, ["ft", "lb", "lbf", "F"]),
    (UnitSystemType::Mks, ["m", "kg", "N", "C"]),
    (UnitSystemType::Cgs, ["cm", "g", "dyne", "C"]),
    (UnitSystemType::MmNs, ["mm", "kg", "N", "C"]),
];

const CHECKED_FAMILIES: [UnitFamilyName; 4] = [
    UnitFamilyName::Length,
    UnitFamilyName::Mass,
    UnitFamilyName::Force,
    UnitFamilyName::Temperature,
];

/// Base unit of one family, compared against the expected table
#[derive(Debug, Clone, Serialize)]
pub struct FamilyCheck {
    pub family: UnitFamilyName,
    pub base: Option<String>,
    pub title: Option<String>,
    pub units: usize,
    pub expected: Option<String>,
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemReport {
    pub system: UnitSystemType,
    pub title: &'static str,
    pub families: Vec<FamilyCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SystemReport {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.families.iter().all(|f| f.ok)
    }
}

/// One reference conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionCheck {
    pub from: String,
    pub to: String,
    pub value: f64,
    pub expected: f64,
    pub actual: f64,
    pub tolerance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub systems: Vec<SystemReport>,
    pub conversions: Vec<ConversionCheck>,
    pub passed: bool,
}

impl Report {
    pub fn to_json(&self) -> Result<String, UnitError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| UnitError::Config(format!("cannot serialize report: {}", e)))
    }
}

// ========== Checks ==========

fn expected_base(system: UnitSystemType, family: UnitFamilyName) -> Option<&'static str> {
    let (_, bases) = EXPECTED_BASE_UNITS.iter().find(|(s, _)| *s == system)?;
    CHECKED_FAMILIES
        .iter()
        .position(|f| *f == family)
        .map(|i| bases[i])
}

/// Apply `system` and compare its base units against the expected table
pub fn check_system(system: UnitSystemType, pixels_per_meter: Option<f64>) -> SystemReport {
    let mut report = SystemReport {
        system,
        title: system.title(),
        families: Vec::new(),
        error: None,
    };

    let mut units = match UnitSystem::with_system(system) {
        Ok(units) => units,
        Err(err) => {
            error!(system = %system, "apply failed: {}", err);
            report.error = Some(err.to_string());
            return report;
        }
    };

    if let Some(ppm) = pixels_per_meter {
        if let Err(err) = units.set_pixels_per_meter(ppm) {
            error!(system = %system, "pixel scale rejected: {}", err);
            report.error = Some(err.to_string());
        }
    }

    for family in CHECKED_FAMILIES {
        let category = units.category(family);
        let base = category.map(|c| c.base_units().name().to_string());
        let expected = expected_base(system, family).map(str::to_string);
        let ok = base.is_some() && base == expected;
        report.families.push(FamilyCheck {
            family,
            title: category.map(|c| c.base_units().title().to_string()),
            units: category.map_or(0, |c| c.units().len()),
            base,
            expected,
            ok,
        });
    }

    info!(system = %system, passed = report.passed(), "checked base units");
    report
}

fn check_conversion(units: &UnitSystem, from: &str, to: &str, value: f64, expected: f64, tolerance: f64) -> ConversionCheck {
    let result = units
        .length()
        .ok_or(UnitError::MissingCategory(UnitFamilyName::Length))
        .and_then(|length| length.try_convert(from, to, value));

    let (actual, error) = match result {
        Ok(actual) => (actual, None),
        Err(err) => (value, Some(err.to_string())),
    };

    ConversionCheck {
        from: from.to_string(),
        to: to.to_string(),
        value,
        expected,
        actual,
        tolerance,
        ok: error.is_none() && (actual - expected).abs() <= tolerance,
        error,
    }
}

/// Metric reference conversions under MKS
pub fn reference_conversions() -> Vec<ConversionCheck> {
    let units = match UnitSystem::with_system(UnitSystemType::Mks) {
        Ok(units) => units,
        Err(err) => {
            error!("cannot apply MKS for reference conversions: {}", err);
            UnitSystem::new()
        }
    };

    vec![
        check_conversion(&units, "m", "mm", 1.0, 1000.0, 1e-9),
        check_conversion(&units, "m", "in", 1.0, 39.3701, 1e-4),
        check_conversion(&units, "km", "m", 1.0, 1000.0, 1e-9),
        check_conversion(&units, "ft", "m", 1.0, 0.3048, 1e-9),
    ]
}

/// Check every system in `systems` and the reference conversions
pub fn run(systems: &[UnitSystemType], pixels_per_meter: Option<f64>) -> Report {
    let systems: Vec<SystemReport> = systems
        .iter()
        .map(|&system| check_system(system, pixels_per_meter))
        .collect();
    let conversions = reference_conversions();
    let passed = systems.iter().all(|s| s.passed()) && conversions.iter().all(|c| c.ok);

    Report { systems, conversions, passed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_base_lookup() {
        assert_eq!(expected_base(UnitSystemType::Cgs, UnitFamilyName::Force), Some("dyne"));
        assert_eq!(expected_base(UnitSystemType::Ips, UnitFamilyName::Temperature), Some("F"));
        assert_eq!(expected_base(UnitSystemType::Mks, UnitFamilyName::Area), None);
    }

    #[test]
    fn test_every_system_passes() {
        for system in UnitSystemType::ALL {
            let report = check_system(system, None);
            assert!(report.passed(), "{:?}", report);
            assert_eq!(report.families.len(), 4);
            assert!(report.families.iter().all(|f| f.units > 1));
        }
    }

    #[test]
    fn test_mks_length_summary() {
        let report = check_system(UnitSystemType::Mks, None);
        let length = &report.families[0];
        assert_eq!(length.family, UnitFamilyName::Length);
        assert_eq!(length.base.as_deref(), Some("m"));
        assert_eq!(length.title.as_deref(), Some("meters"));
    }

    #[test]
    fn test_reference_conversions_pass() {
        let checks = reference_conversions();
        assert!(checks.iter().all(|c| c.ok), "{:?}", checks);
        assert!((checks[1].actual - 39.3701).abs() < 1e-4);
    }

    #[test]
    fn test_missing_rule_is_reported() {
        let units = UnitSystem::with_system(UnitSystemType::Mks).unwrap();
        let check = check_conversion(&units, "m", "furlong", 1.0, 0.005, 1e-6);
        assert!(!check.ok);
        assert!(check.error.unwrap().contains("m|furlong"));
    }

    #[test]
    fn test_bad_pixel_scale_fails_the_system() {
        let report = check_system(UnitSystemType::Mks, Some(-5.0));
        assert!(!report.passed());
        assert!(report.error.is_some());
    }

    #[test]
    fn test_run_and_serialize() {
        let report = run(&[UnitSystemType::Fps], Some(1000.0));
        assert!(report.passed);
        assert_eq!(report.systems.len(), 1);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"system\": \"FPS\""));
        assert!(json.contains("\"passed\": true"));
    }
}
