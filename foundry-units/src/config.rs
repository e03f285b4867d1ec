//! Unit system configuration
//!
//! Read from JSON text or from the environment:
//! - `FOUNDRY_UNIT_SYSTEM`: IPS, FPS, MKS, CGS or mmNs (default MKS)
//! - `FOUNDRY_PIXELS_PER_METER`: optional positive pixel scale

use std::env;
use serde::{Serialize, Deserialize};
use foundry_core::UnitError;
use crate::UnitSystemType;

pub const ENV_UNIT_SYSTEM: &str = "FOUNDRY_UNIT_SYSTEM";
pub const ENV_PIXELS_PER_METER: &str = "FOUNDRY_PIXELS_PER_METER";

/// Which unit system to apply and how to scale pixels
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSystemConfig {
    pub system: UnitSystemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixels_per_meter: Option<f64>,
}

impl UnitSystemConfig {
    pub fn new(system: UnitSystemType) -> Self {
        Self { system, pixels_per_meter: None }
    }

    pub fn with_pixels_per_meter(mut self, pixels_per_meter: f64) -> Self {
        self.pixels_per_meter = Some(pixels_per_meter);
        self
    }

    /// Parse a JSON document such as `{"system": "IPS", "pixels_per_meter": 96}`
    pub fn from_json(text: &str) -> Result<Self, UnitError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| UnitError::Config(format!("invalid unit system JSON: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, UnitError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| UnitError::Config(format!("cannot serialize unit system config: {}", e)))
    }

    /// Read the process environment
    pub fn from_env() -> Result<Self, UnitError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UnitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(system) = lookup(ENV_UNIT_SYSTEM) {
            config.system = system.parse()?;
        }

        if let Some(raw) = lookup(ENV_PIXELS_PER_METER) {
            let value: f64 = raw.trim().parse().map_err(|_| {
                UnitError::Config(format!("{} is not a number: '{}'", ENV_PIXELS_PER_METER, raw))
            })?;
            config.pixels_per_meter = Some(value);
        }

        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), UnitError> {
        match self.pixels_per_meter {
            Some(ppm) if !ppm.is_finite() || ppm <= 0.0 => Err(UnitError::Config(format!(
                "pixels_per_meter must be a positive number, got {}",
                ppm
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_mks() {
        let config = UnitSystemConfig::default();
        assert_eq!(config.system, UnitSystemType::Mks);
        assert_eq!(config.pixels_per_meter, None);
    }

    #[test]
    fn test_from_json() {
        let config = UnitSystemConfig::from_json(r#"{"system": "mmNs", "pixels_per_meter": 250.0}"#).unwrap();
        assert_eq!(config, UnitSystemConfig::new(UnitSystemType::MmNs).with_pixels_per_meter(250.0));

        let config = UnitSystemConfig::from_json("{}").unwrap();
        assert_eq!(config.system, UnitSystemType::Mks);
    }

    #[test]
    fn test_from_json_rejects_unknown_system() {
        let err = UnitSystemConfig::from_json(r#"{"system": "SI"}"#).unwrap_err();
        assert!(matches!(err, UnitError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_bad_pixel_scale() {
        let err = UnitSystemConfig::from_json(r#"{"system": "IPS", "pixels_per_meter": -1}"#).unwrap_err();
        assert!(matches!(err, UnitError::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = UnitSystemConfig::new(UnitSystemType::Fps);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"FPS\""));
        assert!(!json.contains("pixels_per_meter"));
        assert_eq!(UnitSystemConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_lookup() {
        let config = UnitSystemConfig::from_lookup(lookup(&[
            (ENV_UNIT_SYSTEM, "ips"),
            (ENV_PIXELS_PER_METER, " 3779.5 "),
        ]))
        .unwrap();
        assert_eq!(config.system, UnitSystemType::Ips);
        assert_eq!(config.pixels_per_meter, Some(3779.5));

        let config = UnitSystemConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, UnitSystemConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = UnitSystemConfig::from_lookup(lookup(&[(ENV_UNIT_SYSTEM, "imperial")])).unwrap_err();
        assert_eq!(err, UnitError::UnknownSystem("imperial".to_string()));

        let err = UnitSystemConfig::from_lookup(lookup(&[(ENV_PIXELS_PER_METER, "lots")])).unwrap_err();
        assert!(matches!(err, UnitError::Config(_)));
    }
}
