//! Errors raised by the unit engine
//!
//! A missing conversion is the only runtime condition: the engine logs it and
//! keeps going with the unconverted value. Everything else is a configuration
//! problem that rejects the unit system being built.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::UnitFamilyName;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const MISSING_CONVERSION: &str = "MISSING_CONVERSION";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const UNSUPPORTED_BASE_UNIT: &str = "UNSUPPORTED_BASE_UNIT";
    pub const UNPAIRED_FORMULA: &str = "UNPAIRED_FORMULA";
    pub const UNREACHABLE_UNIT: &str = "UNREACHABLE_UNIT";
    pub const UNKNOWN_SYSTEM: &str = "UNKNOWN_SYSTEM";
    pub const MISSING_CATEGORY: &str = "MISSING_CATEGORY";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Computation continued with a fallback result
    Warning,
    /// The requested operation failed
    Error,
    /// The unit system configuration is rejected
    Fatal,
}

/// Error type for unit registration, conversion and system configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("No conversion found for {key}: from [{from}] to [{to}]")]
    MissingConversion {
        key: String,
        from: String,
        to: String,
    },

    #[error("Unit '{symbol}' is already registered in category {category}")]
    DuplicateUnit { category: String, symbol: String },

    #[error("Unsupported base unit '{unit}' for {builder}. Supported units: {supported}")]
    UnsupportedBaseUnit {
        builder: &'static str,
        unit: String,
        supported: &'static str,
    },

    #[error("Formula conversion {from}|{to} in category {category} has no reverse {to}|{from}")]
    UnpairedFormula {
        category: String,
        from: String,
        to: String,
    },

    #[error("Unit '{symbol}' in category {category} has no direct conversion to and from base unit '{base}'")]
    UnreachableUnit {
        category: String,
        symbol: String,
        base: String,
    },

    #[error("Unknown unit system '{0}'. Expected one of: IPS, FPS, MKS, CGS, mmNs")]
    UnknownSystem(String),

    #[error("No {0} category is established; apply a unit system first")]
    MissingCategory(UnitFamilyName),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl UnitError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::MissingConversion { .. } => codes::MISSING_CONVERSION,
            UnitError::DuplicateUnit { .. } => codes::DUPLICATE_UNIT,
            UnitError::UnsupportedBaseUnit { .. } => codes::UNSUPPORTED_BASE_UNIT,
            UnitError::UnpairedFormula { .. } => codes::UNPAIRED_FORMULA,
            UnitError::UnreachableUnit { .. } => codes::UNREACHABLE_UNIT,
            UnitError::UnknownSystem(_) => codes::UNKNOWN_SYSTEM,
            UnitError::MissingCategory(_) => codes::MISSING_CATEGORY,
            UnitError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            UnitError::MissingConversion { .. } => Severity::Warning,
            UnitError::MissingCategory(_) => Severity::Error,
            _ => Severity::Fatal,
        }
    }

    // ========== Common Error Constructors ==========

    pub fn missing_conversion(from: &str, to: &str) -> Self {
        UnitError::MissingConversion {
            key: format!("{}|{}", from, to),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn unsupported_base(builder: &'static str, unit: &str, supported: &'static str) -> Self {
        UnitError::UnsupportedBaseUnit {
            builder,
            unit: unit.to_string(),
            supported,
        }
    }
}
