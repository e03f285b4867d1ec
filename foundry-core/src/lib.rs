//! Foundry Core - Fundamental unit types
//!
//! This crate provides the leaf types shared by the unit engine:
//! - `UnitFamilyName`: The closed set of physical-quantity kinds
//! - `UnitIdentity`: One unit (symbol, title, family)
//! - `UnitError`: Errors with machine-readable codes and severity

mod family;
mod identity;
mod error;

pub use family::UnitFamilyName;
pub use identity::UnitIdentity;
pub use error::{UnitError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UnitFamilyName, UnitIdentity, UnitError, Severity};
    pub use crate::error::codes;
}
