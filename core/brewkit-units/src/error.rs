//! Error types for unit lookups and conversions.

use thiserror::Error;

use crate::{PhysicalQuantity, Unit};

/// Result type for unit operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors that can occur when building or querying unit mappings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// The unit is not registered in the queried mapping.
    ///
    /// Mappings are fixed at build time, so this is a logic error in the
    /// caller rather than bad input data.
    #[error("unit {unit:?} is not registered in the {quantity} mapping")]
    NotFound {
        unit: Unit,
        quantity: PhysicalQuantity,
    },

    /// An external unit name has no entry in the mapping.
    #[error("unknown {quantity} unit name: {name:?}")]
    UnknownName {
        name: String,
        quantity: PhysicalQuantity,
    },

    /// A conversion was requested between units of different quantities.
    #[error("cannot convert {from:?} to {to:?}: different physical quantities")]
    QuantityMismatch { from: Unit, to: Unit },

    /// A mapping was built from units of more than one quantity.
    #[error("mapping mixes {expected} and {found} units")]
    MixedQuantities {
        expected: PhysicalQuantity,
        found: PhysicalQuantity,
    },

    /// The same external name was registered twice.
    #[error("duplicate unit name in mapping: {0:?}")]
    DuplicateName(String),

    /// The same unit was registered under two names.
    #[error("unit {0:?} registered under more than one name")]
    DuplicateUnit(Unit),

    /// A mapping must hold at least one entry.
    #[error("unit mapping has no entries")]
    Empty,

    /// A physical quantity name could not be parsed.
    #[error("unknown physical quantity: {0:?}")]
    UnknownQuantity(String),
}
