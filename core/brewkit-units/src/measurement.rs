use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{PhysicalQuantity, Unit, UnitError, UnitResult};

/// An amount expressed in a specific unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub amount: f64,
    pub unit: Unit,
}

impl Measurement {
    #[must_use]
    pub const fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    /// A measurement already in the canonical unit of `quantity`.
    #[must_use]
    pub const fn canonical(amount: f64, quantity: PhysicalQuantity) -> Self {
        Self::new(amount, quantity.canonical_unit())
    }

    #[must_use]
    pub const fn quantity(&self) -> PhysicalQuantity {
        self.unit.quantity()
    }

    /// The amount expressed in the quantity's canonical unit.
    #[must_use]
    pub fn canonical_amount(&self) -> f64 {
        self.unit.to_canonical(self.amount)
    }

    /// Re-expresses this measurement in `unit`.
    pub fn convert_to(&self, unit: Unit) -> UnitResult<Self> {
        if unit.quantity() != self.quantity() {
            return Err(UnitError::QuantityMismatch {
                from: self.unit,
                to: unit,
            });
        }
        if unit == self.unit {
            return Ok(*self);
        }
        Ok(Self::new(unit.from_canonical(self.canonical_amount()), unit))
    }

    /// Re-expresses this measurement in the canonical unit.
    #[must_use]
    pub fn to_canonical(&self) -> Self {
        Self::new(self.canonical_amount(), self.quantity().canonical_unit())
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.amount, self.unit.symbol()),
            None => write!(f, "{} {}", self.amount, self.unit.symbol()),
        }
    }
}
