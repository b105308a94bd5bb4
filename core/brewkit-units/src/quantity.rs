use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Unit, UnitError};

/// A dimension grouping mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalQuantity {
    Mass,
    Volume,
    Temperature,
    Time,
    Color,
    Density,
    DiastaticPower,
    Acidity,
    Bitterness,
    Carbonation,
}

impl PhysicalQuantity {
    /// All quantities, in declaration order.
    pub const ALL: [PhysicalQuantity; 10] = [
        Self::Mass,
        Self::Volume,
        Self::Temperature,
        Self::Time,
        Self::Color,
        Self::Density,
        Self::DiastaticPower,
        Self::Acidity,
        Self::Bitterness,
        Self::Carbonation,
    ];

    /// The unit every stored value of this quantity is expressed in.
    #[must_use]
    pub const fn canonical_unit(self) -> Unit {
        match self {
            Self::Mass => Unit::Kilograms,
            Self::Volume => Unit::Liters,
            Self::Temperature => Unit::Celsius,
            Self::Time => Unit::Minutes,
            Self::Color => Unit::Srm,
            Self::Density => Unit::SpecificGravity,
            Self::DiastaticPower => Unit::Lintner,
            Self::Acidity => Unit::Ph,
            Self::Bitterness => Unit::Ibu,
            Self::Carbonation => Unit::Volumes,
        }
    }

    /// Stable snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Volume => "volume",
            Self::Temperature => "temperature",
            Self::Time => "time",
            Self::Color => "color",
            Self::Density => "density",
            Self::DiastaticPower => "diastatic_power",
            Self::Acidity => "acidity",
            Self::Bitterness => "bitterness",
            Self::Carbonation => "carbonation",
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhysicalQuantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|q| q.name() == wanted)
            .ok_or_else(|| UnitError::UnknownQuantity(s.to_string()))
    }
}
