//! The closed unit registry.
//!
//! Units are plain enum variants, so a `Unit` value is a stable reference
//! into an immutable registry that needs no initialization.

use serde::{Deserialize, Serialize};

use crate::PhysicalQuantity;

/// Every unit brewkit can store or exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    // Mass
    Kilograms,
    Grams,
    Milligrams,
    Pounds,
    Ounces,

    // Volume
    Liters,
    Milliliters,
    UsGallons,
    UsQuarts,
    UsCups,
    UsFluidOunces,
    UsTablespoons,
    UsTeaspoons,
    ImperialGallons,
    UsBeerBarrels,

    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,

    // Time
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,

    // Color
    Srm,
    Ebc,
    Lovibond,

    // Density
    SpecificGravity,
    Plato,

    // Diastatic power
    Lintner,
    WindischKolbach,

    // Acidity
    Ph,

    // Bitterness
    Ibu,

    // Carbonation
    Volumes,
    GramsPerLiter,
}

/// `canonical = amount * factor + offset`
struct Linear {
    factor: f64,
    offset: f64,
}

const fn scale(factor: f64) -> Linear {
    Linear { factor, offset: 0.0 }
}

impl Unit {
    /// Every registered unit.
    pub const ALL: [Unit; 34] = [
        Self::Kilograms,
        Self::Grams,
        Self::Milligrams,
        Self::Pounds,
        Self::Ounces,
        Self::Liters,
        Self::Milliliters,
        Self::UsGallons,
        Self::UsQuarts,
        Self::UsCups,
        Self::UsFluidOunces,
        Self::UsTablespoons,
        Self::UsTeaspoons,
        Self::ImperialGallons,
        Self::UsBeerBarrels,
        Self::Celsius,
        Self::Fahrenheit,
        Self::Kelvin,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Srm,
        Self::Ebc,
        Self::Lovibond,
        Self::SpecificGravity,
        Self::Plato,
        Self::Lintner,
        Self::WindischKolbach,
        Self::Ph,
        Self::Ibu,
        Self::Volumes,
        Self::GramsPerLiter,
    ];

    /// The physical quantity this unit measures.
    #[must_use]
    pub const fn quantity(self) -> PhysicalQuantity {
        use PhysicalQuantity as Q;
        match self {
            Self::Kilograms | Self::Grams | Self::Milligrams | Self::Pounds | Self::Ounces => {
                Q::Mass
            }
            Self::Liters
            | Self::Milliliters
            | Self::UsGallons
            | Self::UsQuarts
            | Self::UsCups
            | Self::UsFluidOunces
            | Self::UsTablespoons
            | Self::UsTeaspoons
            | Self::ImperialGallons
            | Self::UsBeerBarrels => Q::Volume,
            Self::Celsius | Self::Fahrenheit | Self::Kelvin => Q::Temperature,
            Self::Seconds | Self::Minutes | Self::Hours | Self::Days | Self::Weeks => Q::Time,
            Self::Srm | Self::Ebc | Self::Lovibond => Q::Color,
            Self::SpecificGravity | Self::Plato => Q::Density,
            Self::Lintner | Self::WindischKolbach => Q::DiastaticPower,
            Self::Ph => Q::Acidity,
            Self::Ibu => Q::Bitterness,
            Self::Volumes | Self::GramsPerLiter => Q::Carbonation,
        }
    }

    /// Short display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Grams => "g",
            Self::Milligrams => "mg",
            Self::Pounds => "lb",
            Self::Ounces => "oz",
            Self::Liters => "L",
            Self::Milliliters => "mL",
            Self::UsGallons => "gal",
            Self::UsQuarts => "qt",
            Self::UsCups => "cup",
            Self::UsFluidOunces => "fl oz",
            Self::UsTablespoons => "tbsp",
            Self::UsTeaspoons => "tsp",
            Self::ImperialGallons => "imp gal",
            Self::UsBeerBarrels => "bbl",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Hours => "hr",
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Srm => "SRM",
            Self::Ebc => "EBC",
            Self::Lovibond => "°L",
            Self::SpecificGravity => "sg",
            Self::Plato => "°P",
            Self::Lintner => "°Lintner",
            Self::WindischKolbach => "°WK",
            Self::Ph => "pH",
            Self::Ibu => "IBU",
            Self::Volumes => "vols",
            Self::GramsPerLiter => "g/L",
        }
    }

    /// Whether this unit is the canonical unit of its quantity.
    #[must_use]
    pub fn is_canonical(self) -> bool {
        self.quantity().canonical_unit() == self
    }

    fn linear(self) -> Option<Linear> {
        let linear = match self {
            Self::Kilograms => scale(1.0),
            Self::Grams => scale(1.0e-3),
            Self::Milligrams => scale(1.0e-6),
            Self::Pounds => scale(0.453_592_37),
            Self::Ounces => scale(0.028_349_523_125),
            Self::Liters => scale(1.0),
            Self::Milliliters => scale(1.0e-3),
            Self::UsGallons => scale(3.785_411_784),
            Self::UsQuarts => scale(0.946_352_946),
            Self::UsCups => scale(0.236_588_236_5),
            Self::UsFluidOunces => scale(0.029_573_529_562_5),
            Self::UsTablespoons => scale(0.014_786_764_781_25),
            Self::UsTeaspoons => scale(0.004_928_921_593_75),
            Self::ImperialGallons => scale(4.546_09),
            Self::UsBeerBarrels => scale(117.347_765_304),
            Self::Celsius => scale(1.0),
            Self::Fahrenheit => Linear {
                factor: 5.0 / 9.0,
                offset: -32.0 * 5.0 / 9.0,
            },
            Self::Kelvin => Linear {
                factor: 1.0,
                offset: -273.15,
            },
            Self::Seconds => scale(1.0 / 60.0),
            Self::Minutes => scale(1.0),
            Self::Hours => scale(60.0),
            Self::Days => scale(1_440.0),
            Self::Weeks => scale(10_080.0),
            Self::Srm => scale(1.0),
            Self::Ebc => scale(0.508),
            Self::Lovibond => Linear {
                factor: 1.3546,
                offset: -0.76,
            },
            Self::SpecificGravity => scale(1.0),
            Self::Plato => return None,
            Self::Lintner => scale(1.0),
            Self::WindischKolbach => Linear {
                factor: 1.0 / 3.5,
                offset: 16.0 / 3.5,
            },
            Self::Ph => scale(1.0),
            Self::Ibu => scale(1.0),
            Self::Volumes => scale(1.0),
            Self::GramsPerLiter => scale(1.0 / 1.96),
        };
        Some(linear)
    }

    /// Converts an amount in this unit to the quantity's canonical unit.
    #[must_use]
    pub fn to_canonical(self, amount: f64) -> f64 {
        match self.linear() {
            Some(l) => amount * l.factor + l.offset,
            // Plato to specific gravity.
            None => 1.0 + amount / (258.6 - (amount / 258.2) * 227.1),
        }
    }

    /// Converts an amount in the quantity's canonical unit to this unit.
    #[must_use]
    pub fn from_canonical(self, amount: f64) -> f64 {
        match self.linear() {
            Some(l) => (amount - l.offset) / l.factor,
            // Specific gravity to Plato.
            None => {
                -616.868 + 1_111.14 * amount - 630.272 * amount.powi(2)
                    + 135.997 * amount.powi(3)
            }
        }
    }
}
