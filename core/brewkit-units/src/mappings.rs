//! Standard unit name tables used by the interchange formats.
//!
//! The tables are built once on first use and are immutable afterwards.

use std::sync::LazyLock;

use crate::{PhysicalQuantity, Unit, UnitMapping};

fn build(entries: &[(&'static str, Unit)]) -> UnitMapping {
    match UnitMapping::new(entries.iter().copied()) {
        Ok(mapping) => mapping,
        Err(e) => panic!("invalid built-in unit mapping: {e}"),
    }
}

pub static MASS: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[
        ("kg", Unit::Kilograms),
        ("g", Unit::Grams),
        ("mg", Unit::Milligrams),
        ("lb", Unit::Pounds),
        ("oz", Unit::Ounces),
    ])
});

pub static VOLUME: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[
        ("l", Unit::Liters),
        ("ml", Unit::Milliliters),
        ("gal", Unit::UsGallons),
        ("qt", Unit::UsQuarts),
        ("cup", Unit::UsCups),
        ("floz", Unit::UsFluidOunces),
        ("tbsp", Unit::UsTablespoons),
        ("tsp", Unit::UsTeaspoons),
        ("igal", Unit::ImperialGallons),
        ("bbl", Unit::UsBeerBarrels),
    ])
});

pub static TEMPERATURE: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[
        ("C", Unit::Celsius),
        ("F", Unit::Fahrenheit),
        ("K", Unit::Kelvin),
    ])
});

pub static TIME: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[
        ("sec", Unit::Seconds),
        ("min", Unit::Minutes),
        ("hr", Unit::Hours),
        ("day", Unit::Days),
        ("week", Unit::Weeks),
    ])
});

pub static COLOR: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[
        ("SRM", Unit::Srm),
        ("EBC", Unit::Ebc),
        ("Lovi", Unit::Lovibond),
    ])
});

pub static DENSITY: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[("sg", Unit::SpecificGravity), ("plato", Unit::Plato)])
});

pub static DIASTATIC_POWER: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[("Lintner", Unit::Lintner), ("WK", Unit::WindischKolbach)])
});

pub static ACIDITY: LazyLock<UnitMapping> = LazyLock::new(|| build(&[("pH", Unit::Ph)]));

pub static BITTERNESS: LazyLock<UnitMapping> = LazyLock::new(|| build(&[("IBUs", Unit::Ibu)]));

pub static CARBONATION: LazyLock<UnitMapping> = LazyLock::new(|| {
    build(&[("vols", Unit::Volumes), ("g/l", Unit::GramsPerLiter)])
});

/// The standard mapping for `quantity`.
#[must_use]
pub fn for_quantity(quantity: PhysicalQuantity) -> &'static UnitMapping {
    match quantity {
        PhysicalQuantity::Mass => &MASS,
        PhysicalQuantity::Volume => &VOLUME,
        PhysicalQuantity::Temperature => &TEMPERATURE,
        PhysicalQuantity::Time => &TIME,
        PhysicalQuantity::Color => &COLOR,
        PhysicalQuantity::Density => &DENSITY,
        PhysicalQuantity::DiastaticPower => &DIASTATIC_POWER,
        PhysicalQuantity::Acidity => &ACIDITY,
        PhysicalQuantity::Bitterness => &BITTERNESS,
        PhysicalQuantity::Carbonation => &CARBONATION,
    }
}
