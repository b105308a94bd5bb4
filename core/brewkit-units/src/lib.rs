//! Canonical units and unit name mappings for brewkit.
//!
//! Every measured property in the brewkit model is stored in one canonical
//! unit per physical quantity (kilograms, liters, degrees Celsius, minutes,
//! SRM, specific gravity, ...). Interchange formats name their units with
//! short strings such as `"lb"` or `"gal"`; a [`UnitMapping`] is the
//! bijection between those names and the [`Unit`] registry for one
//! [`PhysicalQuantity`].
//!
//! - [`Unit`] - closed registry of every unit brewkit understands
//! - [`PhysicalQuantity`] - the dimension a unit measures
//! - [`UnitMapping`] - external name ↔ unit table, single quantity
//! - [`Measurement`] - an amount tagged with its unit
//! - [`mappings`] - the standard, process-wide mapping tables

mod error;
mod mapping;
mod measurement;
mod quantity;
mod unit;

pub mod mappings;

pub use error::{UnitError, UnitResult};
pub use mapping::UnitMapping;
pub use measurement::Measurement;
pub use quantity::PhysicalQuantity;
pub use unit::Unit;
