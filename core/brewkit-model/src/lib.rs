//! Brewing entities for brewkit.
//!
//! Defines the records exchanged by the interchange formats:
//! - [`Recipe`] - batch metadata, an optional [`Mash`] and ordered
//!   [`IngredientAddition`]s
//! - [`Mash`] - a mash profile owning ordered [`MashStep`]s
//! - [`MashStep`] - one rest, infusion or sparge
//!
//! Each type implements [`brewkit_schema::Record`] with a static field
//! table. Measured properties are stored in canonical units (kilograms,
//! liters, degrees Celsius, minutes, SRM, specific gravity).

mod ingredient;
mod kinds;
mod mash;
mod recipe;
mod step;

pub use ingredient::{AdditionStage, IngredientAddition, IngredientKind};
pub use kinds::{ADDITION, MASH, MASH_STEP, RECIPE};
pub use mash::Mash;
pub use recipe::{Recipe, RecipeType};
pub use step::{MashStep, MashStepType};

/// Names of the running totals entities add to export statistics.
pub mod totals {
    /// Sum of step times of counted mashes, in minutes.
    pub const MASH_MINUTES: &str = "mash_minutes";
    /// Sum of batch sizes of counted recipes, in liters.
    pub const BATCH_LITERS: &str = "batch_liters";
}

/// Optional text fields are omitted from exports when blank.
pub(crate) fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
