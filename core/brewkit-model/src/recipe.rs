use std::sync::LazyLock;

use brewkit_schema::{Choice, EntityId, ExportStatistics, Record, RecordSchema};
use brewkit_units::mappings;
use serde::{Deserialize, Serialize};

use crate::{IngredientAddition, IngredientKind, Mash, RECIPE, non_empty, totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    #[default]
    AllGrain,
    PartialMash,
    Extract,
}

impl Choice for RecipeType {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("all grain", Self::AllGrain),
        ("partial mash", Self::PartialMash),
        ("extract", Self::Extract),
    ];
}

/// A recipe: batch metadata, its mash and its ingredient additions.
///
/// Recipes aggregate: a mash written as part of a recipe is not counted in
/// the export statistics, while the same mash written on its own is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub id: EntityId,
    pub name: String,
    pub recipe_type: RecipeType,
    pub brewer: String,
    pub batch_size_l: f64,
    pub boil_size_l: Option<f64>,
    pub boil_time_min: Option<f64>,
    pub efficiency_pct: Option<f64>,
    pub og: Option<f64>,
    pub fg: Option<f64>,
    pub notes: String,
    mash: Option<Mash>,
    pub additions: Vec<IngredientAddition>,
}

impl Recipe {
    #[must_use]
    pub fn new(name: impl Into<String>, batch_size_l: f64) -> Self {
        Self {
            name: name.into(),
            batch_size_l,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mash(&self) -> Option<&Mash> {
        self.mash.as_ref()
    }

    pub fn mash_mut(&mut self) -> Option<&mut Mash> {
        self.mash.as_mut()
    }

    /// Attaches `mash`, returning the one it replaces.
    pub fn set_mash(&mut self, mash: Mash) -> Option<Mash> {
        self.mash.replace(mash)
    }

    /// Detaches and returns the mash.
    pub fn take_mash(&mut self) -> Option<Mash> {
        self.mash.take()
    }

    pub fn add(&mut self, addition: IngredientAddition) -> &mut Self {
        self.additions.push(addition);
        self
    }

    /// Additions of one ingredient kind, in recipe order.
    pub fn additions_of(&self, kind: IngredientKind) -> impl Iterator<Item = &IngredientAddition> {
        self.additions.iter().filter(move |a| a.ingredient == kind)
    }
}

impl Record for Recipe {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: LazyLock<RecordSchema<Recipe>> = LazyLock::new(|| {
            RecordSchema::<Recipe>::builder(RECIPE)
                .section("recipes")
                .aggregating()
                .identity("id", "id", |r| r.id, |r, v| r.id = v)
                .text("name", "name", |r| Some(r.name.clone()), |r, v| r.name = v)
                .choice::<RecipeType>("recipe_type", "type", |r| r.recipe_type, |r, v| r.recipe_type = v)
                .text("brewer", "brewer", |r| non_empty(&r.brewer), |r, v| r.brewer = v)
                .measured(
                    "batch_size_l",
                    "batch_size",
                    &mappings::VOLUME,
                    |r| Some(r.batch_size_l),
                    |r, v| r.batch_size_l = v,
                )
                .measured(
                    "boil_size_l",
                    "boil_size",
                    &mappings::VOLUME,
                    |r| r.boil_size_l,
                    |r, v| r.boil_size_l = Some(v),
                )
                .measured(
                    "boil_time_min",
                    "boil_time",
                    &mappings::TIME,
                    |r| r.boil_time_min,
                    |r, v| r.boil_time_min = Some(v),
                )
                .number(
                    "efficiency_pct",
                    "efficiency",
                    |r| r.efficiency_pct,
                    |r, v| r.efficiency_pct = Some(v),
                )
                .measured("og", "og", &mappings::DENSITY, |r| r.og, |r, v| r.og = Some(v))
                .measured("fg", "fg", &mappings::DENSITY, |r| r.fg, |r, v| r.fg = Some(v))
                .text("notes", "notes", |r| non_empty(&r.notes), |r, v| r.notes = v)
                .record::<Mash>("mash", "mash", |r| r.mash.as_ref(), |r, v| r.mash = v)
                .records::<IngredientAddition>(
                    "additions",
                    "ingredients",
                    |r| r.additions.as_slice(),
                    |r| &mut r.additions,
                )
                .build()
        });
        &SCHEMA
    }

    fn accumulate(&self, statistics: &mut ExportStatistics) {
        statistics.add_total(totals::BATCH_LITERS, self.batch_size_l);
    }
}
