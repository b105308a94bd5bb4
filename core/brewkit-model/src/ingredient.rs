use std::sync::LazyLock;

use brewkit_schema::{Choice, EntityId, Record, RecordSchema};
use brewkit_units::mappings;
use serde::{Deserialize, Serialize};

use crate::{ADDITION, non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientKind {
    #[default]
    Fermentable,
    Hop,
    Misc,
    Yeast,
    Water,
}

impl Choice for IngredientKind {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("fermentable", Self::Fermentable),
        ("hop", Self::Hop),
        ("misc", Self::Misc),
        ("yeast", Self::Yeast),
        ("water", Self::Water),
    ];
}

/// When in the process an ingredient goes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionStage {
    Mash,
    #[default]
    Boil,
    Whirlpool,
    Fermentation,
    Packaging,
}

impl Choice for AdditionStage {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("mash", Self::Mash),
        ("boil", Self::Boil),
        ("whirlpool", Self::Whirlpool),
        ("fermentation", Self::Fermentation),
        ("packaging", Self::Packaging),
    ];
}

/// An ingredient used in a recipe, with its amount and timing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientAddition {
    pub id: EntityId,
    pub name: String,
    pub ingredient: IngredientKind,
    /// Kilograms.
    pub amount_kg: f64,
    pub stage: AdditionStage,
    /// Minutes before the end of the stage.
    pub time_min: Option<f64>,
    /// Hops only.
    pub alpha_acid_pct: Option<f64>,
    /// Fermentables only, SRM.
    pub color_srm: Option<f64>,
    pub notes: String,
}

impl IngredientAddition {
    #[must_use]
    pub fn new(name: impl Into<String>, ingredient: IngredientKind, amount_kg: f64, stage: AdditionStage) -> Self {
        Self {
            name: name.into(),
            ingredient,
            amount_kg,
            stage,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn at(mut self, time_min: f64) -> Self {
        self.time_min = Some(time_min);
        self
    }
}

impl Record for IngredientAddition {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: LazyLock<RecordSchema<IngredientAddition>> = LazyLock::new(|| {
            RecordSchema::<IngredientAddition>::builder(ADDITION)
                .section("additions")
                .identity("id", "id", |a| a.id, |a, v| a.id = v)
                .text("name", "name", |a| Some(a.name.clone()), |a, v| a.name = v)
                .choice::<IngredientKind>("ingredient", "ingredient", |a| a.ingredient, |a, v| a.ingredient = v)
                .measured(
                    "amount_kg",
                    "amount",
                    &mappings::MASS,
                    |a| Some(a.amount_kg),
                    |a, v| a.amount_kg = v,
                )
                .choice::<AdditionStage>("stage", "use", |a| a.stage, |a, v| a.stage = v)
                .measured(
                    "time_min",
                    "time",
                    &mappings::TIME,
                    |a| a.time_min,
                    |a, v| a.time_min = Some(v),
                )
                .number(
                    "alpha_acid_pct",
                    "alpha",
                    |a| a.alpha_acid_pct,
                    |a, v| a.alpha_acid_pct = Some(v),
                )
                .measured(
                    "color_srm",
                    "color",
                    &mappings::COLOR,
                    |a| a.color_srm,
                    |a, v| a.color_srm = Some(v),
                )
                .text("notes", "notes", |a| non_empty(&a.notes), |a, v| a.notes = v)
                .build()
        });
        &SCHEMA
    }
}
