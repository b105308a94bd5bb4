use std::sync::LazyLock;

use brewkit_schema::{EntityId, ExportStatistics, Record, RecordSchema};
use brewkit_units::mappings;

use crate::{MASH, MashStep, non_empty, totals};

/// A mash profile: grain and tun conditions plus ordered steps.
///
/// Steps are owned exclusively by the mash and kept in brewing order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mash {
    pub id: EntityId,
    pub name: String,
    pub grain_temp_c: Option<f64>,
    pub tun_temp_c: Option<f64>,
    pub sparge_temp_c: Option<f64>,
    pub ph: Option<f64>,
    pub tun_weight_kg: Option<f64>,
    pub notes: String,
    pub steps: Vec<MashStep>,
}

impl Mash {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[MashStep] {
        &self.steps
    }

    /// Appends a step after the existing ones.
    pub fn add_step(&mut self, step: MashStep) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// Inserts a step at `index`, clamped to the end.
    pub fn insert_step(&mut self, index: usize, step: MashStep) {
        let index = index.min(self.steps.len());
        self.steps.insert(index, step);
    }

    /// Removes and returns the step at `index`.
    pub fn remove_step(&mut self, index: usize) -> Option<MashStep> {
        (index < self.steps.len()).then(|| self.steps.remove(index))
    }

    /// Swaps two steps; returns false when either index is out of range.
    pub fn swap_steps(&mut self, a: usize, b: usize) -> bool {
        if a >= self.steps.len() || b >= self.steps.len() {
            return false;
        }
        self.steps.swap(a, b);
        true
    }

    /// Sum of step and ramp times, in minutes.
    #[must_use]
    pub fn total_time_min(&self) -> f64 {
        self.steps
            .iter()
            .map(|s| s.step_time_min + s.ramp_time_min.unwrap_or(0.0))
            .sum()
    }

    /// Water added by infusion steps, in liters.
    #[must_use]
    pub fn total_infusion_l(&self) -> f64 {
        self.steps.iter().filter_map(|s| s.infuse_amount_l).sum()
    }
}

impl Record for Mash {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: LazyLock<RecordSchema<Mash>> = LazyLock::new(|| {
            RecordSchema::<Mash>::builder(MASH)
                .section("mashes")
                .identity("id", "id", |m| m.id, |m, v| m.id = v)
                .text("name", "name", |m| Some(m.name.clone()), |m, v| m.name = v)
                .measured(
                    "grain_temp_c",
                    "grain_temp",
                    &mappings::TEMPERATURE,
                    |m| m.grain_temp_c,
                    |m, v| m.grain_temp_c = Some(v),
                )
                .measured(
                    "tun_temp_c",
                    "tun_temp",
                    &mappings::TEMPERATURE,
                    |m| m.tun_temp_c,
                    |m, v| m.tun_temp_c = Some(v),
                )
                .measured(
                    "sparge_temp_c",
                    "sparge_temp",
                    &mappings::TEMPERATURE,
                    |m| m.sparge_temp_c,
                    |m, v| m.sparge_temp_c = Some(v),
                )
                .measured("ph", "ph", &mappings::ACIDITY, |m| m.ph, |m, v| m.ph = Some(v))
                .measured(
                    "tun_weight_kg",
                    "tun_weight",
                    &mappings::MASS,
                    |m| m.tun_weight_kg,
                    |m, v| m.tun_weight_kg = Some(v),
                )
                .text("notes", "notes", |m| non_empty(&m.notes), |m, v| m.notes = v)
                .records::<MashStep>(
                    "steps",
                    "mash_steps",
                    |m| m.steps.as_slice(),
                    |m| &mut m.steps,
                )
                .build()
        });
        &SCHEMA
    }

    fn accumulate(&self, statistics: &mut ExportStatistics) {
        statistics.add_total(totals::MASH_MINUTES, self.total_time_min());
    }
}
