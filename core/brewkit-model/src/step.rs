use std::sync::LazyLock;

use brewkit_schema::{Choice, EntityId, Record, RecordSchema};
use brewkit_units::mappings;
use serde::{Deserialize, Serialize};

use crate::{MASH_STEP, non_empty};

/// How a mash step reaches its temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MashStepType {
    /// Hot water added to the mash.
    #[default]
    Infusion,
    /// Direct heat applied to the tun.
    Temperature,
    /// Part of the mash boiled and returned.
    Decoction,
    FlySparge,
    BatchSparge,
}

impl Choice for MashStepType {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("infusion", Self::Infusion),
        ("temperature", Self::Temperature),
        ("decoction", Self::Decoction),
        ("fly sparge", Self::FlySparge),
        ("batch sparge", Self::BatchSparge),
    ];
}

impl MashStepType {
    #[must_use]
    pub fn is_sparge(self) -> bool {
        matches!(self, Self::FlySparge | Self::BatchSparge)
    }
}

/// One step of a mash profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MashStep {
    pub id: EntityId,
    pub name: String,
    pub step_type: MashStepType,
    /// Target temperature, °C.
    pub step_temp_c: f64,
    /// Rest duration, minutes.
    pub step_time_min: f64,
    pub ramp_time_min: Option<f64>,
    pub end_temp_c: Option<f64>,
    /// Water added by an infusion step, liters.
    pub infuse_amount_l: Option<f64>,
    pub description: String,
}

impl MashStep {
    #[must_use]
    pub fn new(name: impl Into<String>, step_type: MashStepType, step_temp_c: f64, step_time_min: f64) -> Self {
        Self {
            name: name.into(),
            step_type,
            step_temp_c,
            step_time_min,
            ..Self::default()
        }
    }

    /// Builder-style infusion volume.
    #[must_use]
    pub fn with_infusion(mut self, liters: f64) -> Self {
        self.infuse_amount_l = Some(liters);
        self
    }
}

impl Record for MashStep {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: LazyLock<RecordSchema<MashStep>> = LazyLock::new(|| {
            RecordSchema::<MashStep>::builder(MASH_STEP)
                .section("mash_steps")
                .identity("id", "id", |s| s.id, |s, v| s.id = v)
                .text("name", "name", |s| Some(s.name.clone()), |s, v| s.name = v)
                .choice::<MashStepType>("step_type", "type", |s| s.step_type, |s, v| s.step_type = v)
                .measured(
                    "step_temp_c",
                    "step_temp",
                    &mappings::TEMPERATURE,
                    |s| Some(s.step_temp_c),
                    |s, v| s.step_temp_c = v,
                )
                .measured(
                    "step_time_min",
                    "step_time",
                    &mappings::TIME,
                    |s| Some(s.step_time_min),
                    |s, v| s.step_time_min = v,
                )
                .measured(
                    "ramp_time_min",
                    "ramp_time",
                    &mappings::TIME,
                    |s| s.ramp_time_min,
                    |s, v| s.ramp_time_min = Some(v),
                )
                .measured(
                    "end_temp_c",
                    "end_temp",
                    &mappings::TEMPERATURE,
                    |s| s.end_temp_c,
                    |s, v| s.end_temp_c = Some(v),
                )
                .measured(
                    "infuse_amount_l",
                    "infuse_amount",
                    &mappings::VOLUME,
                    |s| s.infuse_amount_l,
                    |s, v| s.infuse_amount_l = Some(v),
                )
                .text(
                    "description",
                    "description",
                    |s| non_empty(&s.description),
                    |s, v| s.description = v,
                )
                .build()
        });
        &SCHEMA
    }
}
