//! A small test-only domain: a brewery holding a flagship batch, batches
//! holding ordered samples.

#![allow(dead_code)]

use std::sync::LazyLock;

use brewkit_schema::{Choice, EntityId, EntityKind, ExportStatistics, Record, RecordSchema};
use brewkit_units::{mappings, Unit};

pub const BREWERY: EntityKind = EntityKind::new("brewery");
pub const BATCH: EntityKind = EntityKind::new("batch");
pub const SAMPLE: EntityKind = EntityKind::new("sample");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Ale,
    Lager,
    Sour,
}

impl Choice for Style {
    const CHOICES: &'static [(&'static str, Self)] =
        &[("ale", Self::Ale), ("lager", Self::Lager), ("sour", Self::Sour)];
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    pub name: String,
    pub temperature: Option<f64>,
    pub day: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    pub id: EntityId,
    pub name: String,
    pub volume: Option<f64>,
    pub style: Style,
    pub bottled: bool,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Brewery {
    pub id: EntityId,
    pub name: String,
    pub flagship: Option<Batch>,
}

impl Record for Sample {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: LazyLock<RecordSchema<Sample>> = LazyLock::new(|| {
            RecordSchema::<Sample>::builder(SAMPLE)
                .text("name", "name", |s| Some(s.name.clone()), |s, v| s.name = v)
                .measured(
                    "temperature",
                    "temperature",
                    &mappings::TEMPERATURE,
                    |s| s.temperature,
                    |s, v| s.temperature = Some(v),
                )
                .number("day", "day", |s| s.day, |s, v| s.day = Some(v))
                .build()
        });
        &SCHEMA
    }
}

impl Record for Batch {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: LazyLock<RecordSchema<Batch>> = LazyLock::new(|| {
            RecordSchema::<Batch>::builder(BATCH)
                .section("batches")
                .identity("id", "id", |b| b.id, |b, v| b.id = v)
                .text("name", "name", |b| Some(b.name.clone()), |b, v| b.name = v)
                .measured_in(
                    "volume",
                    "volume",
                    &mappings::VOLUME,
                    Unit::UsGallons,
                    |b| b.volume,
                    |b, v| b.volume = Some(v),
                )
                .choice::<Style>("style", "style", |b| b.style, |b, v| b.style = v)
                .flag("bottled", "bottled", |b| b.bottled, |b, v| b.bottled = v)
                .records::<Sample>("samples", "samples", |b| b.samples.as_slice(), |b| &mut b.samples)
                .build()
        });
        &SCHEMA
    }

    fn accumulate(&self, statistics: &mut ExportStatistics) {
        statistics.add_total("batch_liters", self.volume.unwrap_or(0.0));
    }
}

impl Record for Brewery {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: LazyLock<RecordSchema<Brewery>> = LazyLock::new(|| {
            RecordSchema::<Brewery>::builder(BREWERY)
                .section("breweries")
                .aggregating()
                .identity("id", "id", |b| b.id, |b, v| b.id = v)
                .text("name", "name", |b| Some(b.name.clone()), |b, v| b.name = v)
                .record::<Batch>("flagship", "flagship", |b| b.flagship.as_ref(), |b, v| b.flagship = v)
                .build()
        });
        &SCHEMA
    }
}

pub fn sample(name: &str, temperature: f64) -> Sample {
    Sample {
        name: name.to_string(),
        temperature: Some(temperature),
        day: None,
    }
}

pub fn batch(name: &str, samples: &[&str]) -> Batch {
    Batch {
        name: name.to_string(),
        volume: Some(20.0),
        samples: samples.iter().map(|s| sample(s, 18.0)).collect(),
        ..Batch::default()
    }
}
