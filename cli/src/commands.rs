use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use brewkit_interchange::{Exporter, Format, Importer};
use brewkit_model::{Mash, Recipe};
use brewkit_schema::{Choice, ExportStatistics, Record};
use brewkit_units::{Measurement, PhysicalQuantity, Unit, mappings};
use tracing::{info, warn};

use crate::Config;

/// What `convert` wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    pub format: Format,
    pub recipes: usize,
    pub mashes: usize,
    pub statistics: ExportStatistics,
}

/// Reads every known section of `input` and writes them to `output`.
///
/// The output format is `to`, else the output's extension, else the
/// configured format, else the input's format.
pub fn convert(input: &Path, output: &Path, to: Option<Format>, config: &Config) -> Result<ConvertSummary> {
    let importer =
        Importer::open(input).with_context(|| format!("failed to read {}", input.display()))?;
    let format = to
        .or_else(|| Format::from_path(output).ok())
        .or(config.export.format)
        .unwrap_or(importer.format());

    for section in importer.sections() {
        if section != Recipe::schema().section() && section != Mash::schema().section() {
            warn!(section, "dropping unknown section");
        }
    }

    let recipes: Vec<Recipe> = importer
        .read()
        .with_context(|| format!("invalid recipes in {}", input.display()))?;
    let mashes: Vec<Mash> = importer
        .read()
        .with_context(|| format!("invalid mashes in {}", input.display()))?;

    let mut exporter = Exporter::with_options(format, config.export.options);
    if importer.has_section::<Recipe>() {
        exporter.section(&recipes)?;
    }
    if importer.has_section::<Mash>() {
        exporter.section(&mashes)?;
    }
    let export = exporter.finish()?;
    fs::write(output, &export.text).with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        input = %input.display(),
        output = %output.display(),
        %format,
        "converted document"
    );

    Ok(ConvertSummary {
        format,
        recipes: recipes.len(),
        mashes: mashes.len(),
        statistics: export.statistics,
    })
}

/// Human-readable listing of a document's recipes and mashes, followed by
/// the statistics an export of it would report.
pub fn inspect(input: &Path) -> Result<String> {
    let importer =
        Importer::open(input).with_context(|| format!("failed to read {}", input.display()))?;
    let recipes: Vec<Recipe> = importer.read()?;
    let mashes: Vec<Mash> = importer.read()?;

    let mut out = String::new();
    writeln!(out, "{} ({} document)", input.display(), importer.format())?;
    for recipe in &recipes {
        writeln!(
            out,
            "recipe {:?}: {}, {:.1}",
            recipe.name,
            recipe.recipe_type.external_name(),
            Measurement::new(recipe.batch_size_l, Unit::Liters)
        )?;
        for addition in &recipe.additions {
            writeln!(
                out,
                "  {} {:?}: {:.3} ({})",
                addition.ingredient.external_name(),
                addition.name,
                Measurement::new(addition.amount_kg, Unit::Kilograms),
                addition.stage.external_name()
            )?;
        }
        if let Some(mash) = recipe.mash() {
            describe_mash(&mut out, mash, "  ")?;
        }
    }
    for mash in &mashes {
        describe_mash(&mut out, mash, "")?;
    }

    let mut exporter = Exporter::new(importer.format());
    exporter.section(&recipes)?.section(&mashes)?;
    write!(out, "{}", exporter.statistics())?;
    Ok(out)
}

fn describe_mash(out: &mut String, mash: &Mash, indent: &str) -> Result<()> {
    writeln!(
        out,
        "{indent}mash {:?}: {} steps, {:.0}",
        mash.name,
        mash.steps().len(),
        Measurement::new(mash.total_time_min(), Unit::Minutes)
    )?;
    for (i, step) in mash.steps().iter().enumerate() {
        writeln!(
            out,
            "{indent}  {}. {} ({}) at {:.1} for {:.0}",
            i + 1,
            step.name,
            step.step_type.external_name(),
            Measurement::new(step.step_temp_c, Unit::Celsius),
            Measurement::new(step.step_time_min, Unit::Minutes)
        )?;
    }
    Ok(())
}

/// External unit names of the standard mapping for `quantity`, default
/// first.
pub fn units(quantity: &str) -> Result<String> {
    let quantity: PhysicalQuantity = match quantity.parse() {
        Ok(q) => q,
        Err(e) => {
            let known: Vec<&str> = PhysicalQuantity::ALL.iter().map(|q| q.name()).collect();
            bail!("{e}; expected one of {}", known.join(", "));
        }
    };
    let mapping = mappings::for_quantity(quantity);

    let mut out = String::new();
    writeln!(out, "{quantity}")?;
    for (name, unit) in mapping.entries() {
        let marker = if unit == mapping.default_unit() { " (default)" } else { "" };
        writeln!(out, "  {name:<8} {}{marker}", unit.symbol())?;
    }
    Ok(out)
}
