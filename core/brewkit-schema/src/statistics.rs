use std::collections::BTreeMap;
use std::fmt;

use crate::EntityKind;

/// Aggregate figures gathered while writing a document.
///
/// Records whose [`ContainmentContext`](crate::ContainmentContext) excludes
/// them are only tallied under `excluded`; they contribute no totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportStatistics {
    included: BTreeMap<EntityKind, usize>,
    excluded: BTreeMap<EntityKind, usize>,
    totals: BTreeMap<&'static str, f64>,
}

impl ExportStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn include(&mut self, kind: EntityKind) {
        *self.included.entry(kind).or_default() += 1;
    }

    pub(crate) fn exclude(&mut self, kind: EntityKind) {
        *self.excluded.entry(kind).or_default() += 1;
    }

    /// Adds `amount` to the named running total.
    pub fn add_total(&mut self, name: &'static str, amount: f64) {
        *self.totals.entry(name).or_default() += amount;
    }

    /// Number of `kind` records counted in the statistics.
    #[must_use]
    pub fn included(&self, kind: EntityKind) -> usize {
        self.included.get(&kind).copied().unwrap_or(0)
    }

    /// Number of `kind` records written but left out of the statistics.
    #[must_use]
    pub fn excluded(&self, kind: EntityKind) -> usize {
        self.excluded.get(&kind).copied().unwrap_or(0)
    }

    /// Named total, zero when nothing contributed.
    #[must_use]
    pub fn total(&self, name: &str) -> f64 {
        self.totals.get(name).copied().unwrap_or(0.0)
    }

    pub fn totals(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.totals.iter().map(|(k, v)| (*k, *v))
    }

    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        let mut kinds: Vec<EntityKind> =
            self.included.keys().chain(self.excluded.keys()).copied().collect();
        kinds.sort();
        kinds.dedup();
        kinds.into_iter()
    }

    /// Folds another pass's figures into this one.
    pub fn merge(&mut self, other: &ExportStatistics) {
        for (kind, n) in &other.included {
            *self.included.entry(*kind).or_default() += n;
        }
        for (kind, n) in &other.excluded {
            *self.excluded.entry(*kind).or_default() += n;
        }
        for (name, v) in &other.totals {
            self.add_total(*name, *v);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty() && self.totals.is_empty()
    }
}

impl fmt::Display for ExportStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in self.kinds() {
            writeln!(
                f,
                "{kind}: {} counted, {} embedded",
                self.included(kind),
                self.excluded(kind)
            )?;
        }
        for (name, value) in self.totals() {
            writeln!(f, "{name}: {value:.2}")?;
        }
        Ok(())
    }
}
