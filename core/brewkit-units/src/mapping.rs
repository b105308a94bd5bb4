use crate::{PhysicalQuantity, Unit, UnitError, UnitResult};

/// Bijection between external unit names and units of one quantity.
///
/// Construction validates the table, so a live `UnitMapping` is never
/// empty, never mixes quantities, and maps every name to exactly one unit
/// and every unit to exactly one name. Names compare case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitMapping {
    quantity: PhysicalQuantity,
    entries: Vec<(String, Unit)>,
}

impl UnitMapping {
    /// Builds a mapping from `(name, unit)` pairs, in registration order.
    pub fn new<I, S>(entries: I) -> UnitResult<Self>
    where
        I: IntoIterator<Item = (S, Unit)>,
        S: Into<String>,
    {
        let mut quantity = None;
        let mut table: Vec<(String, Unit)> = Vec::new();

        for (name, unit) in entries {
            let name = name.into();
            let expected = *quantity.get_or_insert(unit.quantity());
            if unit.quantity() != expected {
                return Err(UnitError::MixedQuantities {
                    expected,
                    found: unit.quantity(),
                });
            }
            if table.iter().any(|(n, _)| n.eq_ignore_ascii_case(&name)) {
                return Err(UnitError::DuplicateName(name));
            }
            if table.iter().any(|(_, u)| *u == unit) {
                return Err(UnitError::DuplicateUnit(unit));
            }
            table.push((name, unit));
        }

        let quantity = quantity.ok_or(UnitError::Empty)?;
        Ok(Self {
            quantity,
            entries: table,
        })
    }

    /// The single physical quantity shared by every entry.
    #[must_use]
    pub fn physical_quantity(&self) -> PhysicalQuantity {
        self.quantity
    }

    /// The unit assumed when external data gives an amount without a name.
    #[must_use]
    pub fn default_unit(&self) -> Unit {
        self.quantity.canonical_unit()
    }

    /// Returns the external name registered for `unit`.
    pub fn lookup_unit_name(&self, unit: Unit) -> UnitResult<&str> {
        self.entries
            .iter()
            .find(|(_, u)| *u == unit)
            .map(|(name, _)| name.as_str())
            .ok_or(UnitError::NotFound {
                unit,
                quantity: self.quantity,
            })
    }

    /// Resolves an external name back to its unit.
    pub fn resolve(&self, name: &str) -> UnitResult<Unit> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, unit)| *unit)
            .ok_or_else(|| UnitError::UnknownName {
                name: name.to_string(),
                quantity: self.quantity,
            })
    }

    #[must_use]
    pub fn contains(&self, unit: Unit) -> bool {
        self.entries.iter().any(|(_, u)| *u == unit)
    }

    /// Registered `(name, unit)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Unit)> {
        self.entries.iter().map(|(n, u)| (n.as_str(), *u))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed mapping; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
