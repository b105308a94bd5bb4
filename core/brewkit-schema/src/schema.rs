use std::fmt;

use brewkit_units::{Unit, UnitMapping};

use crate::field::{Access, ChoiceField, FieldDefinition, ListField, NestedField};
use crate::{Choice, EntityId, ExportStatistics, FieldKind};

/// Tag naming an entity type, used for containment and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKind(&'static str);

impl EntityKind {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An entity type that can be written to and read from a node tree.
///
/// `Default` supplies the blank entity a reader populates.
pub trait Record: Default + Sized + 'static {
    /// The type's field table, built once per process.
    fn schema() -> &'static RecordSchema<Self>;

    /// Adds this record's figures to the export statistics. Only called for
    /// records whose containment context includes statistics.
    fn accumulate(&self, statistics: &mut ExportStatistics) {
        let _ = statistics;
    }
}

/// Ordered field table for one entity type.
pub struct RecordSchema<T> {
    kind: EntityKind,
    tag: &'static str,
    section: &'static str,
    aggregating: bool,
    fields: Vec<FieldDefinition<T>>,
    complex_child: Option<usize>,
}

impl<T: 'static> RecordSchema<T> {
    /// Starts a schema for `kind`. Tag and section default to the kind name.
    #[must_use]
    pub fn builder(kind: EntityKind) -> SchemaBuilder<T> {
        SchemaBuilder {
            kind,
            tag: kind.name(),
            section: kind.name(),
            aggregating: false,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// External element name of one record.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// External name of a document section holding records of this type.
    #[must_use]
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Whether records embedded in this type drop out of export statistics.
    #[must_use]
    pub fn is_aggregating(&self) -> bool {
        self.aggregating
    }

    /// Field definitions in declared order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition<T>] {
        &self.fields
    }

    /// The definition bound to `property`.
    #[must_use]
    pub fn field(&self, property: &str) -> Option<&FieldDefinition<T>> {
        self.fields.iter().find(|f| f.property() == property)
    }

    /// The definition with external name `name`.
    #[must_use]
    pub fn field_by_external_name(&self, name: &str) -> Option<&FieldDefinition<T>> {
        self.fields.iter().find(|f| f.external_name() == name)
    }

    /// The single nested-record-collection field, if the type declares one.
    #[must_use]
    pub fn complex_child(&self) -> Option<&FieldDefinition<T>> {
        self.complex_child.map(|i| &self.fields[i])
    }

    /// Whether `field` is this schema's designated child collection.
    #[must_use]
    pub fn is_complex_child(&self, field: &FieldDefinition<T>) -> bool {
        self.complex_child()
            .is_some_and(|child| std::ptr::eq(child, field))
    }
}

impl<T> fmt::Debug for RecordSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("kind", &self.kind)
            .field("tag", &self.tag)
            .field("section", &self.section)
            .field("aggregating", &self.aggregating)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Declares a [`RecordSchema`] one field at a time.
///
/// Property names and external names must each be unique, and at most one
/// field may be a record collection. Violations are programmer errors and
/// panic in [`build`](Self::build).
pub struct SchemaBuilder<T> {
    kind: EntityKind,
    tag: &'static str,
    section: &'static str,
    aggregating: bool,
    fields: Vec<FieldDefinition<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
    #[must_use]
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    #[must_use]
    pub fn section(mut self, section: &'static str) -> Self {
        self.section = section;
        self
    }

    /// Marks the type as aggregating: records embedded in it are excluded
    /// from export statistics.
    #[must_use]
    pub fn aggregating(mut self) -> Self {
        self.aggregating = true;
        self
    }

    fn push(mut self, property: &'static str, external_name: &'static str, access: Access<T>) -> Self {
        self.fields.push(FieldDefinition::new(property, external_name, access));
        self
    }

    #[must_use]
    pub fn identity(
        self,
        property: &'static str,
        external_name: &'static str,
        get: fn(&T) -> EntityId,
        set: fn(&mut T, EntityId),
    ) -> Self {
        self.push(property, external_name, Access::Identity { get, set })
    }

    /// A text property; `None` from `get` omits the field.
    #[must_use]
    pub fn text(
        self,
        property: &'static str,
        external_name: &'static str,
        get: fn(&T) -> Option<String>,
        set: fn(&mut T, String),
    ) -> Self {
        self.push(property, external_name, Access::Text { get, set })
    }

    #[must_use]
    pub fn number(
        self,
        property: &'static str,
        external_name: &'static str,
        get: fn(&T) -> Option<f64>,
        set: fn(&mut T, f64),
    ) -> Self {
        self.push(property, external_name, Access::Number { get, set })
    }

    #[must_use]
    pub fn flag(
        self,
        property: &'static str,
        external_name: &'static str,
        get: fn(&T) -> bool,
        set: fn(&mut T, bool),
    ) -> Self {
        self.push(property, external_name, Access::Flag { get, set })
    }

    /// An enumeration mapped through `E`'s string table.
    #[must_use]
    pub fn choice<E: Choice>(
        self,
        property: &'static str,
        external_name: &'static str,
        get: fn(&T) -> E,
        set: fn(&mut T, E),
    ) -> Self {
        let access = Access::Choice(Box::new(ChoiceField { get, set }));
        self.push(property, external_name, access)
    }

    /// A canonical-unit amount exported in the mapping's canonical unit.
    #[must_use]
    pub fn measured(
        self,
        property: &'static str,
        external_name: &'static str,
        mapping: &'static UnitMapping,
        get: fn(&T) -> Option<f64>,
        set: fn(&mut T, f64),
    ) -> Self {
        let unit = mapping.default_unit();
        self.measured_in(property, external_name, mapping, unit, get, set)
    }

    /// A canonical-unit amount exported in `unit`.
    #[must_use]
    pub fn measured_in(
        self,
        property: &'static str,
        external_name: &'static str,
        mapping: &'static UnitMapping,
        unit: Unit,
        get: fn(&T) -> Option<f64>,
        set: fn(&mut T, f64),
    ) -> Self {
        let access = Access::Measured {
            mapping,
            unit,
            get,
            set,
        };
        self.push(property, external_name, access)
    }

    /// A single optional nested record.
    #[must_use]
    pub fn record<C: crate::Record>(
        self,
        property: &'static str,
        external_name: &'static str,
        get: fn(&T) -> Option<&C>,
        set: fn(&mut T, Option<C>),
    ) -> Self {
        let access = Access::Record(Box::new(NestedField { get, set }));
        self.push(property, external_name, access)
    }

    /// The ordered child collection. A schema may declare only one.
    #[must_use]
    pub fn records<C: crate::Record>(
        self,
        property: &'static str,
        external_name: &'static str,
        get: fn(&T) -> &[C],
        get_mut: fn(&mut T) -> &mut Vec<C>,
    ) -> Self {
        let access = Access::RecordList(Box::new(ListField { get, get_mut }));
        self.push(property, external_name, access)
    }

    /// Validates and freezes the table.
    ///
    /// # Panics
    ///
    /// Panics on a duplicate property or external name, or when more than
    /// one record collection is declared.
    #[must_use]
    pub fn build(self) -> RecordSchema<T> {
        let mut complex_child = None;
        for (i, field) in self.fields.iter().enumerate() {
            let earlier = &self.fields[..i];
            assert!(
                !earlier.iter().any(|f| f.property() == field.property()),
                "{}: property {:?} declared twice",
                self.kind,
                field.property()
            );
            assert!(
                !earlier.iter().any(|f| f.external_name() == field.external_name()),
                "{}: external name {:?} declared twice",
                self.kind,
                field.external_name()
            );
            if field.kind() == FieldKind::RecordList {
                assert!(
                    complex_child.is_none(),
                    "{}: more than one record collection declared ({:?})",
                    self.kind,
                    field.property()
                );
                complex_child = Some(i);
            }
        }

        RecordSchema {
            kind: self.kind,
            tag: self.tag,
            section: self.section,
            aggregating: self.aggregating,
            fields: self.fields,
            complex_child,
        }
    }
}
