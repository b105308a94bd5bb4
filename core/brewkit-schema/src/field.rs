//! Field definitions: one property accessor bound to one external name.

use std::fmt;

use brewkit_units::{Unit, UnitMapping};

use crate::{ContainmentContext, EntityId, Node, Record, RecordNode, RecordReader, RecordWriter, SchemaResult};

/// Shape of a field in the external representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text, number, flag, identity or enumeration.
    Scalar,
    /// An amount plus a unit name from a [`UnitMapping`].
    Measured,
    /// A single nested record.
    Record,
    /// The ordered nested-record collection.
    RecordList,
}

/// An enumeration with a fixed external string table.
pub trait Choice: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// `(external name, variant)` pairs; every variant must appear once.
    const CHOICES: &'static [(&'static str, Self)];

    /// # Panics
    ///
    /// Panics when the variant is missing from [`CHOICES`](Self::CHOICES).
    #[must_use]
    fn external_name(self) -> &'static str {
        match Self::CHOICES.iter().find(|(_, v)| *v == self) {
            Some((name, _)) => name,
            None => panic!("{self:?} has no entry in its choice table"),
        }
    }

    /// Case-insensitive reverse lookup.
    #[must_use]
    fn from_external_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::CHOICES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

/// Maps one property of `T` to one external field.
pub struct FieldDefinition<T> {
    property: &'static str,
    external_name: &'static str,
    pub(crate) access: Access<T>,
}

impl<T> FieldDefinition<T> {
    pub(crate) fn new(property: &'static str, external_name: &'static str, access: Access<T>) -> Self {
        Self {
            property,
            external_name,
            access,
        }
    }

    /// Name of the in-memory property.
    #[must_use]
    pub fn property(&self) -> &'static str {
        self.property
    }

    /// Name of the external field (snake_case).
    #[must_use]
    pub fn external_name(&self) -> &'static str {
        self.external_name
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self.access {
            Access::Identity { .. }
            | Access::Text { .. }
            | Access::Number { .. }
            | Access::Flag { .. }
            | Access::Choice(_) => FieldKind::Scalar,
            Access::Measured { .. } => FieldKind::Measured,
            Access::Record(_) => FieldKind::Record,
            Access::RecordList(_) => FieldKind::RecordList,
        }
    }

    /// The unit mapping of a measured field.
    #[must_use]
    pub fn unit_mapping(&self) -> Option<&'static UnitMapping> {
        match self.access {
            Access::Measured { mapping, .. } => Some(mapping),
            _ => None,
        }
    }
}

impl<T> fmt::Debug for FieldDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("property", &self.property)
            .field("external_name", &self.external_name)
            .field("kind", &self.kind())
            .finish()
    }
}

pub(crate) enum Access<T> {
    Identity {
        get: fn(&T) -> EntityId,
        set: fn(&mut T, EntityId),
    },
    Text {
        get: fn(&T) -> Option<String>,
        set: fn(&mut T, String),
    },
    Number {
        get: fn(&T) -> Option<f64>,
        set: fn(&mut T, f64),
    },
    Flag {
        get: fn(&T) -> bool,
        set: fn(&mut T, bool),
    },
    Choice(Box<dyn ChoiceAccess<T>>),
    /// Properties hold canonical amounts; `unit` is the export unit.
    Measured {
        mapping: &'static UnitMapping,
        unit: Unit,
        get: fn(&T) -> Option<f64>,
        set: fn(&mut T, f64),
    },
    Record(Box<dyn NestedAccess<T>>),
    RecordList(Box<dyn CollectionAccess<T>>),
}

pub(crate) trait ChoiceAccess<T>: Send + Sync {
    fn get(&self, record: &T) -> &'static str;
    fn set(&self, record: &mut T, name: &str) -> Result<(), String>;
}

pub(crate) struct ChoiceField<T, E> {
    pub(crate) get: fn(&T) -> E,
    pub(crate) set: fn(&mut T, E),
}

impl<T, E: Choice> ChoiceAccess<T> for ChoiceField<T, E> {
    fn get(&self, record: &T) -> &'static str {
        (self.get)(record).external_name()
    }

    fn set(&self, record: &mut T, name: &str) -> Result<(), String> {
        match E::from_external_name(name) {
            Some(value) => {
                (self.set)(record, value);
                Ok(())
            }
            None => {
                let expected: Vec<&str> = E::CHOICES.iter().map(|(n, _)| *n).collect();
                Err(format!("unknown value {name:?}, expected one of {expected:?}"))
            }
        }
    }
}

pub(crate) trait NestedAccess<T>: Send + Sync {
    fn write(
        &self,
        parent: &T,
        writer: &mut RecordWriter<'_>,
        ctx: ContainmentContext,
        path: &str,
    ) -> SchemaResult<Option<Node>>;

    fn read(&self, parent: &mut T, node: &RecordNode, reader: &mut RecordReader, path: &str);

    fn clear(&self, parent: &mut T);
}

pub(crate) struct NestedField<P, C> {
    pub(crate) get: fn(&P) -> Option<&C>,
    pub(crate) set: fn(&mut P, Option<C>),
}

impl<P, C: Record> NestedAccess<P> for NestedField<P, C> {
    fn write(
        &self,
        parent: &P,
        writer: &mut RecordWriter<'_>,
        ctx: ContainmentContext,
        path: &str,
    ) -> SchemaResult<Option<Node>> {
        match (self.get)(parent) {
            Some(child) => Ok(Some(Node::Record(writer.record_at(child, ctx, path)?))),
            None => Ok(None),
        }
    }

    fn read(&self, parent: &mut P, node: &RecordNode, reader: &mut RecordReader, path: &str) {
        if let Some(child) = reader.read_record::<C>(node, path) {
            (self.set)(parent, Some(child));
        }
    }

    fn clear(&self, parent: &mut P) {
        (self.set)(parent, None);
    }
}

pub(crate) trait CollectionAccess<T>: Send + Sync {
    fn len(&self, parent: &T) -> usize;

    /// Writes every item in order; the caller handles the empty case.
    fn write(
        &self,
        parent: &T,
        writer: &mut RecordWriter<'_>,
        ctx: ContainmentContext,
        path: &str,
    ) -> SchemaResult<Vec<Node>>;

    /// Replaces the collection with `items`, read in order.
    fn read(&self, parent: &mut T, items: &[&RecordNode], reader: &mut RecordReader, path: &str);
}

pub(crate) struct ListField<P, C> {
    pub(crate) get: fn(&P) -> &[C],
    pub(crate) get_mut: fn(&mut P) -> &mut Vec<C>,
}

impl<P, C: Record> CollectionAccess<P> for ListField<P, C> {
    fn len(&self, parent: &P) -> usize {
        (self.get)(parent).len()
    }

    fn write(
        &self,
        parent: &P,
        writer: &mut RecordWriter<'_>,
        ctx: ContainmentContext,
        path: &str,
    ) -> SchemaResult<Vec<Node>> {
        (self.get)(parent)
            .iter()
            .enumerate()
            .map(|(i, child)| {
                writer
                    .record_at(child, ctx, &format!("{path}[{i}]"))
                    .map(Node::Record)
            })
            .collect()
    }

    fn read(&self, parent: &mut P, items: &[&RecordNode], reader: &mut RecordReader, path: &str) {
        let children = (self.get_mut)(parent);
        children.clear();
        for (i, item) in items.iter().enumerate() {
            if let Some(child) = reader.read_record::<C>(item, &format!("{path}[{i}]")) {
                children.push(child);
            }
        }
    }
}
