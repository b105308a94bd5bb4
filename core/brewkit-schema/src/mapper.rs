//! The record mapper: one field definition against one live record.

use tracing::debug;

use crate::field::Access;
use crate::{
    ContainmentContext, ExportStatistics, FieldDefinition, Node, ReadError, ReadErrors, Record,
    RecordNode, Scalar, SchemaError, SchemaResult,
};

/// Writes records into [`RecordNode`]s.
///
/// Each field operation depends only on the field definition, the record and
/// the containment context; the writer itself only carries the statistics
/// sink for the pass.
pub struct RecordWriter<'s> {
    statistics: &'s mut ExportStatistics,
}

impl<'s> RecordWriter<'s> {
    pub fn new(statistics: &'s mut ExportStatistics) -> Self {
        Self { statistics }
    }

    /// Writes `record` and everything it owns.
    pub fn write_record<R: Record>(
        &mut self,
        record: &R,
        ctx: ContainmentContext,
    ) -> SchemaResult<RecordNode> {
        self.record_at(record, ctx, R::schema().tag())
    }

    /// Writes one field of `record`. `None` means the field is omitted.
    pub fn write_field<R: Record>(
        &mut self,
        field: &FieldDefinition<R>,
        record: &R,
        ctx: ContainmentContext,
    ) -> SchemaResult<Option<Node>> {
        let path = format!("{}/{}", R::schema().tag(), field.external_name());
        self.field_at(field, record, ctx, &path)
    }

    /// Writes the designated child collection of `record`.
    ///
    /// # Panics
    ///
    /// Panics when `field` is not `R`'s complex child field.
    pub fn write_children<R: Record>(
        &mut self,
        field: &FieldDefinition<R>,
        record: &R,
        ctx: ContainmentContext,
    ) -> SchemaResult<Node> {
        let path = format!("{}/{}", R::schema().tag(), field.external_name());
        self.children_at(field, record, ctx, &path)
    }

    pub(crate) fn record_at<R: Record>(
        &mut self,
        record: &R,
        ctx: ContainmentContext,
        path: &str,
    ) -> SchemaResult<RecordNode> {
        let schema = R::schema();
        if ctx.includes_statistics() {
            self.statistics.include(schema.kind());
            record.accumulate(self.statistics);
        } else {
            self.statistics.exclude(schema.kind());
        }

        let mut node = RecordNode::new(schema.tag());
        for field in schema.fields() {
            let field_path = format!("{path}/{}", field.external_name());
            if let Some(value) = self.field_at(field, record, ctx, &field_path)? {
                node.push(field.external_name(), value);
            }
        }
        Ok(node)
    }

    fn field_at<R: Record>(
        &mut self,
        field: &FieldDefinition<R>,
        record: &R,
        ctx: ContainmentContext,
        path: &str,
    ) -> SchemaResult<Option<Node>> {
        let node = match &field.access {
            Access::Identity { get, .. } => Some(Node::text(get(record).to_string())),
            Access::Text { get, .. } => get(record).map(Node::text),
            Access::Number { get, .. } => get(record).map(Node::number),
            Access::Flag { get, .. } => Some(Node::Scalar(Scalar::Bool(get(record)))),
            Access::Choice(choice) => Some(Node::text(choice.get(record))),
            Access::Measured {
                mapping, unit, get, ..
            } => match get(record) {
                Some(canonical) => {
                    let name = mapping
                        .lookup_unit_name(*unit)
                        .map_err(|source| SchemaError::Unit {
                            path: path.to_string(),
                            source,
                        })?;
                    Some(Node::Measured {
                        value: Scalar::Number(unit.from_canonical(canonical)),
                        unit: name.to_string(),
                    })
                }
                None => None,
            },
            Access::Record(nested) => {
                let schema = R::schema();
                let child_ctx = ctx.attach(schema.kind(), schema.is_aggregating());
                nested.write(record, self, child_ctx, path)?
            }
            Access::RecordList(_) => Some(self.children_at(field, record, ctx, path)?),
        };
        Ok(node)
    }

    fn children_at<R: Record>(
        &mut self,
        field: &FieldDefinition<R>,
        record: &R,
        ctx: ContainmentContext,
        path: &str,
    ) -> SchemaResult<Node> {
        let schema = R::schema();
        assert!(
            schema.is_complex_child(field),
            "{}.{} is not the child collection of {}",
            schema.kind(),
            field.property(),
            schema.kind()
        );
        let Access::RecordList(children) = &field.access else {
            unreachable!("complex child field is always a record collection");
        };

        if children.len(record) == 0 {
            return Ok(Node::Empty);
        }
        let child_ctx = ctx.attach(schema.kind(), schema.is_aggregating());
        Ok(Node::List(children.write(record, self, child_ctx, path)?))
    }
}

/// Reads records out of a node tree, collecting every field failure.
///
/// A record with any failing field, or any failing descendant, is not
/// returned; sibling fields are still attempted so one pass reports every
/// problem.
#[derive(Debug, Default)]
pub struct RecordReader {
    errors: Vec<ReadError>,
}

impl RecordReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a fresh `R` from `node`; `path` locates it in error reports.
    pub fn read_record<R: Record>(&mut self, node: &RecordNode, path: &str) -> Option<R> {
        let schema = R::schema();
        let before = self.errors.len();
        let mut record = R::default();

        for (name, value) in &node.fields {
            match schema.field_by_external_name(name) {
                Some(field) => self.read_field(field, &mut record, value, &format!("{path}/{name}")),
                None => debug!(kind = %schema.kind(), field = %name, "skipping unknown field"),
            }
        }

        (self.errors.len() == before).then_some(record)
    }

    /// Reads one field of `record` from `node`.
    pub fn read_field<R: Record>(
        &mut self,
        field: &FieldDefinition<R>,
        record: &mut R,
        node: &Node,
        path: &str,
    ) {
        if let Err(reason) = self.try_read_field(field, record, node, path) {
            self.fail(path, reason);
        }
    }

    fn try_read_field<R: Record>(
        &mut self,
        field: &FieldDefinition<R>,
        record: &mut R,
        node: &Node,
        path: &str,
    ) -> Result<(), String> {
        match &field.access {
            Access::Identity { set, .. } => {
                let text = scalar(node)?.as_text().into_owned();
                let id = crate::EntityId::parse(&text)
                    .map_err(|e| format!("invalid identifier {text:?}: {e}"))?;
                set(record, id);
            }
            Access::Text { set, .. } => match node {
                Node::Empty => set(record, String::new()),
                _ => set(record, scalar(node)?.as_text().into_owned()),
            },
            Access::Number { set, .. } => {
                if !node.is_empty_marker() {
                    set(record, number(scalar(node)?)?);
                }
            }
            Access::Flag { set, .. } => {
                if !node.is_empty_marker() {
                    let s = scalar(node)?;
                    let value = s
                        .as_bool()
                        .ok_or_else(|| format!("expected a boolean, found {:?}", s.as_text()))?;
                    set(record, value);
                }
            }
            Access::Choice(choice) => {
                if !node.is_empty_marker() {
                    choice.set(record, &scalar(node)?.as_text())?;
                }
            }
            Access::Measured { mapping, set, .. } => {
                let (value, unit_name) = match node {
                    Node::Empty => return Ok(()),
                    Node::Scalar(s) => (s, None),
                    Node::Measured { value, unit } => (value, Some(unit.as_str())),
                    Node::Record(r) => {
                        let value = r
                            .get("value")
                            .and_then(Node::as_scalar)
                            .ok_or("expected a measured value with a \"value\" field")?;
                        let unit = match r.get("unit") {
                            Some(Node::Scalar(Scalar::Text(u))) => Some(u.as_str()),
                            Some(other) => {
                                return Err(format!("expected a unit name, found {}", other.shape()));
                            }
                            None => None,
                        };
                        (value, unit)
                    }
                    Node::List(_) => {
                        return Err(format!("expected a measured value, found {}", node.shape()));
                    }
                };
                let amount = number(value)?;
                let unit = match unit_name {
                    Some(name) => mapping.resolve(name).map_err(|e| e.to_string())?,
                    None => mapping.default_unit(),
                };
                set(record, unit.to_canonical(amount));
            }
            Access::Record(nested) => match node {
                Node::Record(child) => nested.read(record, child, self, path),
                Node::Empty => nested.clear(record),
                other => return Err(format!("expected a record, found {}", other.shape())),
            },
            Access::RecordList(children) => {
                let items = collection_items(node)?;
                children.read(record, &items, self, path);
            }
        }
        Ok(())
    }

    pub(crate) fn fail(&mut self, path: &str, reason: impl Into<String>) {
        let error = ReadError {
            path: path.to_string(),
            reason: reason.into(),
        };
        debug!(%error, "field rejected");
        self.errors.push(error);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ReadError] {
        &self.errors
    }

    /// Ends the pass, turning collected failures into an error.
    pub fn finish(self) -> SchemaResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Malformed(ReadErrors(self.errors)))
        }
    }

    /// Replaces `target` with a record read from `node`.
    ///
    /// `target` is left untouched when any field fails.
    pub fn populate<R: Record>(node: &RecordNode, target: &mut R) -> SchemaResult<()> {
        let mut reader = Self::new();
        let parsed = reader.read_record::<R>(node, R::schema().tag());
        reader.finish()?;
        if let Some(record) = parsed {
            *target = record;
        }
        Ok(())
    }
}

fn scalar(node: &Node) -> Result<&Scalar, String> {
    node.as_scalar()
        .ok_or_else(|| format!("expected a scalar, found {}", node.shape()))
}

fn number(s: &Scalar) -> Result<f64, String> {
    s.as_number()
        .ok_or_else(|| format!("expected a number, found {:?}", s.as_text()))
}

/// Child records of a collection field in either codec's shape.
///
/// JSON arrives as a list, XML as a container record whose fields are the
/// items. An empty marker, or a blank text leaf, is an empty collection.
pub(crate) fn collection_items(node: &Node) -> Result<Vec<&RecordNode>, String> {
    let items: Vec<&Node> = match node {
        Node::Empty => Vec::new(),
        Node::Scalar(Scalar::Text(t)) if t.trim().is_empty() => Vec::new(),
        Node::List(items) => items.iter().collect(),
        Node::Record(container) => container.fields.iter().map(|(_, n)| n).collect(),
        other => return Err(format!("expected a collection, found {}", other.shape())),
    };
    items
        .into_iter()
        .map(|n| {
            n.as_record()
                .ok_or_else(|| format!("expected a record in collection, found {}", n.shape()))
        })
        .collect()
}
