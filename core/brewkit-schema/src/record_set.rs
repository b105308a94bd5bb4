//! Whole-document walks over sections of records.

use tracing::debug;

use crate::mapper::collection_items;
use crate::{
    ContainmentContext, ExportStatistics, Node, ReadError, ReadErrors, Record, RecordNode,
    RecordReader, RecordWriter, SchemaError, SchemaResult,
};

/// Tag of the document root.
pub const ROOT_TAG: &str = "brewkit";

/// Document format revision written by this crate.
pub const DOCUMENT_VERSION: u32 = 1;

/// The root node and the statistics gathered while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenDocument {
    pub root: RecordNode,
    pub statistics: ExportStatistics,
}

/// Builds a document with one section per entity type.
#[derive(Debug)]
pub struct RecordSetWriter {
    root: RecordNode,
    statistics: ExportStatistics,
}

impl RecordSetWriter {
    #[must_use]
    pub fn new() -> Self {
        let root = RecordNode::new(ROOT_TAG).with("version", Node::number(f64::from(DOCUMENT_VERSION)));
        Self {
            root,
            statistics: ExportStatistics::new(),
        }
    }

    /// Appends `records` as standalone entries of `R`'s section.
    ///
    /// An empty slice still produces the section, holding the empty marker.
    pub fn write_section<R: Record>(&mut self, records: &[R]) -> SchemaResult<&mut Self> {
        let section = R::schema().section();
        let offset = match self.root.get(section) {
            Some(Node::List(items)) => items.len(),
            _ => 0,
        };

        let mut writer = RecordWriter::new(&mut self.statistics);
        let mut items = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let path = format!("{section}[{}]", offset + i);
            let node = writer.record_at(record, ContainmentContext::standalone(), &path)?;
            items.push(Node::Record(node));
        }
        debug!(section, count = records.len(), "wrote section");

        match self.root.get_mut(section) {
            Some(Node::List(existing)) => existing.extend(items),
            Some(slot) => {
                if !items.is_empty() {
                    *slot = Node::List(items);
                }
            }
            None if items.is_empty() => self.root.push(section, Node::Empty),
            None => self.root.push(section, Node::List(items)),
        }
        Ok(self)
    }

    #[must_use]
    pub fn statistics(&self) -> &ExportStatistics {
        &self.statistics
    }

    #[must_use]
    pub fn finish(self) -> WrittenDocument {
        WrittenDocument {
            root: self.root,
            statistics: self.statistics,
        }
    }
}

impl Default for RecordSetWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads sections of records out of a parsed document.
#[derive(Debug)]
pub struct RecordSetReader<'a> {
    root: &'a RecordNode,
}

impl<'a> RecordSetReader<'a> {
    /// Checks the document version. A missing version reads as the current one.
    pub fn new(root: &'a RecordNode) -> SchemaResult<Self> {
        if let Some(node) = root.get("version") {
            let found = match node {
                Node::Scalar(s) => s.as_number(),
                _ => None,
            };
            let Some(found) = found.filter(|v| v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(v)) else {
                return Err(SchemaError::Malformed(ReadErrors(vec![ReadError {
                    path: "version".into(),
                    reason: format!("expected a version number, found {}", describe(node)),
                }])));
            };
            // In range and integral, so the cast is exact.
            let found = found as u32;
            if found > DOCUMENT_VERSION {
                return Err(SchemaError::UnsupportedVersion {
                    found,
                    supported: DOCUMENT_VERSION,
                });
            }
        }
        Ok(Self { root })
    }

    /// Names of the sections present in the document.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.root.field_names().filter(|n| *n != "version")
    }

    /// Whether the document carries `R`'s section.
    #[must_use]
    pub fn has_section<R: Record>(&self) -> bool {
        self.root.get(R::schema().section()).is_some()
    }

    /// Reads every record of `R`'s section, in document order.
    ///
    /// A missing section is empty. Any malformed record fails the whole
    /// section.
    pub fn read_section<R: Record>(&self) -> SchemaResult<Vec<R>> {
        let section = R::schema().section();
        let Some(node) = self.root.get(section) else {
            debug!(section, "section absent");
            return Ok(Vec::new());
        };

        let mut reader = RecordReader::new();
        let mut records = Vec::new();
        match collection_items(node) {
            Ok(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    if let Some(record) = reader.read_record::<R>(item, &format!("{section}[{i}]")) {
                        records.push(record);
                    }
                }
            }
            Err(reason) => reader.fail(section, reason),
        }
        reader.finish()?;
        debug!(section, count = records.len(), "read section");
        Ok(records)
    }
}

fn describe(node: &Node) -> String {
    match node {
        Node::Scalar(s) => format!("{:?}", s.as_text()),
        other => other.shape().to_string(),
    }
}
