//! Metadata-driven record mapping for brewkit.
//!
//! Entity types describe themselves with a [`RecordSchema`]: an ordered
//! table of [`FieldDefinition`]s, each binding one property accessor to one
//! external field name. The [`RecordWriter`] and [`RecordReader`] walk those
//! tables to turn live entities into a format-neutral [`Node`] tree and back;
//! [`RecordSetWriter`] and [`RecordSetReader`] do the same for whole
//! documents holding several sections of records.
//!
//! The tree is rendered to XML or JSON by `brewkit-interchange`; nothing in
//! this crate knows about a concrete text format.
//!
//! # Walk order
//!
//! Writing is a pre-order traversal: the record itself, then each field in
//! declared order, recursing into nested records and into the single child
//! collection a schema may declare. Reading mirrors it and appends children
//! in document order.

mod containment;
mod error;
mod field;
mod ids;
mod mapper;
mod node;
mod record_set;
mod schema;
mod statistics;

pub use containment::ContainmentContext;
pub use error::{ReadError, ReadErrors, SchemaError, SchemaResult};
pub use field::{Choice, FieldDefinition, FieldKind};
pub use ids::EntityId;
pub use mapper::{RecordReader, RecordWriter};
pub use node::{Node, RecordNode, Scalar};
pub use record_set::{DOCUMENT_VERSION, ROOT_TAG, RecordSetReader, RecordSetWriter, WrittenDocument};
pub use schema::{EntityKind, Record, RecordSchema, SchemaBuilder};
pub use statistics::ExportStatistics;
