//! Text encodings for brewkit documents.
//!
//! Record sets are written to a format-neutral [`brewkit_schema::Node`]
//! tree first, then rendered by one of two codecs:
//! - [`xml`]: upper-case element names, `unit` attributes on measured
//!   values, `<!-- None -->` for an empty collection
//! - [`json`]: snake_case keys, `{"value", "unit"}` objects for measured
//!   values, `[]` for an empty collection
//!
//! [`Exporter`] and [`Importer`] drive whole documents; [`export_records`]
//! and [`import_records`] cover the single-section case.

mod error;
mod exporter;
mod format;
mod importer;
pub mod json;
mod options;
pub mod xml;

pub use error::{InterchangeError, InterchangeResult};
pub use exporter::{Export, Exporter, export_records, render};
pub use format::Format;
pub use importer::{Importer, import_records, parse_document};
pub use options::ExportOptions;
