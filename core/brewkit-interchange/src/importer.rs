use std::fs;
use std::path::Path;

use brewkit_schema::{Record, RecordNode, RecordSetReader};
use tracing::{debug, info};

use crate::{Format, InterchangeError, InterchangeResult, json, xml};

/// A parsed document whose sections can be read as records.
#[derive(Debug, Clone)]
pub struct Importer {
    format: Format,
    root: RecordNode,
}

impl Importer {
    /// Parses `text` and checks the document version.
    pub fn parse(text: &str, format: Format) -> InterchangeResult<Self> {
        let root = parse_document(text, format)?;
        RecordSetReader::new(&root)?;
        Ok(Self { format, root })
    }

    /// Parses `text`, guessing its format from the content.
    pub fn detect(text: &str) -> InterchangeResult<Self> {
        let format = Format::sniff(text)
            .ok_or_else(|| InterchangeError::UnsupportedFormat("unrecognised document content".into()))?;
        debug!(%format, "sniffed document format");
        Self::parse(text, format)
    }

    /// Reads and parses a file. The extension names the format; content is
    /// sniffed when the extension is not recognised.
    pub fn open(path: &Path) -> InterchangeResult<Self> {
        let text = fs::read_to_string(path)?;
        match Format::from_path(path) {
            Ok(format) => Self::parse(&text, format),
            Err(_) => Self::detect(&text),
        }
    }

    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    #[must_use]
    pub fn root(&self) -> &RecordNode {
        &self.root
    }

    /// Section names present in the document, in document order.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.root.field_names().filter(|n| *n != "version").collect()
    }

    #[must_use]
    pub fn has_section<R: Record>(&self) -> bool {
        self.root.get(R::schema().section()).is_some()
    }

    /// Reads every record of `R`'s section. A missing section is empty.
    pub fn read<R: Record>(&self) -> InterchangeResult<Vec<R>> {
        let records = RecordSetReader::new(&self.root)?.read_section::<R>()?;
        info!(
            section = R::schema().section(),
            count = records.len(),
            "import complete"
        );
        Ok(records)
    }
}

/// Parses `text` into a document tree without reading any records.
pub fn parse_document(text: &str, format: Format) -> InterchangeResult<RecordNode> {
    match format {
        Format::Xml => xml::from_xml(text),
        Format::Json => json::from_json(text),
    }
}

/// Reads the single section of `R` from `text`.
pub fn import_records<R: Record>(text: &str, format: Format) -> InterchangeResult<Vec<R>> {
    Importer::parse(text, format)?.read()
}
