use brewkit_schema::{ExportStatistics, Record, RecordNode, RecordSetWriter};
use tracing::info;

use crate::{ExportOptions, Format, InterchangeResult, json, xml};

/// A rendered document and the statistics gathered while writing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub text: String,
    pub statistics: ExportStatistics,
}

/// Collects sections of records into one document.
///
/// Writing the same record type twice appends to its section.
#[derive(Debug)]
pub struct Exporter {
    format: Format,
    options: ExportOptions,
    writer: RecordSetWriter,
    sections: usize,
}

impl Exporter {
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self::with_options(format, ExportOptions::default())
    }

    #[must_use]
    pub fn with_options(format: Format, options: ExportOptions) -> Self {
        Self {
            format,
            options,
            writer: RecordSetWriter::new(),
            sections: 0,
        }
    }

    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Adds `records` as standalone entries of their section.
    pub fn section<R: Record>(&mut self, records: &[R]) -> InterchangeResult<&mut Self> {
        self.writer.write_section(records)?;
        self.sections += 1;
        Ok(self)
    }

    #[must_use]
    pub fn statistics(&self) -> &ExportStatistics {
        self.writer.statistics()
    }

    pub fn finish(self) -> InterchangeResult<Export> {
        let document = self.writer.finish();
        let text = render(&document.root, self.format, &self.options)?;
        info!(
            format = %self.format,
            sections = self.sections,
            bytes = text.len(),
            "export complete"
        );
        Ok(Export {
            text,
            statistics: document.statistics,
        })
    }
}

/// Renders an already-built document tree.
pub fn render(root: &RecordNode, format: Format, options: &ExportOptions) -> InterchangeResult<String> {
    match format {
        Format::Xml => xml::to_xml(root, options),
        Format::Json => json::to_json(root, options),
    }
}

/// Exports a single section.
pub fn export_records<R: Record>(
    records: &[R],
    format: Format,
    options: &ExportOptions,
) -> InterchangeResult<Export> {
    let mut exporter = Exporter::with_options(format, *options);
    exporter.section(records)?;
    exporter.finish()
}
