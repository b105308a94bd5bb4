//! Error types for record mapping.

use std::fmt;
use thiserror::Error;

use brewkit_units::UnitError;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while mapping records to or from a node tree.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A measured field's unit has no name in the field's mapping.
    #[error("cannot export {path}: {source}")]
    Unit {
        path: String,
        #[source]
        source: UnitError,
    },

    /// The input tree did not match the schema.
    #[error("malformed input: {0}")]
    Malformed(ReadErrors),

    /// The document was written by a newer format revision.
    #[error("unsupported document version {found} (newest supported is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// One field that could not be read, located by its path in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    /// Slash-separated field path, e.g. `mashes[0]/mash_steps[1]/step_time`.
    pub path: String,
    pub reason: String,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Every field failure collected during one read pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadErrors(pub Vec<ReadError>);

impl ReadErrors {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReadError> {
        self.0.iter()
    }

    /// Whether any failure is located at `path`.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }
}

impl fmt::Display for ReadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}
