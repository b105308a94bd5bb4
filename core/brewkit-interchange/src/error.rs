use std::string::FromUtf8Error;

use brewkit_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encoded output is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{path}: {value} cannot be written as JSON")]
    NonFinite { path: String, value: f64 },

    #[error("invalid document structure: {0}")]
    Structure(String),
}

pub type InterchangeResult<T> = Result<T, InterchangeError>;
