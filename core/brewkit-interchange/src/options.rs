use serde::{Deserialize, Serialize};

/// Rendering options shared by both codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Line breaks and indentation between elements.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
        }
    }
}

impl ExportOptions {
    /// Single-line output.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}
