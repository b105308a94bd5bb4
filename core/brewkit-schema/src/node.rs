//! Format-neutral document tree.
//!
//! Writers produce it from records; the XML and JSON codecs render it.
//! Readers accept the shapes either codec produces, so the tree coming back
//! from text is not always identical to the one that was written (XML leaves
//! are all text, XML collections arrive as records of records).

use std::borrow::Cow;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Scalar {
    /// Text rendering used by formats without typed leaves.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Bool(b) => Cow::Borrowed(if *b { "TRUE" } else { "FALSE" }),
        }
    }

    /// Numeric value; text is parsed leniently.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Boolean value; accepts `true/false`, `yes/no` and `1/0` in any case.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Number(n) if *n == 0.0 => Some(false),
            Self::Number(n) if *n == 1.0 => Some(true),
            Self::Number(_) => None,
            Self::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One field value in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    /// An amount tagged with an external unit name.
    Measured { value: Scalar, unit: String },
    Record(RecordNode),
    /// Ordered child records.
    List(Vec<Node>),
    /// Explicit "none" marker: the collection is present and has no items.
    Empty,
}

impl Node {
    /// Short description of the node's shape for error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "a scalar",
            Self::Measured { .. } => "a measured value",
            Self::Record(_) => "a record",
            Self::List(_) => "a collection",
            Self::Empty => "an empty marker",
        }
    }

    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(s.into()))
    }

    #[must_use]
    pub fn number(n: f64) -> Self {
        Self::Scalar(Scalar::Number(n))
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&RecordNode> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A record: a tag plus its fields in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordNode {
    pub tag: String,
    pub fields: Vec<(String, Node)>,
}

impl RecordNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            fields: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, node: Node) {
        self.fields.push((name.into(), node));
    }

    /// Builder-style `push`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, node: Node) -> Self {
        self.push(name, node);
        self
    }

    /// First field named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}
