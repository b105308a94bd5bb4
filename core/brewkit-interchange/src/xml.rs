//! XML codec.
//!
//! Element names are the upper-cased external field names. A measured value
//! carries its unit as an attribute (`<AMOUNT unit="kg">5</AMOUNT>`), a
//! collection wraps one element per item, and an empty collection holds a
//! single `<!-- None -->` comment so it stays distinguishable from a missing
//! field.

use std::io::Write;

use brewkit_schema::{Node, ROOT_TAG, RecordNode, Scalar};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::{ExportOptions, InterchangeError, InterchangeResult};

/// Text of the comment marking an empty collection.
pub const NONE_MARKER: &str = " None ";

const UNIT_ATTRIBUTE: &str = "unit";

/// Renders `root` as an XML document.
pub fn to_xml(root: &RecordNode, options: &ExportOptions) -> InterchangeResult<String> {
    let mut writer = if options.pretty {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_record(&mut writer, &root.tag, root)?;

    let mut bytes = writer.into_inner();
    if options.pretty {
        bytes.push(b'\n');
    }
    Ok(String::from_utf8(bytes)?)
}

fn write_record<W: Write>(writer: &mut Writer<W>, name: &str, record: &RecordNode) -> InterchangeResult<()> {
    let tag = name.to_ascii_uppercase();
    writer.write_event(Event::Start(BytesStart::new(tag.as_str())))?;
    for (field, node) in &record.fields {
        write_node(writer, field, node)?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, name: &str, node: &Node) -> InterchangeResult<()> {
    let tag = name.to_ascii_uppercase();
    match node {
        Node::Scalar(value) => write_leaf(writer, BytesStart::new(tag.as_str()), value)?,
        Node::Measured { value, unit } => {
            let mut start = BytesStart::new(tag.as_str());
            start.push_attribute((UNIT_ATTRIBUTE, unit.as_str()));
            write_leaf(writer, start, value)?;
        }
        Node::Record(record) => write_record(writer, name, record)?,
        Node::List(items) => {
            writer.write_event(Event::Start(BytesStart::new(tag.as_str())))?;
            for item in items {
                match item {
                    Node::Record(record) => write_record(writer, &record.tag, record)?,
                    other => write_node(writer, "item", other)?,
                }
            }
            writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
        }
        Node::Empty => {
            writer.write_event(Event::Start(BytesStart::new(tag.as_str())))?;
            writer.write_event(Event::Comment(BytesText::new(NONE_MARKER)))?;
            writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
        }
    }
    Ok(())
}

fn write_leaf<W: Write>(writer: &mut Writer<W>, start: BytesStart<'_>, value: &Scalar) -> InterchangeResult<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(&value.as_text())))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// An element being read: its name, `unit` attribute and content so far.
struct Frame {
    name: String,
    unit: Option<String>,
    text: String,
    children: Vec<(String, Node)>,
    /// Holds a comment, which only the empty marker writes.
    commented: bool,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> InterchangeResult<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).to_ascii_lowercase();
        let unit = match start
            .try_get_attribute(UNIT_ATTRIBUTE)
            .map_err(quick_xml::Error::from)?
        {
            Some(attr) => Some(attr.unescape_value().map_err(quick_xml::Error::from)?.into_owned()),
            None => None,
        };
        Ok(Self {
            name,
            unit,
            text: String::new(),
            children: Vec::new(),
            commented: false,
        })
    }

    /// Element children make a record and their surrounding whitespace is
    /// indentation. Without children the text is kept verbatim; no text at
    /// all, or only the indentation around a `<!-- None -->` comment, is the
    /// empty marker.
    fn close(self) -> (String, Node) {
        let node = if !self.children.is_empty() {
            Node::Record(RecordNode {
                tag: self.name.clone(),
                fields: self.children,
            })
        } else if self.text.is_empty() || (self.commented && self.text.trim().is_empty()) {
            Node::Empty
        } else {
            let value = Scalar::Text(self.text);
            match self.unit {
                Some(unit) => Node::Measured { value, unit },
                None => Node::Scalar(value),
            }
        };
        (self.name, node)
    }
}

/// Parses an XML document into its root record.
///
/// Tags are matched case-insensitively by lowering them. Leaf text is taken
/// as written, surrounding whitespace included. The root element must be
/// `<BREWKIT>`.
pub fn from_xml(text: &str) -> InterchangeResult<RecordNode> {
    let mut reader = Reader::from_str(text);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let closed = Frame::open(&start)?.close();
                finish_element(&mut stack, &mut root, closed)?;
            }
            Event::Text(content) => {
                let content = content.unescape().map_err(quick_xml::Error::from)?;
                append_text(&mut stack, &content)?;
            }
            Event::CData(content) => {
                let content = String::from_utf8_lossy(&content).into_owned();
                append_text(&mut stack, &content)?;
            }
            Event::Comment(_) => {
                if let Some(frame) = stack.last_mut() {
                    frame.commented = true;
                }
            }
            Event::End(_) => {
                let Some(frame) = stack.pop() else {
                    return Err(InterchangeError::Structure("unbalanced closing tag".into()));
                };
                finish_element(&mut stack, &mut root, frame.close())?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(InterchangeError::Structure(format!(
            "unclosed element <{}>",
            stack.last().map_or("", |f| f.name.as_str()).to_ascii_uppercase()
        )));
    }
    let (name, node) = root.ok_or_else(|| InterchangeError::Structure("document has no root element".into()))?;
    if name != ROOT_TAG {
        return Err(InterchangeError::Structure(format!(
            "expected root element <{}>, found <{}>",
            ROOT_TAG.to_ascii_uppercase(),
            name.to_ascii_uppercase()
        )));
    }
    match node {
        Node::Record(record) => {
            debug!(sections = record.fields.len(), "parsed XML document");
            Ok(record)
        }
        Node::Empty => Ok(RecordNode::new(ROOT_TAG)),
        Node::Scalar(Scalar::Text(t)) if t.trim().is_empty() => Ok(RecordNode::new(ROOT_TAG)),
        other => Err(InterchangeError::Structure(format!(
            "root element holds {}, expected sections",
            other.shape()
        ))),
    }
}

fn append_text(stack: &mut [Frame], content: &str) -> InterchangeResult<()> {
    match stack.last_mut() {
        Some(frame) => {
            frame.text.push_str(content);
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(InterchangeError::Structure("text outside the root element".into())),
    }
}

fn finish_element(
    stack: &mut [Frame],
    root: &mut Option<(String, Node)>,
    element: (String, Node),
) -> InterchangeResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(InterchangeError::Structure("more than one root element".into())),
    }
    Ok(())
}
