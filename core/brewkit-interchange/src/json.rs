//! JSON codec.
//!
//! The root object's keys are the document's sections. Measured values are
//! `{"value": .., "unit": ..}` objects and an empty collection is `[]`; key
//! order follows the field tables.

use brewkit_schema::{Node, ROOT_TAG, RecordNode, Scalar};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{ExportOptions, InterchangeError, InterchangeResult};

/// Renders `root` as a JSON object.
pub fn to_json(root: &RecordNode, options: &ExportOptions) -> InterchangeResult<String> {
    let value = record_value(root, "")?;
    if !options.pretty {
        return Ok(serde_json::to_string(&value)?);
    }

    let indent = " ".repeat(options.indent);
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(String::from_utf8(out)?)
}

fn record_value(record: &RecordNode, path: &str) -> InterchangeResult<Value> {
    let mut map = Map::new();
    for (name, node) in &record.fields {
        let field_path = if path.is_empty() {
            name.clone()
        } else {
            format!("{path}/{name}")
        };
        map.insert(name.clone(), node_value(node, &field_path)?);
    }
    Ok(Value::Object(map))
}

fn node_value(node: &Node, path: &str) -> InterchangeResult<Value> {
    let value = match node {
        Node::Scalar(s) => scalar_value(s, path)?,
        Node::Measured { value, unit } => {
            let mut map = Map::new();
            map.insert("value".into(), scalar_value(value, path)?);
            map.insert("unit".into(), Value::String(unit.clone()));
            Value::Object(map)
        }
        Node::Record(record) => record_value(record, path)?,
        Node::List(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| node_value(item, &format!("{path}[{i}]")))
                .collect::<InterchangeResult<_>>()?,
        ),
        Node::Empty => Value::Array(Vec::new()),
    };
    Ok(value)
}

fn scalar_value(scalar: &Scalar, path: &str) -> InterchangeResult<Value> {
    Ok(match scalar {
        Scalar::Text(s) => Value::String(s.clone()),
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .ok_or_else(|| InterchangeError::NonFinite {
                path: path.to_string(),
                value: *n,
            })?,
    })
}

/// Parses a JSON document into its root record.
pub fn from_json(text: &str) -> InterchangeResult<RecordNode> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => {
            debug!(sections = map.len(), "parsed JSON document");
            Ok(object_record(ROOT_TAG, map))
        }
        other => Err(InterchangeError::Structure(format!(
            "expected a JSON object at the top level, found {}",
            value_kind(&other)
        ))),
    }
}

fn object_record(tag: &str, map: Map<String, Value>) -> RecordNode {
    let fields = map
        .into_iter()
        .map(|(key, value)| {
            let node = value_node(&key, value);
            (key, node)
        })
        .collect();
    RecordNode {
        tag: tag.to_string(),
        fields,
    }
}

fn value_node(name: &str, value: Value) -> Node {
    match value {
        Value::Null => Node::Empty,
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(n) => n.as_f64().map_or_else(|| Node::text(n.to_string()), Node::number),
        Value::String(s) => Node::text(s),
        Value::Array(items) if items.is_empty() => Node::Empty,
        Value::Array(items) => Node::List(items.into_iter().map(|v| value_node(name, v)).collect()),
        Value::Object(map) => Node::Record(object_record(name, map)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
