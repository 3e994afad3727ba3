use serde_json::{Number, Value};

use crate::shared::number_format::format_number;

/// Capability of producing the text shown in a table cell
pub trait CellText {
    fn cell_text(&self) -> String;
}

/// Scalar parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl CellText for Primitive {
    fn cell_text(&self) -> String {
        match self {
            Primitive::Number(n) => format_number(n),
            Primitive::Text(s) => s.clone(),
            Primitive::Bool(b) => b.to_string(),
        }
    }
}

/// Value of a single PFT parameter.
///
/// Arrays, objects and `null` are kept as opaque JSON and shown serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Primitive(Primitive),
    Structured(Value),
}

impl From<Value> for ParameterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => ParameterValue::Primitive(Primitive::Number(n)),
            Value::String(s) => ParameterValue::Primitive(Primitive::Text(s)),
            Value::Bool(b) => ParameterValue::Primitive(Primitive::Bool(b)),
            other => ParameterValue::Structured(other),
        }
    }
}

impl CellText for ParameterValue {
    fn cell_text(&self) -> String {
        match self {
            ParameterValue::Primitive(p) => p.cell_text(),
            ParameterValue::Structured(v) => {
                let mut out = String::new();
                write_compact_json(v, &mut out);
                out
            }
        }
    }
}

/// Compact JSON, key order kept, numbers written like standalone cells
fn write_compact_json(value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_compact_json(item, out);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (i, (key, item)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // serde_json escapes strings the same way for keys and values
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_compact_json(item, out);
            }
            out.push('}');
        }
        // null, bool and strings need no special casing
        other => out.push_str(&other.to_string()),
    }
}

/// One named parameter, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
}
