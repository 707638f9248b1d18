//! Runtime sample values the generator inspects.
//!
//! A `Sample` is the shape-bearing snapshot of one value from a target
//! module: primitives, `None`, lists, fixed-arity tuples, and string-keyed
//! dictionaries. Dictionaries preserve insertion order because declaration
//! field order must match the source's iteration order.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    None,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
    List(Vec<Sample>),
    Tuple(Vec<Sample>),
    Dict(IndexMap<String, Sample>),
}

impl Sample {
    pub fn str(value: impl Into<String>) -> Self {
        Sample::Str(value.into())
    }

    pub fn float(value: f64) -> Self {
        Sample::Float(OrderedFloat(value))
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        Sample::List(items.into_iter().collect())
    }

    pub fn tuple<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        Sample::Tuple(items.into_iter().collect())
    }

    pub fn dict<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Sample)>,
    {
        Sample::Dict(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn as_dict(&self) -> Option<&IndexMap<String, Sample>> {
        match self {
            Sample::Dict(map) => Some(map),
            _ => None,
        }
    }

    /// Render the value back as Python source text.
    ///
    /// Strings are re-quoted so the emitted assignment stays syntactically
    /// valid; containers use literal syntax, matching `repr` output.
    pub fn py_literal(&self) -> String {
        match self {
            Sample::None => "None".to_string(),
            Sample::Bool(true) => "True".to_string(),
            Sample::Bool(false) => "False".to_string(),
            Sample::Int(value) => value.to_string(),
            Sample::Float(value) => py_float(value.0),
            Sample::Str(value) => py_str(value),
            Sample::List(items) => format!("[{}]", join_literals(items)),
            Sample::Tuple(items) => match items.len() {
                // one-element tuples need the trailing comma
                1 => format!("({},)", items[0].py_literal()),
                _ => format!("({})", join_literals(items)),
            },
            Sample::Dict(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", py_str(key), value.py_literal()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{body}}}")
            }
        }
    }
}

fn join_literals(items: &[Sample]) -> String {
    items
        .iter()
        .map(Sample::py_literal)
        .collect::<Vec<_>>()
        .join(", ")
}

// Python floats always carry a decimal point, so 4 → "4.0".
fn py_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn py_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

impl From<&str> for Sample {
    fn from(value: &str) -> Self {
        Sample::Str(value.to_string())
    }
}

impl From<String> for Sample {
    fn from(value: String) -> Self {
        Sample::Str(value)
    }
}

impl From<bool> for Sample {
    fn from(value: bool) -> Self {
        Sample::Bool(value)
    }
}

impl From<i64> for Sample {
    fn from(value: i64) -> Self {
        Sample::Int(value)
    }
}

impl From<f64> for Sample {
    fn from(value: f64) -> Self {
        Sample::float(value)
    }
}

/// Lossless import of a JSON document (`preserve_order` keeps object keys
/// in document order). JSON has no tuple syntax, so arrays become lists.
impl From<serde_json::Value> for Sample {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Sample::None,
            serde_json::Value::Bool(b) => Sample::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Sample::Int(i)
                } else {
                    Sample::float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Sample::Str(s),
            serde_json::Value::Array(items) => {
                Sample::List(items.into_iter().map(Sample::from).collect())
            }
            serde_json::Value::Object(entries) => Sample::Dict(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Sample::from(value)))
                    .collect(),
            ),
        }
    }
}
