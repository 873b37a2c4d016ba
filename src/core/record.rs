//! Purpose: Schema-agnostic client record and the immutable dataset that holds them.
//! Exports: `Record`, `Dataset`, `REQUIRED_FIELDS`, `json_type_name`.
//! Role: Data model shared by the store (construction) and query engine (reads).
//! Invariants: Records keep original key order; datasets keep original record order.
//! Invariants: A `Dataset` is only built from fully validated input; no mutation API exists.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind, Result};

/// Fields the default CLI commands expect on every record.
pub const REQUIRED_FIELDS: &[&str] = &["id", "full_name", "email"];

/// One client entry: an ordered mapping from field name to JSON value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Text used for substring matching. `None` when the field is absent or null.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).and_then(value_text)
    }
}

/// Plain-text rendering of a value: strings unquoted, null as `None`,
/// everything else as compact JSON.
pub fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        Value::Number(num) => Some(Cow::Owned(num.to_string())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Immutable, ordered snapshot of every record loaded from one file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Parse JSON text and validate that it is an array of objects.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Self::from_json_slice(input.as_bytes())
    }

    pub(crate) fn from_json_slice(input: &[u8]) -> Result<Self> {
        let value: Value = crate::json::parse::from_slice(input).map_err(|err| {
            let hint = crate::json::parse::hint_for_error(&err, "dataset");
            Error::new(ErrorKind::MalformedInput)
                .with_message(format!("invalid JSON format: {err}"))
                .with_hint(hint)
                .with_source(err)
        })?;
        Self::from_value(value)
    }

    /// Validate an already-decoded document.
    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(Error::new(ErrorKind::InvalidShape)
                    .with_message(format!(
                        "expected JSON array, got {}",
                        json_type_name(&other)
                    ))
                    .with_hint("The data file must contain a top-level array of client objects."));
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(fields) => records.push(Record::new(fields)),
                other => {
                    return Err(Error::new(ErrorKind::InvalidShape)
                        .with_message(format!(
                            "expected object at index {index}, got {}",
                            json_type_name(&other)
                        ))
                        .with_index(index));
                }
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Strict check that every record carries each of `fields`.
    /// Reports the first offending record only.
    pub fn check_required_fields(&self, fields: &[&str]) -> Result<()> {
        for (index, record) in self.records.iter().enumerate() {
            let missing = fields
                .iter()
                .copied()
                .filter(|field| !record.contains_field(field))
                .collect::<Vec<_>>();
            if !missing.is_empty() {
                return Err(Error::new(ErrorKind::InvalidShape)
                    .with_message(format!(
                        "missing required fields at index {index}: {}",
                        missing.join(", ")
                    ))
                    .with_index(index));
            }
        }
        Ok(())
    }
}
