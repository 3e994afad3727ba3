use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use super::parameter::{Parameter, ParameterValue};
use crate::enums::phenology::Phenology;

/// Ошибка разбора файла данных PFT
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),
}

/// One plant functional type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryRecord {
    pub phenology: Phenology,
    pub parameters: Vec<Parameter>,
}

impl CategoryRecord {
    /// Build a record from a raw JSON entry.
    ///
    /// Never fails: a non-object entry yields an empty record, a
    /// `parameters` field that is not an object yields no parameters.
    pub fn from_json(value: Value) -> Self {
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => return Self::default(),
        };

        let phenology = Phenology::from_json(fields.get("phenology"));
        let parameters = match fields.remove("parameters") {
            Some(Value::Object(params)) => params
                .into_iter()
                .map(|(name, value)| Parameter {
                    name,
                    value: ParameterValue::from(value),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            phenology,
            parameters,
        }
    }
}

/// All PFTs from the data file, keyed by name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryDataset {
    records: BTreeMap<String, CategoryRecord>,
    /// Dropdown order: ascending by UTF-16 code units, as a browser sorts
    /// strings. Differs from `records`' byte order only when names mix
    /// astral characters with U+E000..U+FFFF.
    names: Vec<String>,
}

impl CategoryDataset {
    pub fn from_json_str(body: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_json(value)
    }

    pub fn from_json(value: Value) -> Result<Self, DatasetError> {
        match value {
            Value::Object(entries) => Ok(Self::from_entries(entries)),
            Value::Array(_) => Err(DatasetError::NotAnObject("an array")),
            Value::String(_) => Err(DatasetError::NotAnObject("a string")),
            Value::Number(_) => Err(DatasetError::NotAnObject("a number")),
            Value::Bool(_) => Err(DatasetError::NotAnObject("a boolean")),
            Value::Null => Err(DatasetError::NotAnObject("null")),
        }
    }

    fn from_entries(entries: Map<String, Value>) -> Self {
        let records: BTreeMap<_, _> = entries
            .into_iter()
            .map(|(name, value)| (name, CategoryRecord::from_json(value)))
            .collect();
        let mut names: Vec<String> = records.keys().cloned().collect();
        names.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
        Self { records, names }
    }

    pub fn get(&self, name: &str) -> Option<&CategoryRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Category names, sorted ascending
    pub fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Alphabetically first name, the initial selection
    pub fn first_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
