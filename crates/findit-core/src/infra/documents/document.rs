// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::DocumentStoreError;

pub type Fields = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DocumentStoreError> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|err| {
            DocumentStoreError::Decode {
                id: self.id.clone(),
                source: err,
            }
        })
    }
}

/// Serializes `value` into document fields. Fails unless `value` serializes to a map.
pub fn to_fields<T: Serialize>(value: &T) -> anyhow::Result<Fields> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(anyhow::format_err!("Expected a map of fields, found {other}.")),
    }
}
